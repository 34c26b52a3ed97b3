mod central_panel;

pub use central_panel::central_panel;
