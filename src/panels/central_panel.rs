use log::trace;

use crate::geometry::ScreenVector;
use crate::painter::{EguiSink, Painter};
use crate::VecyApp;

pub fn central_panel(app: &mut VecyApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input
            app.input_handler_mut().set_canvas_rect(canvas_rect);
            let events = app.input_handler_mut().process_input(ctx);
            let mut repaint = false;
            for event in &events {
                repaint |= app.canvas_mut().handle_event(event);
            }

            // Render the canvas
            let (mut opaque, mut compositing) = EguiSink::pair(&painter, canvas_rect.min);
            let mut canvas_painter = Painter::new(&mut opaque, &mut compositing);
            let stats = app
                .canvas()
                .render(&mut canvas_painter, ScreenVector::from_vec2(canvas_rect.size()));
            trace!(
                "frame: {} opaque, {} compositing, {} skipped",
                stats.opaque,
                stats.compositing,
                stats.skipped
            );

            if repaint {
                ctx.request_repaint();
            }
        });
}
