use crate::canvas::Canvas;
use crate::input::InputHandler;
use crate::panels::central_panel;

/// Native shell hosting a single canvas in the central panel.
#[derive(Debug, Default)]
pub struct VecyApp {
    canvas: Canvas,
    input_handler: InputHandler,
}

impl VecyApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, canvas: Canvas) -> Self {
        Self::with_canvas(canvas)
    }

    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            input_handler: InputHandler::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input_handler
    }
}

impl eframe::App for VecyApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        central_panel(self, ctx);
    }
}
