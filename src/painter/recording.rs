use std::cell::RefCell;
use std::rc::Rc;

use egui::Color32;

use super::{Backend, DrawSink, Outline};
use crate::geometry::{ScreenPoint, ScreenRect};

/// One primitive as it reached a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color32),
    Text {
        text: String,
        position: ScreenPoint,
        color: Color32,
    },
    Rectangle {
        rect: ScreenRect,
        fill: Option<Color32>,
        outline: Option<Outline>,
    },
    Circle {
        center: ScreenPoint,
        radius: f32,
        fill: Option<Color32>,
        outline: Option<Outline>,
    },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        outline: Outline,
    },
}

/// Shared, ordered log of draw calls from any number of [`RecordingSink`]s.
///
/// Lets headless code (tests, diagnostics) see exactly which primitives a
/// frame produced and which backend each went to.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    entries: Rc<RefCell<Vec<(Backend, DrawCall)>>>,
}

impl DrawLog {
    pub fn sink(&self, backend: Backend) -> RecordingSink {
        RecordingSink {
            log: self.clone(),
            backend,
        }
    }

    pub fn entries(&self) -> Vec<(Backend, DrawCall)> {
        self.entries.borrow().clone()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.entries.borrow().iter().map(|(_, call)| call.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// [`DrawSink`] that appends to a [`DrawLog`] instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    log: DrawLog,
    backend: Backend,
}

impl RecordingSink {
    fn push(&self, call: DrawCall) {
        self.log.entries.borrow_mut().push((self.backend, call));
    }
}

impl DrawSink for RecordingSink {
    fn clear(&mut self, color: Color32) {
        self.push(DrawCall::Clear(color));
    }

    fn text(&mut self, text: &str, position: ScreenPoint, color: Color32) {
        self.push(DrawCall::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn rectangle(&mut self, rect: ScreenRect, fill: Option<Color32>, outline: Option<&Outline>) {
        self.push(DrawCall::Rectangle {
            rect,
            fill,
            outline: outline.copied(),
        });
    }

    fn circle(&mut self, center: ScreenPoint, radius: f32, fill: Option<Color32>, outline: Option<&Outline>) {
        self.push(DrawCall::Circle {
            center,
            radius,
            fill,
            outline: outline.copied(),
        });
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, outline: &Outline) {
        self.push(DrawCall::Line {
            from,
            to,
            outline: *outline,
        });
    }
}
