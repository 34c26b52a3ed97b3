use egui::{Context, Key, PointerButton, Pos2, Rect};

use crate::geometry::ScreenPoint;

pub mod gestures;

pub use gestures::{Completed, GestureMode, GestureState, MoveOutcome, SelectionBox, SelectionDirection};

const BUTTONS: [PointerButton; 3] = [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle];
const KEYS: [Key; 2] = [Key::Escape, Key::Home];

/// Where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas origin
    pub position: ScreenPoint,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Host-neutral input events the canvas understands
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    PointerMove {
        location: InputLocation,
    },
    /// Pointer left the canvas (or the window)
    PointerLeave,
    /// `rotation * step` is the raw wheel amount, normalized later against
    /// the configured reference unit.
    Wheel {
        location: InputLocation,
        rotation: f32,
        step: f32,
    },
    KeyDown {
        key: Key,
    },
}

/// Converts raw egui input into [`InputEvent`]s relative to the canvas rect
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_in_canvas: bool,
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        match self.canvas_rect {
            Some(rect) => InputLocation {
                position: ScreenPoint::from_pos2(pos - rect.min.to_vec2()),
                is_in_canvas: rect.contains(pos),
            },
            None => InputLocation {
                position: ScreenPoint::from_pos2(pos),
                is_in_canvas: true,
            },
        }
    }

    /// Collects this frame's events in the order the canvas should see them:
    /// movement, leave, buttons, wheel, keys.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                    });
                }
            }

            let in_canvas = hover.is_some_and(|pos| self.make_location(pos).is_in_canvas);
            if self.was_in_canvas && !in_canvas {
                events.push(InputEvent::PointerLeave);
            }
            self.was_in_canvas = in_canvas;
            if hover.is_some() {
                self.last_pointer_pos = hover;
            }

            // Releases use the last known position so a gesture dragged out
            // of the window still ends.
            let latest = input.pointer.latest_pos().or(self.last_pointer_pos);
            for button in BUTTONS {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = hover {
                        let location = self.make_location(pos);
                        if location.is_in_canvas {
                            events.push(InputEvent::PointerDown { location, button });
                        }
                    }
                }
                if input.pointer.button_released(button) {
                    if let Some(pos) = latest {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            let wheel = input.raw_scroll_delta.y;
            if wheel != 0.0 {
                if let Some(pos) = hover {
                    let location = self.make_location(pos);
                    if location.is_in_canvas {
                        events.push(InputEvent::Wheel {
                            location,
                            rotation: wheel,
                            step: 1.0,
                        });
                    }
                }
            }

            for key in KEYS {
                if input.key_pressed(key) {
                    events.push(InputEvent::KeyDown { key });
                }
            }
        });

        events
    }
}
