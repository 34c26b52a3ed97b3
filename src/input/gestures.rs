//! Pointer gesture state machine.
//!
//! ```text
//!            primary down            primary up
//!   None ───────────────▶ Selecting ───────────▶ None
//!     │   middle down                 middle up
//!     └────────────────▶ Panning ─────────────▶ None
//! ```
//!
//! A button-down while a gesture is active, or a button-up for the other
//! button, is ignored. The machine only tracks positions; the canvas applies
//! the effects (hover recomputation, committing the pan).

use egui::PointerButton;
use log::debug;

use crate::geometry::{ScreenPoint, ScreenRect, ScreenVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    None,
    Panning,
    Selecting,
}

impl GestureMode {
    pub fn name(self) -> &'static str {
        match self {
            GestureMode::None => "idle",
            GestureMode::Panning => "panning",
            GestureMode::Selecting => "selecting",
        }
    }

    /// The button that starts, and must end, this gesture.
    fn button(self) -> Option<PointerButton> {
        match self {
            GestureMode::None => None,
            GestureMode::Panning => Some(PointerButton::Middle),
            GestureMode::Selecting => Some(PointerButton::Primary),
        }
    }
}

/// Which way the selection box was dragged, relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Rightward,
    Leftward,
}

/// Live selection preview: the normalized box and the drag direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBox {
    pub rect: ScreenRect,
    pub direction: SelectionDirection,
}

/// What a pointer move meant for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No gesture active; the caller should refresh the hover set.
    Hover,
    Panning(ScreenVector),
    Selecting(SelectionBox),
}

/// A gesture that just ended on its own button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completed {
    /// Pan offset to add to the transform's scroll.
    Pan(ScreenVector),
    Selection(SelectionBox),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    mode: GestureMode,
    anchor: ScreenPoint,
    latest: ScreenPoint,
    pan_delta: ScreenVector,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != GestureMode::None
    }

    pub fn anchor(&self) -> ScreenPoint {
        self.anchor
    }

    pub fn latest(&self) -> ScreenPoint {
        self.latest
    }

    /// Uncommitted pan offset; zero unless panning.
    pub fn pan_delta(&self) -> ScreenVector {
        self.pan_delta
    }

    /// The selection preview while [`GestureMode::Selecting`].
    pub fn selection_box(&self) -> Option<SelectionBox> {
        (self.mode == GestureMode::Selecting).then(|| self.current_box())
    }

    fn current_box(&self) -> SelectionBox {
        let direction = if self.latest.x >= self.anchor.x {
            SelectionDirection::Rightward
        } else {
            SelectionDirection::Leftward
        };
        SelectionBox {
            rect: ScreenRect::at(self.anchor).include(self.latest),
            direction,
        }
    }

    /// Starts a gesture. Returns `false` when the press is ignored.
    pub fn pointer_down(&mut self, button: PointerButton, position: ScreenPoint) -> bool {
        if self.is_active() {
            return false;
        }
        let mode = match button {
            PointerButton::Primary => GestureMode::Selecting,
            PointerButton::Middle => GestureMode::Panning,
            _ => return false,
        };

        debug!("gesture {} -> {} at ({}, {})", self.mode.name(), mode.name(), position.x, position.y);
        self.mode = mode;
        self.anchor = position;
        self.latest = position;
        self.pan_delta = ScreenVector::ZERO;
        true
    }

    pub fn pointer_move(&mut self, position: ScreenPoint) -> MoveOutcome {
        match self.mode {
            GestureMode::None => MoveOutcome::Hover,
            GestureMode::Panning => {
                self.latest = position;
                self.pan_delta = position - self.anchor;
                MoveOutcome::Panning(self.pan_delta)
            }
            GestureMode::Selecting => {
                self.latest = position;
                MoveOutcome::Selecting(self.current_box())
            }
        }
    }

    /// Ends the active gesture if `button` is the one that started it.
    pub fn pointer_up(&mut self, button: PointerButton, position: ScreenPoint) -> Option<Completed> {
        if self.mode.button() != Some(button) {
            return None;
        }

        self.pointer_move(position);
        let completed = match self.mode {
            GestureMode::Panning => Completed::Pan(self.pan_delta),
            GestureMode::Selecting => Completed::Selection(self.current_box()),
            GestureMode::None => return None,
        };

        debug!("gesture {} -> {}", self.mode.name(), GestureMode::None.name());
        self.reset();
        Some(completed)
    }

    /// Abandons the active gesture without committing anything.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        debug!("gesture {} cancelled", self.mode.name());
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.mode = GestureMode::None;
        self.pan_delta = ScreenVector::ZERO;
    }
}
