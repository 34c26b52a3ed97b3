use std::collections::HashSet;

use egui::{Color32, Key, PointerButton};
use log::{debug, info, trace};

use crate::config::{CanvasConfig, ViewConfig};
use crate::document::Document;
use crate::error::{ConfigResult, PaletteError};
use crate::geometry::{ScreenPoint, ScreenVector, WorldPoint, WorldRect, WorldVector};
use crate::id_generator::ShapeId;
use crate::input::{Completed, GestureState, InputEvent, MoveOutcome};
use crate::palette;
use crate::painter::{Painter, PainterStats};
use crate::renderer;
use crate::settings::Settings;
use crate::shape::ShapeType;
use crate::transform::{normalize_wheel, CanvasTransform};

/// The interactive canvas: shapes, viewport, gesture and hover state.
///
/// All mutation goes through the `handle_*`/`pointer_*` methods, each of
/// which reports whether the visible state changed so the host knows when to
/// repaint. Rendering only reads.
#[derive(Debug)]
pub struct Canvas {
    document: Document,
    transform: CanvasTransform,
    gesture: GestureState,
    hover: HashSet<ShapeId>,
    /// Last pointer position seen inside the canvas.
    pointer: Option<ScreenPoint>,
    settings: Settings,
    view: ViewConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Settings::default(), ViewConfig::default())
    }
}

impl Canvas {
    /// Empty canvas with an identity view.
    pub fn new(settings: Settings, view: ViewConfig) -> Self {
        Self {
            document: Document::new(),
            transform: CanvasTransform::from_config(&view),
            gesture: GestureState::new(),
            hover: HashSet::new(),
            pointer: None,
            settings,
            view,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> ConfigResult<Self> {
        config.view.validate()?;
        let settings = config.resolve_settings()?;
        Ok(Self::new(settings, config.view.clone()))
    }

    /// Adds the two demo rectangles.
    pub fn seed_initial_scene(&mut self) -> Result<(), PaletteError> {
        let red = palette::lookup("red")?;
        let blue = palette::lookup("blue")?;
        self.add_rectangle(red, WorldRect::new(WorldPoint::new(10.0, 10.0), WorldVector::new(10.0, 10.0)));
        self.add_rectangle(blue, WorldRect::new(WorldPoint::new(20.0, 10.0), WorldVector::new(10.0, 30.0)));
        info!("seeded initial scene with {} shapes", self.document.len());
        Ok(())
    }

    pub fn add(&mut self, build: impl FnOnce(ShapeId) -> ShapeType) -> ShapeId {
        self.document.add_with(build)
    }

    pub fn add_rectangle(&mut self, color: Color32, rect: WorldRect) -> ShapeId {
        self.document.add_rectangle(color, rect)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The committed transform, without any in-flight pan.
    pub fn transform(&self) -> &CanvasTransform {
        &self.transform
    }

    /// The transform as currently seen on screen: committed scroll plus the
    /// pan delta of an active pan gesture.
    pub fn view_transform(&self) -> CanvasTransform {
        self.transform.panned(self.gesture.pan_delta())
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn hover(&self) -> &HashSet<ShapeId> {
        &self.hover
    }

    pub fn is_hovered(&self, id: ShapeId) -> bool {
        self.hover.contains(&id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view_config(&self) -> &ViewConfig {
        &self.view
    }

    /// Feeds one host event through the matching handler.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { location, button } => self.pointer_down(*button, location.position),
            InputEvent::PointerUp { location, button } => self.pointer_up(*button, location.position),
            InputEvent::PointerMove { location } => self.pointer_move(location.position),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Wheel {
                location,
                rotation,
                step,
            } => self.wheel(location.position, *rotation, *step),
            InputEvent::KeyDown { key } => self.key_down(*key),
        }
    }

    pub fn pointer_down(&mut self, button: PointerButton, position: ScreenPoint) -> bool {
        self.pointer = Some(position);
        self.gesture.pointer_down(button, position)
    }

    pub fn pointer_up(&mut self, button: PointerButton, position: ScreenPoint) -> bool {
        self.pointer = Some(position);
        match self.gesture.pointer_up(button, position) {
            Some(Completed::Pan(delta)) => {
                self.transform.pan_by(delta);
                debug!("pan committed, scroll now ({}, {})", self.transform.scroll().x, self.transform.scroll().y);
                self.refresh_hover();
                true
            }
            Some(Completed::Selection(selection)) => {
                let world = self.transform.to_world_rect(&selection.rect);
                debug!(
                    "selection finished: ({}, {}) {}x{} world, {:?}",
                    world.left(),
                    world.top(),
                    world.width(),
                    world.height(),
                    selection.direction
                );
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, position: ScreenPoint) -> bool {
        self.pointer = Some(position);
        match self.gesture.pointer_move(position) {
            MoveOutcome::Hover => self.update_hover(position),
            MoveOutcome::Panning(_) | MoveOutcome::Selecting(_) => true,
        }
    }

    /// Clears the hover set when the pointer leaves while idle.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer = None;
        if self.gesture.is_active() || self.hover.is_empty() {
            return false;
        }
        trace!("pointer left, clearing {} hovered", self.hover.len());
        self.hover.clear();
        true
    }

    /// Zooms about `position`; processed in every gesture state.
    ///
    /// The world point under `position` on the displayed view stays put,
    /// including while a pan is in flight.
    pub fn wheel(&mut self, position: ScreenPoint, rotation: f32, step: f32) -> bool {
        self.pointer = Some(position);
        let delta = normalize_wheel(rotation, step, self.view.wheel_reference_unit);
        let changed = self.transform.zoom(position - self.gesture.pan_delta(), delta);
        if changed {
            trace!("zoom {} -> scale {:.3}", delta, self.transform.scale());
            self.refresh_hover();
        }
        changed
    }

    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.gesture.cancel(),
            Key::Home => {
                let changed = self.transform.reset();
                if changed {
                    debug!("view reset");
                    self.refresh_hover();
                }
                changed
            }
            _ => false,
        }
    }

    /// Re-runs the hover hit-test at the last pointer position after the
    /// view moved under a stationary pointer. Only while idle.
    fn refresh_hover(&mut self) -> bool {
        match self.pointer {
            Some(position) if !self.gesture.is_active() => self.update_hover(position),
            _ => false,
        }
    }

    fn update_hover(&mut self, position: ScreenPoint) -> bool {
        let hits = self
            .document
            .hit_test(&self.transform, position, self.view.hit_tolerance);
        if hits == self.hover {
            return false;
        }
        trace!("hover {} -> {} shapes", self.hover.len(), hits.len());
        self.hover = hits;
        true
    }

    /// One-line summary for the status overlay.
    pub fn status_text(&self) -> String {
        format!(
            "scale {:.2}  hover {}  {}",
            self.transform.scale(),
            self.hover.len(),
            self.gesture.mode().name()
        )
    }

    /// Draws the current state into `painter`; see [`renderer::render`].
    pub fn render(&self, painter: &mut Painter<'_>, viewport: ScreenVector) -> PainterStats {
        renderer::render(self, painter, viewport)
    }
}
