use egui::Color32;

use crate::geometry::{ScreenPoint, ScreenRect, WorldRect};
use crate::id_generator::ShapeId;
use crate::painter::{Outline, Painter};
use crate::settings::Settings;
use crate::transform::CanvasTransform;

mod rectangle;

pub use rectangle::RectangleShape;

/// Behaviour every shape on the canvas provides.
pub trait Shape {
    fn id(&self) -> ShapeId;

    fn shape_type(&self) -> &'static str;

    /// Draws the shape through `painter`; `highlighted` adds selection handles.
    fn paint(&self, painter: &mut Painter<'_>, transform: &CanvasTransform, settings: &Settings, highlighted: bool);

    /// Whether screen point `point` is within `tolerance` pixels of the shape.
    fn is_hit(&self, transform: &CanvasTransform, point: ScreenPoint, tolerance: f32) -> bool;
}

/// Closed set of shapes the canvas knows how to hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Rectangle(RectangleShape),
}

impl Shape for ShapeType {
    fn id(&self) -> ShapeId {
        match self {
            ShapeType::Rectangle(r) => r.id(),
        }
    }

    fn shape_type(&self) -> &'static str {
        match self {
            ShapeType::Rectangle(r) => r.shape_type(),
        }
    }

    fn paint(&self, painter: &mut Painter<'_>, transform: &CanvasTransform, settings: &Settings, highlighted: bool) {
        match self {
            ShapeType::Rectangle(r) => r.paint(painter, transform, settings, highlighted),
        }
    }

    fn is_hit(&self, transform: &CanvasTransform, point: ScreenPoint, tolerance: f32) -> bool {
        match self {
            ShapeType::Rectangle(r) => r.is_hit(transform, point, tolerance),
        }
    }
}

impl From<RectangleShape> for ShapeType {
    fn from(shape: RectangleShape) -> Self {
        ShapeType::Rectangle(shape)
    }
}

/// Thin frame plus a round handle on each corner of `rect`.
pub(crate) fn paint_handles(painter: &mut Painter<'_>, rect: &ScreenRect, settings: &Settings) {
    let frame = Outline::new(settings.handle_color, 1.0);
    painter.draw_rectangle(*rect, None, Some(&frame));

    let ring = Outline::new(settings.background_color, 1.0);
    for corner in rect.corners() {
        painter.draw_circle(corner, settings.handle_radius, Some(settings.handle_color), Some(&ring));
    }
}

/// Constructors for concrete shapes.
pub mod factory {
    use super::*;

    pub fn create_rectangle(id: ShapeId, color: Color32, rect: WorldRect) -> ShapeType {
        ShapeType::Rectangle(RectangleShape::new(id, color, rect))
    }
}
