use egui::Color32;

use super::{paint_handles, Shape};
use crate::geometry::hit_testing::is_rect_hit;
use crate::geometry::{ScreenPoint, WorldRect};
use crate::id_generator::ShapeId;
use crate::painter::Painter;
use crate::settings::Settings;
use crate::transform::CanvasTransform;

/// Filled axis-aligned rectangle in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    id: ShapeId,
    color: Color32,
    rect: WorldRect,
}

impl RectangleShape {
    /// `rect` is stored normalized.
    pub fn new(id: ShapeId, color: Color32, rect: WorldRect) -> Self {
        Self {
            id,
            color,
            rect: rect.normalized(),
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn rect(&self) -> WorldRect {
        self.rect
    }
}

impl Shape for RectangleShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn shape_type(&self) -> &'static str {
        "rectangle"
    }

    fn paint(&self, painter: &mut Painter<'_>, transform: &CanvasTransform, settings: &Settings, highlighted: bool) {
        let screen = transform.to_screen_rect(&self.rect);
        painter.draw_rectangle(screen, Some(self.color), None);
        if highlighted {
            paint_handles(painter, &screen, settings);
        }
    }

    fn is_hit(&self, transform: &CanvasTransform, point: ScreenPoint, tolerance: f32) -> bool {
        is_rect_hit(transform, &self.rect, point, tolerance)
    }
}
