use egui::{Align2, Color32, FontId, Pos2, Vec2};

use super::{dash_polyline, Backend, DrawSink, Outline};
use crate::geometry::{ScreenPoint, ScreenRect};

const STATUS_FONT_SIZE: f32 = 12.0;
const CIRCLE_SEGMENTS: usize = 48;

/// [`DrawSink`] on top of an [`egui::Painter`].
///
/// Canvas coordinates are offset by the top-left corner of the allocated
/// region. The opaque variant snaps all geometry to the physical pixel grid
/// so solid fills come out crisp; the compositing variant keeps sub-pixel
/// positions and lets egui blend.
#[derive(Clone)]
pub struct EguiSink {
    painter: egui::Painter,
    origin: Vec2,
    backend: Backend,
}

impl std::fmt::Debug for EguiSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EguiSink")
            .field("origin", &self.origin)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl EguiSink {
    pub fn new(painter: egui::Painter, origin: Pos2, backend: Backend) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            backend,
        }
    }

    /// One sink per backend, both drawing into the same layer in call order.
    pub fn pair(painter: &egui::Painter, origin: Pos2) -> (Self, Self) {
        (
            Self::new(painter.clone(), origin, Backend::Opaque),
            Self::new(painter.clone(), origin, Backend::Compositing),
        )
    }

    fn snap(&self, v: f32) -> f32 {
        match self.backend {
            Backend::Opaque => {
                let ppp = self.painter.ctx().pixels_per_point();
                (v * ppp).round() / ppp
            }
            Backend::Compositing => v,
        }
    }

    fn pos(&self, p: ScreenPoint) -> Pos2 {
        let p = p.to_pos2() + self.origin;
        egui::pos2(self.snap(p.x), self.snap(p.y))
    }

    fn egui_rect(&self, rect: &ScreenRect) -> egui::Rect {
        let [topleft, _, bottom_right, _] = rect.corners();
        egui::Rect::from_min_max(self.pos(topleft), self.pos(bottom_right))
    }

    fn stroke_polyline(&self, points: &[ScreenPoint], outline: &Outline) {
        let stroke = outline.to_egui();
        for (a, b) in dash_polyline(points, outline.style.pattern(), outline.width) {
            self.painter.line_segment([self.pos(a), self.pos(b)], stroke);
        }
    }
}

impl DrawSink for EguiSink {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn text(&mut self, text: &str, position: ScreenPoint, color: Color32) {
        self.painter.text(
            self.pos(position),
            Align2::LEFT_TOP,
            text,
            FontId::monospace(STATUS_FONT_SIZE),
            color,
        );
    }

    fn rectangle(&mut self, rect: ScreenRect, fill: Option<Color32>, outline: Option<&Outline>) {
        let egui_rect = self.egui_rect(&rect);
        if let Some(fill) = fill {
            self.painter.rect_filled(egui_rect, 0.0, fill);
        }
        if let Some(outline) = outline {
            if outline.style.pattern().is_empty() {
                self.painter.rect_stroke(egui_rect, 0.0, outline.to_egui());
            } else {
                let [a, b, c, d] = rect.corners();
                self.stroke_polyline(&[a, b, c, d, a], outline);
            }
        }
    }

    fn circle(&mut self, center: ScreenPoint, radius: f32, fill: Option<Color32>, outline: Option<&Outline>) {
        let c = self.pos(center);
        if let Some(fill) = fill {
            self.painter.circle_filled(c, radius, fill);
        }
        if let Some(outline) = outline {
            if outline.style.pattern().is_empty() {
                self.painter.circle_stroke(c, radius, outline.to_egui());
            } else {
                let ring: Vec<ScreenPoint> = (0..=CIRCLE_SEGMENTS)
                    .map(|i| {
                        let angle = std::f32::consts::TAU * i as f32 / CIRCLE_SEGMENTS as f32;
                        ScreenPoint::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
                    })
                    .collect();
                self.stroke_polyline(&ring, outline);
            }
        }
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, outline: &Outline) {
        self.stroke_polyline(&[from, to], outline);
    }
}
