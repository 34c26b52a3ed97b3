//! Drawing facade that routes every primitive to one of two sinks.
//!
//! The opaque sink is the cheap path: solid colors, pixel-snapped geometry.
//! The compositing sink blends with what is already on the surface. Which one
//! a call goes to depends only on the alpha of the colors involved
//! ([`choose_backend`]), never on what is being drawn.

use egui::Color32;
use log::trace;

use crate::geometry::{ScreenPoint, ScreenRect};

mod dash;
mod egui_sink;
mod recording;

pub use dash::{dash_polyline, Segment};
pub use egui_sink::EguiSink;
pub use recording::{DrawCall, DrawLog, RecordingSink};

/// The two rendering paths a [`Painter`] can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Opaque,
    Compositing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dot,
    LongDash,
    ShortDash,
    DotDash,
}

impl LineStyle {
    /// Alternating on/off lengths in multiples of the stroke width.
    /// Empty for a solid line.
    pub fn pattern(self) -> &'static [f32] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dot => &[1.0, 2.0],
            LineStyle::LongDash => &[8.0, 4.0],
            LineStyle::ShortDash => &[4.0, 4.0],
            LineStyle::DotDash => &[8.0, 3.0, 1.0, 3.0],
        }
    }
}

/// Stroke applied around a filled primitive, or along a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Outline {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn to_egui(&self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.color)
    }
}

fn is_opaque(color: Color32) -> bool {
    color.a() == u8::MAX
}

/// Opaque path iff every color that will actually be drawn is fully opaque.
///
/// A missing fill or outline is not drawn and so never forces compositing.
pub fn choose_backend(fill: Option<Color32>, outline: Option<&Outline>) -> Backend {
    let fill_opaque = fill.is_none_or(is_opaque);
    let outline_opaque = outline.is_none_or(|o| is_opaque(o.color));
    if fill_opaque && outline_opaque {
        Backend::Opaque
    } else {
        Backend::Compositing
    }
}

/// A rendering target able to draw the painter's primitives.
///
/// Positions are in screen space relative to the drawable region.
pub trait DrawSink {
    fn clear(&mut self, color: Color32);

    fn text(&mut self, text: &str, position: ScreenPoint, color: Color32);

    fn rectangle(&mut self, rect: ScreenRect, fill: Option<Color32>, outline: Option<&Outline>);

    fn circle(&mut self, center: ScreenPoint, radius: f32, fill: Option<Color32>, outline: Option<&Outline>);

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, outline: &Outline);
}

/// How many calls each path received while painting one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PainterStats {
    pub opaque: usize,
    pub compositing: usize,
    pub skipped: usize,
}

pub struct Painter<'a> {
    opaque: &'a mut dyn DrawSink,
    compositing: &'a mut dyn DrawSink,
    stats: PainterStats,
}

impl std::fmt::Debug for Painter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<'a> Painter<'a> {
    pub fn new(opaque: &'a mut dyn DrawSink, compositing: &'a mut dyn DrawSink) -> Self {
        Self {
            opaque,
            compositing,
            stats: PainterStats::default(),
        }
    }

    pub fn stats(&self) -> PainterStats {
        self.stats
    }

    fn sink(&mut self, backend: Backend, what: &str) -> &mut dyn DrawSink {
        trace!("{what} -> {backend:?}");
        match backend {
            Backend::Opaque => {
                self.stats.opaque += 1;
                &mut *self.opaque
            }
            Backend::Compositing => {
                self.stats.compositing += 1;
                &mut *self.compositing
            }
        }
    }

    fn skip(&mut self, what: &str) {
        trace!("{what} skipped");
        self.stats.skipped += 1;
    }

    pub fn clear(&mut self, color: Color32) {
        let backend = choose_backend(Some(color), None);
        self.sink(backend, "clear").clear(color);
    }

    pub fn draw_text(&mut self, text: &str, position: ScreenPoint, color: Color32) {
        if text.is_empty() {
            self.skip("text");
            return;
        }
        let backend = choose_backend(Some(color), None);
        self.sink(backend, "text").text(text, position, color);
    }

    /// Rectangles with a non-positive width or height are skipped.
    pub fn draw_rectangle(&mut self, rect: ScreenRect, fill: Option<Color32>, outline: Option<&Outline>) {
        if rect.is_degenerate() || (fill.is_none() && outline.is_none()) {
            self.skip("rectangle");
            return;
        }
        let backend = choose_backend(fill, outline);
        self.sink(backend, "rectangle").rectangle(rect, fill, outline);
    }

    pub fn draw_circle(&mut self, center: ScreenPoint, radius: f32, fill: Option<Color32>, outline: Option<&Outline>) {
        if !(radius > 0.0) || (fill.is_none() && outline.is_none()) {
            self.skip("circle");
            return;
        }
        let backend = choose_backend(fill, outline);
        self.sink(backend, "circle").circle(center, radius, fill, outline);
    }

    pub fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, outline: &Outline) {
        let backend = choose_backend(None, Some(outline));
        self.sink(backend, "line").line(from, to, outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ScreenVector;

    const TRANSLUCENT: Color32 = Color32::from_rgba_premultiplied(10, 10, 10, 128);

    fn rect(w: f32, h: f32) -> ScreenRect {
        ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenVector::new(w, h))
    }

    #[test]
    fn test_backend_rule() {
        let solid = Outline::new(Color32::WHITE, 1.0);
        let see_through = Outline::new(TRANSLUCENT, 1.0);

        assert_eq!(choose_backend(Some(Color32::RED), None), Backend::Opaque);
        assert_eq!(choose_backend(Some(Color32::RED), Some(&solid)), Backend::Opaque);
        assert_eq!(choose_backend(Some(TRANSLUCENT), None), Backend::Compositing);
        assert_eq!(choose_backend(Some(Color32::RED), Some(&see_through)), Backend::Compositing);
        assert_eq!(choose_backend(None, Some(&solid)), Backend::Opaque);
        assert_eq!(choose_backend(None, Some(&see_through)), Backend::Compositing);
        assert_eq!(choose_backend(None, None), Backend::Opaque);
    }

    #[test]
    fn test_calls_land_in_the_chosen_sink() {
        let log = DrawLog::default();
        let mut opaque = log.sink(Backend::Opaque);
        let mut compositing = log.sink(Backend::Compositing);
        let mut painter = Painter::new(&mut opaque, &mut compositing);

        painter.draw_rectangle(rect(5.0, 5.0), Some(Color32::RED), None);
        painter.draw_rectangle(rect(5.0, 5.0), Some(TRANSLUCENT), None);
        painter.draw_circle(ScreenPoint::new(1.0, 1.0), 2.0, Some(Color32::BLUE), None);

        let stats = painter.stats();
        assert_eq!((stats.opaque, stats.compositing, stats.skipped), (2, 1, 0));

        let backends: Vec<_> = log.entries().into_iter().map(|(b, _)| b).collect();
        assert_eq!(backends, [Backend::Opaque, Backend::Compositing, Backend::Opaque]);
    }

    #[test]
    fn test_degenerate_primitives_are_skipped() {
        let log = DrawLog::default();
        let mut opaque = log.sink(Backend::Opaque);
        let mut compositing = log.sink(Backend::Compositing);
        let mut painter = Painter::new(&mut opaque, &mut compositing);

        painter.draw_rectangle(rect(0.0, 5.0), Some(Color32::RED), None);
        painter.draw_rectangle(rect(5.0, -1.0), Some(Color32::RED), None);
        painter.draw_rectangle(rect(5.0, 5.0), None, None);
        painter.draw_circle(ScreenPoint::new(0.0, 0.0), 0.0, Some(Color32::RED), None);
        painter.draw_text("", ScreenPoint::new(0.0, 0.0), Color32::WHITE);

        assert_eq!(painter.stats().skipped, 5);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_line_styles() {
        assert!(LineStyle::Solid.pattern().is_empty());
        for style in [LineStyle::Dot, LineStyle::LongDash, LineStyle::ShortDash, LineStyle::DotDash] {
            assert_eq!(style.pattern().len() % 2, 0, "{style:?} must alternate on/off");
        }
    }
}
