// src/renderer.rs
use crate::canvas::Canvas;
use crate::geometry::{ScreenPoint, ScreenVector};
use crate::input::{SelectionBox, SelectionDirection};
use crate::painter::{LineStyle, Outline, Painter, PainterStats};
use crate::settings::Settings;
use crate::shape::Shape;
use crate::transform::CanvasTransform;

/// Grid lines closer together than this (in pixels) are thinned out by
/// doubling the spacing.
pub const MIN_GRID_PIXELS: f32 = 8.0;

const STATUS_MARGIN: f32 = 8.0;

/// Renders one frame of `canvas`
///
/// Args:
///     canvas (Canvas): The state to project; never mutated
///     painter (Painter): Receives the ordered draw calls
///     viewport (ScreenVector): Size of the drawable region
///
/// Returns:
///     PainterStats: How many calls went to each backend
pub fn render(canvas: &Canvas, painter: &mut Painter<'_>, viewport: ScreenVector) -> PainterStats {
    let settings = canvas.settings();
    let transform = canvas.view_transform();

    painter.clear(settings.background_color);
    draw_grid(painter, &transform, settings, canvas.view_config().grid_spacing, viewport);

    for shape in canvas.document().shapes() {
        shape.paint(painter, &transform, settings, canvas.is_hovered(shape.id()));
    }

    if let Some(selection) = canvas.gesture().selection_box() {
        draw_selection(painter, &selection, settings);
    }

    painter.draw_text(
        &canvas.status_text(),
        ScreenPoint::new(STATUS_MARGIN, STATUS_MARGIN),
        settings.handle_color,
    );

    painter.stats()
}

/// Screen-space spacing of the grid at the transform's scale, or `None` when
/// there is no grid to draw.
pub fn grid_step(transform: &CanvasTransform, grid_spacing: f32) -> Option<f32> {
    let mut step = grid_spacing * transform.scale();
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    while step < MIN_GRID_PIXELS {
        step *= 2.0;
    }
    Some(step)
}

/// Positions of grid lines along one axis, starting at `scroll mod step`.
pub fn grid_lines(scroll: f32, step: f32, extent: f32) -> impl Iterator<Item = f32> {
    let offset = scroll.rem_euclid(step);
    (0..)
        .map(move |i| offset + i as f32 * step)
        .take_while(move |&pos| pos <= extent)
}

fn draw_grid(
    painter: &mut Painter<'_>,
    transform: &CanvasTransform,
    settings: &Settings,
    grid_spacing: f32,
    viewport: ScreenVector,
) {
    let Some(step) = grid_step(transform, grid_spacing) else {
        return;
    };
    let outline = Outline::new(settings.grid_color, 1.0);
    let scroll = transform.scroll();

    for x in grid_lines(scroll.x, step, viewport.x) {
        painter.draw_line(ScreenPoint::new(x, 0.0), ScreenPoint::new(x, viewport.y), &outline);
    }
    for y in grid_lines(scroll.y, step, viewport.y) {
        painter.draw_line(ScreenPoint::new(0.0, y), ScreenPoint::new(viewport.x, y), &outline);
    }
}

fn draw_selection(painter: &mut Painter<'_>, selection: &SelectionBox, settings: &Settings) {
    let fill = match selection.direction {
        SelectionDirection::Rightward => settings.selection_positive,
        SelectionDirection::Leftward => settings.selection_negative,
    };
    let border = Outline::new(settings.selection_border, 1.0).with_style(LineStyle::ShortDash);
    painter.draw_rectangle(selection.rect, Some(fill), Some(&border));
}
