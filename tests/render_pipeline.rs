use egui::PointerButton;
use vecy::painter::{Backend, DrawCall, DrawLog, Painter};
use vecy::{Canvas, ScreenPoint, ScreenVector};

const VIEWPORT: ScreenVector = ScreenVector::new(100.0, 80.0);

fn seeded_canvas() -> Canvas {
    let mut canvas = Canvas::default();
    canvas.seed_initial_scene().unwrap();
    canvas
}

fn render(canvas: &Canvas) -> DrawLog {
    let log = DrawLog::default();
    let mut opaque = log.sink(Backend::Opaque);
    let mut compositing = log.sink(Backend::Compositing);
    let mut painter = Painter::new(&mut opaque, &mut compositing);
    canvas.render(&mut painter, VIEWPORT);
    log
}

fn count(log: &DrawLog, pred: impl Fn(&DrawCall) -> bool) -> usize {
    log.calls().iter().filter(|c| pred(c)).count()
}

#[test]
fn test_frame_order() {
    let canvas = seeded_canvas();
    let calls = render(&canvas).calls();

    assert_eq!(calls.first(), Some(&DrawCall::Clear(canvas.settings().background_color)));
    assert!(matches!(calls.last(), Some(DrawCall::Text { .. })));

    let first_rect = calls
        .iter()
        .position(|c| matches!(c, DrawCall::Rectangle { .. }))
        .unwrap();
    let last_line = calls
        .iter()
        .rposition(|c| matches!(c, DrawCall::Line { .. }))
        .unwrap();
    assert!(last_line < first_rect, "grid is drawn beneath the shapes");
}

#[test]
fn test_grid_at_identity() {
    let log = render(&seeded_canvas());
    // x: 0, 20, .., 100 and y: 0, 20, .., 80
    assert_eq!(count(&log, |c| matches!(c, DrawCall::Line { .. })), 6 + 5);
}

#[test]
fn test_hovered_shape_gets_handles() {
    let mut canvas = seeded_canvas();
    let plain = render(&canvas);
    assert_eq!(count(&plain, |c| matches!(c, DrawCall::Circle { .. })), 0);

    canvas.pointer_move(ScreenPoint::new(12.0, 12.0));
    let hovered = render(&canvas);
    assert_eq!(count(&hovered, |c| matches!(c, DrawCall::Circle { .. })), 4);
    assert_eq!(
        count(&hovered, |c| matches!(c, DrawCall::Rectangle { .. })),
        count(&plain, |c| matches!(c, DrawCall::Rectangle { .. })) + 1
    );
}

#[test]
fn test_selection_preview_composites() {
    let mut canvas = seeded_canvas();
    canvas.pointer_down(PointerButton::Primary, ScreenPoint::new(60.0, 60.0));
    canvas.pointer_move(ScreenPoint::new(30.0, 40.0));

    let log = render(&canvas);
    let composited: Vec<_> = log
        .entries()
        .into_iter()
        .filter(|(backend, _)| *backend == Backend::Compositing)
        .collect();
    assert_eq!(composited.len(), 1);

    match &composited[0].1 {
        DrawCall::Rectangle { rect, fill, outline } => {
            assert_eq!(rect.topleft, ScreenPoint::new(30.0, 40.0));
            assert_eq!(*fill, Some(canvas.settings().selection_negative));
            assert_eq!(outline.as_ref().map(|o| o.color), Some(canvas.settings().selection_border));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_zero_size_selection_is_skipped() {
    let mut canvas = seeded_canvas();
    canvas.pointer_down(PointerButton::Primary, ScreenPoint::new(60.0, 60.0));

    let log = render(&canvas);
    assert!(log.entries().iter().all(|(backend, _)| *backend == Backend::Opaque));
}

#[test]
fn test_in_flight_pan_moves_shapes() {
    let mut canvas = seeded_canvas();
    canvas.pointer_down(PointerButton::Middle, ScreenPoint::new(0.0, 0.0));
    canvas.pointer_move(ScreenPoint::new(5.0, 7.0));

    let log = render(&canvas);
    let first_rect = log.calls().into_iter().find_map(|c| match c {
        DrawCall::Rectangle { rect, .. } => Some(rect),
        _ => None,
    });
    assert_eq!(first_rect.map(|r| r.topleft), Some(ScreenPoint::new(15.0, 17.0)));
}

#[test]
fn test_render_does_not_mutate() {
    let mut canvas = seeded_canvas();
    canvas.pointer_move(ScreenPoint::new(12.0, 12.0));
    let hover = canvas.hover().clone();
    let transform = *canvas.transform();

    render(&canvas);
    render(&canvas);
    assert_eq!(canvas.hover(), &hover);
    assert_eq!(canvas.transform(), &transform);
}
