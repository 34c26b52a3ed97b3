use egui::{Key, PointerButton};
use vecy::input::{GestureMode, InputEvent, InputLocation};
use vecy::{Canvas, ScreenPoint, ScreenVector};

fn seeded_canvas() -> Canvas {
    let mut canvas = Canvas::default();
    canvas.seed_initial_scene().unwrap();
    canvas
}

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: ScreenPoint::new(x, y),
        is_in_canvas: true,
    }
}

fn feed(canvas: &mut Canvas, events: &[InputEvent]) -> Vec<bool> {
    events.iter().map(|e| canvas.handle_event(e)).collect()
}

#[test]
fn test_select_gesture_returns_to_idle() {
    let mut canvas = seeded_canvas();
    let repaints = feed(
        &mut canvas,
        &[
            InputEvent::PointerDown {
                location: at(5.0, 5.0),
                button: PointerButton::Primary,
            },
            InputEvent::PointerMove { location: at(40.0, 50.0) },
            InputEvent::PointerUp {
                location: at(40.0, 50.0),
                button: PointerButton::Primary,
            },
        ],
    );
    assert_eq!(repaints, [true, true, true]);
    assert_eq!(canvas.gesture().mode(), GestureMode::None);
    assert!(canvas.gesture().selection_box().is_none());
}

#[test]
fn test_mismatched_release_keeps_gesture() {
    let mut canvas = seeded_canvas();
    canvas.handle_event(&InputEvent::PointerDown {
        location: at(5.0, 5.0),
        button: PointerButton::Primary,
    });
    canvas.handle_event(&InputEvent::PointerMove { location: at(25.0, 25.0) });

    let repaint = canvas.handle_event(&InputEvent::PointerUp {
        location: at(25.0, 25.0),
        button: PointerButton::Middle,
    });
    assert!(!repaint);
    assert_eq!(canvas.gesture().mode(), GestureMode::Selecting);
    assert_eq!(canvas.gesture().latest(), ScreenPoint::new(25.0, 25.0));
}

#[test]
fn test_pan_then_hover_uses_committed_scroll() {
    let mut canvas = seeded_canvas();
    feed(
        &mut canvas,
        &[
            InputEvent::PointerDown {
                location: at(0.0, 0.0),
                button: PointerButton::Middle,
            },
            InputEvent::PointerMove { location: at(100.0, 0.0) },
            InputEvent::PointerUp {
                location: at(100.0, 0.0),
                button: PointerButton::Middle,
            },
        ],
    );
    assert_eq!(canvas.transform().scroll(), ScreenVector::new(100.0, 0.0));

    // the red square now sits at screen x 110..120
    canvas.handle_event(&InputEvent::PointerMove { location: at(15.0, 15.0) });
    assert!(canvas.hover().is_empty());
    canvas.handle_event(&InputEvent::PointerMove { location: at(112.0, 15.0) });
    assert_eq!(canvas.hover().len(), 1);
}

#[test]
fn test_leave_clears_hover() {
    let mut canvas = seeded_canvas();
    canvas.handle_event(&InputEvent::PointerMove { location: at(12.0, 12.0) });
    assert_eq!(canvas.hover().len(), 1);

    assert!(canvas.handle_event(&InputEvent::PointerLeave));
    assert!(canvas.hover().is_empty());
    assert!(!canvas.handle_event(&InputEvent::PointerLeave));
}

#[test]
fn test_wheel_keeps_world_point_under_cursor() {
    let mut canvas = seeded_canvas();
    let cursor = ScreenPoint::new(120.0, 80.0);
    let before = canvas.transform().to_world(cursor);

    for _ in 0..5 {
        canvas.handle_event(&InputEvent::Wheel {
            location: at(cursor.x, cursor.y),
            rotation: 50.0,
            step: 1.0,
        });
    }
    let after = canvas.transform().to_world(cursor);
    assert!(canvas.transform().scale() > 1.0);
    assert!((before.x - after.x).abs() < 1e-3);
    assert!((before.y - after.y).abs() < 1e-3);
}

#[test]
fn test_escape_during_selection() {
    let mut canvas = seeded_canvas();
    canvas.handle_event(&InputEvent::PointerDown {
        location: at(5.0, 5.0),
        button: PointerButton::Primary,
    });
    assert!(canvas.handle_event(&InputEvent::KeyDown { key: Key::Escape }));
    assert_eq!(canvas.gesture().mode(), GestureMode::None);

    // the release that follows belongs to no gesture
    assert!(!canvas.handle_event(&InputEvent::PointerUp {
        location: at(5.0, 5.0),
        button: PointerButton::Primary,
    }));
}

#[test]
fn test_wheel_during_pan_pins_displayed_point() {
    let mut canvas = seeded_canvas();
    feed(
        &mut canvas,
        &[
            InputEvent::PointerDown {
                location: at(0.0, 0.0),
                button: PointerButton::Middle,
            },
            InputEvent::PointerMove { location: at(100.0, 0.0) },
        ],
    );

    let cursor = ScreenPoint::new(100.0, 0.0);
    let before = canvas.view_transform().to_world(cursor);
    assert!(canvas.handle_event(&InputEvent::Wheel {
        location: at(cursor.x, cursor.y),
        rotation: 500.0,
        step: 1.0,
    }));
    let after = canvas.view_transform().to_world(cursor);

    assert!((canvas.transform().scale() - 1.5).abs() < 1e-5);
    assert!((before.x - after.x).abs() < 1e-3 && (before.y - after.y).abs() < 1e-3);

    // the point stays pinned once the pan is committed as well
    canvas.handle_event(&InputEvent::PointerUp {
        location: at(100.0, 0.0),
        button: PointerButton::Middle,
    });
    let committed = canvas.transform().to_world(cursor);
    assert!((before.x - committed.x).abs() < 1e-3 && (before.y - committed.y).abs() < 1e-3);
}
