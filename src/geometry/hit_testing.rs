use std::collections::HashSet;

use super::{ScreenPoint, WorldRect};
use crate::id_generator::ShapeId;
use crate::shape::Shape;
use crate::transform::CanvasTransform;

/// Hit-test in screen space: project `rect`, grow it by `tolerance` pixels and
/// test inclusive containment, so the tolerance does not shrink as the view
/// zooms out.
pub fn is_rect_hit(transform: &CanvasTransform, rect: &WorldRect, point: ScreenPoint, tolerance: f32) -> bool {
    transform.to_screen_rect(rect).extend(tolerance).contains(point)
}

/// Ids of every shape under `point`. Linear in the number of shapes.
pub fn collect_hits<'a, S>(
    shapes: impl IntoIterator<Item = &'a S>,
    transform: &CanvasTransform,
    point: ScreenPoint,
    tolerance: f32,
) -> HashSet<ShapeId>
where
    S: Shape + 'a,
{
    shapes
        .into_iter()
        .filter(|shape| shape.is_hit(transform, point, tolerance))
        .map(|shape| shape.id())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ScreenVector, WorldPoint, WorldVector};

    fn rect() -> WorldRect {
        WorldRect::new(WorldPoint::new(10.0, 10.0), WorldVector::new(10.0, 10.0))
    }

    #[test]
    fn test_tolerance_reaches_outside_point() {
        let t = CanvasTransform::default();
        let p = ScreenPoint::new(5.0, 5.0);
        assert!(!is_rect_hit(&t, &rect(), p, 0.0));
        assert!(is_rect_hit(&t, &rect(), p, 6.0));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let t = CanvasTransform::default();
        assert!(is_rect_hit(&t, &rect(), ScreenPoint::new(20.0, 20.0), 0.0));
        assert!(!is_rect_hit(&t, &rect(), ScreenPoint::new(21.0, 20.0), 0.0));

        assert!(is_rect_hit(&t, &rect(), ScreenPoint::new(23.0, 15.0), 3.0));
        assert!(!is_rect_hit(&t, &rect(), ScreenPoint::new(24.0, 15.0), 3.0));
    }

    #[test]
    fn test_hit_follows_the_view() {
        let t = CanvasTransform::default()
            .with_scale(2.0)
            .with_scroll(ScreenVector::new(100.0, 0.0));
        // world (10..20) -> screen (120..140) horizontally, (20..40) vertically
        assert!(is_rect_hit(&t, &rect(), ScreenPoint::new(130.0, 30.0), 0.0));
        assert!(!is_rect_hit(&t, &rect(), ScreenPoint::new(15.0, 15.0), 0.0));
    }
}
