use crate::geometry::ScreenPoint;

pub type Segment = (ScreenPoint, ScreenPoint);

/// Splits a polyline into the "on" pieces of a dash pattern.
///
/// `pattern` alternates on/off lengths and is scaled by `unit` (the stroke
/// width, at least one pixel). The pattern phase carries across vertices so
/// corners do not restart the dash. An empty pattern yields the polyline's
/// own segments.
pub fn dash_polyline(points: &[ScreenPoint], pattern: &[f32], unit: f32) -> Vec<Segment> {
    let edges = points.windows(2).map(|w| (w[0], w[1]));

    let unit = if unit.is_finite() { unit.max(1.0) } else { 1.0 };
    let lengths: Vec<f32> = pattern.iter().map(|p| p * unit).collect();
    if lengths.is_empty() || lengths.iter().any(|l| !(*l > 0.0)) {
        return edges.collect();
    }

    let mut out = Vec::new();
    let mut index = 0;
    let mut remaining = lengths[0];

    for (a, b) in edges {
        let edge = b - a;
        let total = edge.length();
        if !total.is_finite() || total == 0.0 {
            continue;
        }
        let dir = edge / total;

        let mut t = 0.0;
        while t < total {
            let step = remaining.min(total - t);
            if index % 2 == 0 {
                out.push((a + dir * t, a + dir * (t + step)));
            }
            t += step;
            remaining -= step;
            if remaining <= 0.0 {
                index = (index + 1) % lengths.len();
                remaining = lengths[index];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    #[test]
    fn test_solid_returns_edges() {
        let segments = dash_polyline(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)], &[], 1.0);
        assert_eq!(segments, [(p(0.0, 0.0), p(10.0, 0.0)), (p(10.0, 0.0), p(10.0, 10.0))]);
    }

    #[test]
    fn test_dashes_along_a_line() {
        let segments = dash_polyline(&[p(0.0, 0.0), p(20.0, 0.0)], &[4.0, 4.0], 1.0);
        assert_eq!(
            segments,
            [
                (p(0.0, 0.0), p(4.0, 0.0)),
                (p(8.0, 0.0), p(12.0, 0.0)),
                (p(16.0, 0.0), p(20.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_phase_carries_over_corners() {
        let segments = dash_polyline(&[p(0.0, 0.0), p(6.0, 0.0), p(6.0, 6.0)], &[4.0, 4.0], 1.0);
        assert_eq!(
            segments,
            [(p(0.0, 0.0), p(4.0, 0.0)), (p(6.0, 2.0), p(6.0, 6.0))]
        );
    }

    #[test]
    fn test_pattern_scales_with_width() {
        let segments = dash_polyline(&[p(0.0, 0.0), p(16.0, 0.0)], &[4.0, 4.0], 2.0);
        assert_eq!(segments, [(p(0.0, 0.0), p(8.0, 0.0))]);
    }

    #[test]
    fn test_zero_length_edges_are_ignored() {
        let segments = dash_polyline(&[p(3.0, 3.0), p(3.0, 3.0)], &[1.0, 1.0], 1.0);
        assert!(segments.is_empty());
    }
}
