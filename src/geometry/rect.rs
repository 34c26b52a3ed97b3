use super::{Point, Vector};

/// Axis-aligned rectangle stored as `topleft` + `size`.
///
/// `size` may go negative while a rectangle is being dragged out from an
/// anchor. Queries normalize first, so a negative rectangle behaves like the
/// same area spanned the other way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<U> {
    pub topleft: Point<U>,
    pub size: Vector<U>,
}

impl<U: Copy> Rect<U> {
    pub fn new(topleft: Point<U>, size: Vector<U>) -> Self {
        Self { topleft, size }
    }

    /// A zero-sized rectangle sitting on `point`.
    pub fn at(point: Point<U>) -> Self {
        Self::new(point, Vector::ZERO)
    }

    /// The rectangle spanned by two opposite corners, in either order.
    pub fn from_corners(a: Point<U>, b: Point<U>) -> Self {
        let topleft = a.min(b);
        Self::new(topleft, a.max(b) - topleft)
    }

    pub fn left(&self) -> f32 {
        self.topleft.x
    }

    pub fn top(&self) -> f32 {
        self.topleft.y
    }

    pub fn right(&self) -> f32 {
        self.topleft.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.topleft.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn bottom_right(&self) -> Point<U> {
        self.topleft + self.size
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point<U>; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    /// Non-positive width or height.
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Same area with a non-negative size.
    pub fn normalized(&self) -> Self {
        Self::from_corners(self.topleft, self.bottom_right())
    }

    /// Grows the rectangle by `margin` on every side.
    pub fn extend(&self, margin: f32) -> Self {
        let r = self.normalized();
        Self::new(
            r.topleft - Vector::splat(margin),
            r.size + Vector::splat(2.0 * margin),
        )
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point<U>) -> bool {
        let r = self.normalized();
        point.x >= r.left() && point.x <= r.right() && point.y >= r.top() && point.y <= r.bottom()
    }

    /// Smallest rectangle covering both `self` and `point`.
    pub fn include(&self, point: Point<U>) -> Self {
        let r = self.normalized();
        Self::from_corners(r.topleft.min(point), r.bottom_right().max(point))
    }
}
