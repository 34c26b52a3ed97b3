//! Unit-tagged geometry primitives.
//!
//! Points, vectors and rectangles carry a zero-sized marker naming the space
//! they live in, so a world coordinate cannot be handed to something that
//! expects a screen coordinate without going through [`crate::CanvasTransform`].

use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

pub mod hit_testing;
mod rect;

pub use rect::Rect;

/// Coordinate space in which shapes are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct World;

/// Pixel coordinates of the drawable region, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Screen;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<U> {
    pub x: f32,
    pub y: f32,
    unit: PhantomData<U>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector<U> {
    pub x: f32,
    pub y: f32,
    unit: PhantomData<U>,
}

pub type WorldPoint = Point<World>;
pub type ScreenPoint = Point<Screen>;
pub type WorldVector = Vector<World>;
pub type ScreenVector = Vector<Screen>;
pub type WorldRect = Rect<World>;
pub type ScreenRect = Rect<Screen>;

impl<U> Point<U> {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            unit: PhantomData,
        }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn to_vector(self) -> Vector<U> {
        Vector::new(self.x, self.y)
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl<U> Vector<U> {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            unit: PhantomData,
        }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    pub fn to_point(self) -> Point<U> {
        Point::new(self.x, self.y)
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }
}

impl ScreenPoint {
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }
}

impl ScreenVector {
    pub fn from_vec2(v: egui::Vec2) -> Self {
        Self::new(v.x, v.y)
    }

    pub fn to_vec2(self) -> egui::Vec2 {
        egui::vec2(self.x, self.y)
    }
}

impl<U> Sub for Point<U> {
    type Output = Vector<U>;

    fn sub(self, rhs: Self) -> Vector<U> {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<U> Add<Vector<U>> for Point<U> {
    type Output = Self;

    fn add(self, rhs: Vector<U>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<U> Sub<Vector<U>> for Point<U> {
    type Output = Self;

    fn sub(self, rhs: Vector<U>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<U> AddAssign<Vector<U>> for Point<U> {
    fn add_assign(&mut self, rhs: Vector<U>) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<U> Add for Vector<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<U> Sub for Vector<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<U> AddAssign for Vector<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<U> SubAssign for Vector<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<U> Mul<f32> for Vector<U> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<U> Div<f32> for Vector<U> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<U> Neg for Vector<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
