use super::vec::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in the reference frame.
#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// vector going from `self` to `rhs`
    pub fn to(&self, rhs: Point2) -> Vec2 {
        rhs - *self
    }

    pub fn distance_to(&self, rhs: Point2) -> f64 {
        (rhs - *self).norm()
    }

    /// position vector, i.e. the vector from the origin to this point
    pub fn coords(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Sub for Point2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Vec2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
