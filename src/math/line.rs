use super::{Point2, Vec2};
use serde::{Deserialize, Serialize};

/// A segment, or equivalently a vector placed at a given start point.
#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Places `vector` so that it starts at `origin`.
    pub fn from_origin(origin: Point2, vector: Vec2) -> Self {
        Self {
            start: origin,
            end: origin + vector,
        }
    }

    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.vector().norm()
    }
}

impl From<Line> for (Point2, Point2) {
    fn from(line: Line) -> Self {
        (line.start, line.end)
    }
}
