use super::point::Point2;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, e.g. the visible range of the reference frame's axes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    top_left: Point2,
    bottom_right: Point2,
}

impl Rect {
    pub fn new(p1: Point2, p2: Point2) -> Self {
        let min_x = p1.x.min(p2.x);
        let max_x = p1.x.max(p2.x);
        let min_y = p1.y.min(p2.y);
        let max_y = p1.y.max(p2.y);

        Self {
            top_left: Point2::new(min_x, max_y),
            bottom_right: Point2::new(max_x, min_y),
        }
    }

    /// the `[0, 5] x [0, 5]` axes every scene is drawn on
    pub fn default_axes() -> Self {
        Self::new(Point2::origin(), Point2::new(5., 5.))
    }

    pub fn contains(&self, p: Point2) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&p.x)
            && (self.bottom_right.y..=self.top_left.y).contains(&p.y)
    }

    /// Uniformly random point inside the rectangle.
    ///
    /// Panics if the rectangle is degenerate (zero width or height).
    pub fn sample_inside<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2 {
        Point2::new(
            Uniform::new(self.top_left.x, self.bottom_right.x).sample(rng),
            Uniform::new(self.bottom_right.y, self.top_left.y).sample(rng),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn corners_are_reordered() {
        let r = Rect::new(Point2::new(5., 0.), Point2::new(0., 5.));
        assert_eq!(r, Rect::default_axes());
    }

    #[test]
    fn samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let r = Rect::new(Point2::new(-1., 2.), Point2::new(3., -4.));
        for _ in 0..200 {
            assert!(r.contains(r.sample_inside(&mut rng)));
        }
        assert!(!r.contains(Point2::new(3.5, 0.)));
    }
}
