//! Displacement and velocity helpers.
//!
//! Everything here works on two position samples (and an elapsed time or a
//! magnitude). The two degenerate cases are reported as [`KinematicsError`]
//! instead of leaking NaN or infinite values to the caller.

use thiserror::Error;
use tracing::trace;

use crate::{
    math::{Line, Point2, Vec2},
    trajectories::Trajectory,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KinematicsError {
    /// elapsed time of zero between the two samples
    #[error("cannot divide by a zero elapsed time")]
    DivisionByZero,
    /// start and end coincide, the displacement has no direction
    #[error("start and end positions coincide, the displacement has no direction")]
    UndefinedDirection,
}

/// something which can give its position when asked to
pub trait Pos2 {
    fn pos(&self) -> Point2;

    fn to<P2: Pos2>(&self, other: &P2) -> Vec2 {
        other.pos() - self.pos()
    }

    fn distance_to<P2: Pos2>(&self, other: &P2) -> f64 {
        self.to(other).norm()
    }
}

impl Pos2 for Point2 {
    fn pos(&self) -> Point2 {
        *self
    }
}

impl<F: Fn() -> Point2> Pos2 for F {
    fn pos(&self) -> Point2 {
        self()
    }
}

/// `end - start`, component-wise.
pub fn displacement(start: impl Pos2, end: impl Pos2) -> Vec2 {
    start.to(&end)
}

/// Norm of the average velocity between the two samples, always non-negative.
pub fn speed_estimate(
    start: impl Pos2,
    end: impl Pos2,
    elapsed_time: f64,
) -> Result<f64, KinematicsError> {
    Ok(average_velocity(start, end, elapsed_time)?.norm())
}

/// Vector of length `magnitude` pointing from `start` towards `end`.
///
/// A negative `magnitude` points the other way.
pub fn velocity_vector(
    start: impl Pos2,
    end: impl Pos2,
    magnitude: f64,
) -> Result<Vec2, KinematicsError> {
    let direction = displacement(start, end)
        .try_normalized()
        .ok_or(KinematicsError::UndefinedDirection)?;
    Ok(direction * magnitude)
}

/// Start and end points of `vector` once placed at `origin`.
pub fn translate(origin: impl Pos2, vector: Vec2) -> (Point2, Point2) {
    Line::from_origin(origin.pos(), vector).into()
}

/// `displacement / elapsed_time`
///
/// A zero, NaN or tiny elapsed time giving a non-finite velocity fails with
/// [`KinematicsError::DivisionByZero`].
pub fn average_velocity(
    start: impl Pos2,
    end: impl Pos2,
    elapsed_time: f64,
) -> Result<Vec2, KinematicsError> {
    if elapsed_time == 0.0 {
        return Err(KinematicsError::DivisionByZero);
    }
    let velocity = displacement(start, end) / elapsed_time;
    if !(velocity.x.is_finite() && velocity.y.is_finite()) {
        return Err(KinematicsError::DivisionByZero);
    }
    Ok(velocity)
}

/// Average speed over a travelled distance: `Δs / Δt`.
pub fn average_speed(path_length: f64, elapsed_time: f64) -> Result<f64, KinematicsError> {
    if elapsed_time == 0.0 {
        return Err(KinematicsError::DivisionByZero);
    }
    let speed = (path_length / elapsed_time).abs();
    if !speed.is_finite() {
        return Err(KinematicsError::DivisionByZero);
    }
    Ok(speed)
}

/// Instantaneous velocity approximated by the forward difference between the
/// positions at `x` and `x + ds`, scaled to `magnitude`.
pub fn tangent_velocity(
    trajectory: &impl Trajectory,
    x: f64,
    ds: f64,
    magnitude: f64,
) -> Result<Vec2, KinematicsError> {
    let here = trajectory.get_position(x);
    let ahead = trajectory.get_position(x + ds);
    trace!(x, ds, ?here, ?ahead, "tangent velocity");
    velocity_vector(here, ahead, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectories::{Linear, Quadratic};
    use rstest::rstest;

    #[test]
    fn displacement_example() {
        assert_eq!(
            displacement(Point2::new(2., 3.), Point2::new(4., 2.)),
            Vec2::new(2., -1.)
        );
    }

    #[test]
    fn speed_estimate_example() {
        let speed = speed_estimate(Point2::new(1., 3.), Point2::new(4., 2.), 2.).unwrap();
        assert!((speed - 10f64.sqrt() / 2.).abs() < 1e-12);
    }

    #[rstest]
    #[case(2.)]
    #[case(-2.)]
    #[case(0.25)]
    fn speed_estimate_is_non_negative(#[case] elapsed: f64) {
        let speed = speed_estimate(Point2::new(4., 2.), Point2::new(1., 3.), elapsed).unwrap();
        assert!(speed >= 0.);
    }

    #[test]
    fn zero_elapsed_time_is_rejected() {
        let p = Point2::new(1., 3.);
        let q = Point2::new(4., 2.);
        assert_eq!(speed_estimate(p, q, 0.), Err(KinematicsError::DivisionByZero));
        assert_eq!(average_velocity(p, q, -0.), Err(KinematicsError::DivisionByZero));
        assert_eq!(average_speed(3., 0.), Err(KinematicsError::DivisionByZero));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(1e-310)]
    #[case(-1e-310)]
    fn non_finite_quotients_are_rejected(#[case] elapsed: f64) {
        let p = Point2::new(1., 3.);
        let q = Point2::new(4., 2.);
        assert_eq!(average_velocity(p, q, elapsed), Err(KinematicsError::DivisionByZero));
        assert_eq!(speed_estimate(p, q, elapsed), Err(KinematicsError::DivisionByZero));
        assert_eq!(average_speed(3., elapsed), Err(KinematicsError::DivisionByZero));
    }

    #[test]
    fn coincident_points_have_no_direction() {
        assert_eq!(
            velocity_vector(Point2::new(2., 3.), Point2::new(2., 3.), 5.),
            Err(KinematicsError::UndefinedDirection)
        );
    }

    #[rstest]
    #[case(0.)]
    #[case(1.)]
    #[case(5.)]
    #[case(0.001)]
    fn velocity_vector_has_requested_magnitude(#[case] magnitude: f64) {
        let v = velocity_vector(Point2::new(1., 3.), Point2::new(4., 2.), magnitude).unwrap();
        assert!((v.norm() - magnitude).abs() < 1e-12);
    }

    #[test]
    fn velocity_vector_points_along_displacement() {
        let v = velocity_vector(Point2::new(0., 0.), Point2::new(0., -3.), 2.).unwrap();
        assert!((v.x).abs() < 1e-12);
        assert!((v.y + 2.).abs() < 1e-12);
    }

    #[test]
    fn translate_places_vector_at_origin() {
        let origin = Point2::new(1., 3.);
        let (start, end) = translate(origin, Vec2::new(0.5, -0.25));
        assert_eq!(start, origin);
        assert_eq!(end - start, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn closures_are_positions() {
        let moving = || Point2::new(4., 2.);
        assert_eq!(displacement(Point2::new(2., 3.), moving), Vec2::new(2., -1.));
        assert_eq!(Pos2::distance_to(&Point2::new(1., 1.), &Point2::new(1., 4.)), 3.);
    }

    #[test]
    fn tangent_of_a_line_follows_its_slope() {
        let line = Linear {
            slope: -0.5,
            intercept: 4.,
        };
        let v = tangent_velocity(&line, 1., 0.1, 1.).unwrap();
        assert!((v.y / v.x + 0.5).abs() < 1e-9);
        assert!((v.norm() - 1.).abs() < 1e-12);
    }

    #[test]
    fn tangent_with_zero_step_has_no_direction() {
        let parabola = Quadratic {
            a: 0.5,
            b: -3.5,
            c: 8.,
        };
        assert_eq!(
            tangent_velocity(&parabola, 2., 0., 1.),
            Err(KinematicsError::UndefinedDirection)
        );
    }
}
