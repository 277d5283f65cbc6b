//! Analytic trajectories `y = f(x)`.
//!
//! A trajectory is parameterized by the abscissa: evaluating it at `x` gives the
//! position `(x, f(x))`. Each kind also knows its derivative so the direction
//! of motion is available without finite differences.

pub mod length;
pub mod presets;
pub mod sampler;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::math::{Point2, Vec2};

pub use length::{arc_length, chord_length};
pub use presets::Preset;
pub use sampler::{sample_range, Easing, Sweep};

pub trait Trajectory {
    /// `f(x)`
    fn get_value(&self, x: f64) -> f64;

    /// `f'(x)`
    fn get_slope(&self, x: f64) -> f64;

    fn get_position(&self, x: f64) -> Point2 {
        Point2::new(x, self.get_value(x))
    }

    /// direction of motion when moving towards increasing `x`, not normalized
    fn get_tangent(&self, x: f64) -> Vec2 {
        Vec2::new(1., self.get_slope(x))
    }
}

impl<T: Trajectory + ?Sized> Trajectory for &T {
    fn get_value(&self, x: f64) -> f64 {
        (**self).get_value(x)
    }

    fn get_slope(&self, x: f64) -> f64 {
        (**self).get_slope(x)
    }
}

/// Degree 1: `slope * x + intercept`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub slope: f64,
    pub intercept: f64,
}

impl Trajectory for Linear {
    fn get_value(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }

    fn get_slope(&self, _x: f64) -> f64 {
        self.slope
    }
}

/// Degree 2: `a * x² + b * x + c`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Trajectory for Quadratic {
    fn get_value(&self, x: f64) -> f64 {
        // Horner
        self.a.mul_add(x, self.b).mul_add(x, self.c)
    }

    fn get_slope(&self, x: f64) -> f64 {
        (2. * self.a).mul_add(x, self.b)
    }
}

/// `amplitude * sin(angular_frequency * x + phase) + offset`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Sinusoidal {
    pub amplitude: f64,
    pub angular_frequency: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub offset: f64,
}

impl Sinusoidal {
    /// wave of the given period, in the same unit as `x`
    pub fn with_period(amplitude: f64, period: f64, offset: f64) -> Self {
        Self {
            amplitude,
            angular_frequency: 2. * PI / period,
            phase: 0.,
            offset,
        }
    }
}

impl Trajectory for Sinusoidal {
    fn get_value(&self, x: f64) -> f64 {
        self.amplitude
            .mul_add(self.angular_frequency.mul_add(x, self.phase).sin(), self.offset)
    }

    fn get_slope(&self, x: f64) -> f64 {
        self.amplitude
            * self.angular_frequency
            * self.angular_frequency.mul_add(x, self.phase).cos()
    }
}

/// Any trajectory kind, as found in a trajectory document.
///
/// ```
/// use cinematica::trajectories::{AnyTrajectory, Trajectory};
///
/// let t: AnyTrajectory = serde_json::from_str(
///     r#"{"kind": "sum", "terms": [
///         {"kind": "linear", "slope": 2.0, "intercept": 1.0},
///         {"kind": "quadratic", "a": 1.0, "b": 0.0, "c": 0.0}
///     ]}"#,
/// ).unwrap();
/// assert_eq!(t.get_value(3.), 16.);
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyTrajectory {
    Linear(Linear),
    Quadratic(Quadratic),
    Sinusoidal(Sinusoidal),
    /// pointwise sum of its terms, zero when empty
    Sum { terms: Vec<AnyTrajectory> },
}

impl AnyTrajectory {
    pub fn sum(terms: impl IntoIterator<Item = impl Into<AnyTrajectory>>) -> Self {
        Self::Sum {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

impl Trajectory for AnyTrajectory {
    fn get_value(&self, x: f64) -> f64 {
        match self {
            AnyTrajectory::Linear(t) => t.get_value(x),
            AnyTrajectory::Quadratic(t) => t.get_value(x),
            AnyTrajectory::Sinusoidal(t) => t.get_value(x),
            AnyTrajectory::Sum { terms } => terms.iter().map(|t| t.get_value(x)).sum(),
        }
    }

    fn get_slope(&self, x: f64) -> f64 {
        match self {
            AnyTrajectory::Linear(t) => t.get_slope(x),
            AnyTrajectory::Quadratic(t) => t.get_slope(x),
            AnyTrajectory::Sinusoidal(t) => t.get_slope(x),
            AnyTrajectory::Sum { terms } => terms.iter().map(|t| t.get_slope(x)).sum(),
        }
    }
}

impl From<Linear> for AnyTrajectory {
    fn from(t: Linear) -> Self {
        AnyTrajectory::Linear(t)
    }
}

impl From<Quadratic> for AnyTrajectory {
    fn from(t: Quadratic) -> Self {
        AnyTrajectory::Quadratic(t)
    }
}

impl From<Sinusoidal> for AnyTrajectory {
    fn from(t: Sinusoidal) -> Self {
        AnyTrajectory::Sinusoidal(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn linear_values() {
        let t = Linear {
            slope: -0.5,
            intercept: 4.,
        };
        assert_eq!(t.get_position(0.), Point2::new(0., 4.));
        assert_eq!(t.get_position(4.), Point2::new(4., 2.));
        assert_eq!(t.get_tangent(17.), Vec2::new(1., -0.5));
    }

    #[test]
    fn quadratic_values() {
        let t = Quadratic {
            a: 0.5,
            b: -3.5,
            c: 8.,
        };
        assert_close(t.get_value(0.), 8.);
        assert_close(t.get_value(2.), 3.);
        assert_close(t.get_value(3.5), 1.875);
        // vertex
        assert_close(t.get_slope(3.5), 0.);
    }

    #[test]
    fn sinusoidal_values() {
        let t = Sinusoidal::with_period(1., 8., 2.);
        assert_close(t.angular_frequency, PI / 4.);
        assert_close(t.get_value(0.), 2.);
        assert_close(t.get_value(2.), 3.);
        assert_close(t.get_value(6.), 1.);
        assert_close(t.get_slope(0.), PI / 4.);
        assert_close(t.get_slope(2.), 0.);
    }

    #[test]
    fn slopes_match_finite_differences() {
        let t = AnyTrajectory::sum([
            AnyTrajectory::from(Quadratic {
                a: -2. / 3.,
                b: 3.,
                c: 2. / 3.,
            }),
            AnyTrajectory::from(Sinusoidal::with_period(0.1, 1., 0.)),
        ]);
        let h = 1e-6;
        for i in 0..=30 {
            let x = 1. + f64::from(i) * 0.1;
            let numeric = (t.get_value(x + h) - t.get_value(x - h)) / (2. * h);
            assert!((numeric - t.get_slope(x)).abs() < 1e-5, "at x = {x}");
        }
    }

    #[test]
    fn empty_sum_is_zero() {
        let t = AnyTrajectory::Sum { terms: vec![] };
        assert_eq!(t.get_value(3.), 0.);
        assert_eq!(t.get_slope(3.), 0.);
    }

    #[test]
    fn document_round_trip() {
        let t = AnyTrajectory::from(Sinusoidal::with_period(1., 8., 2.));
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains(r#""kind":"sinusoidal""#));
        let back: AnyTrajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn phase_and_offset_default_to_zero() {
        let t: AnyTrajectory =
            serde_json::from_str(r#"{"kind":"sinusoidal","amplitude":2.0,"angular_frequency":1.0}"#)
                .unwrap();
        assert_eq!(
            t,
            AnyTrajectory::Sinusoidal(Sinusoidal {
                amplitude: 2.,
                angular_frequency: 1.,
                phase: 0.,
                offset: 0.,
            })
        );
    }
}
