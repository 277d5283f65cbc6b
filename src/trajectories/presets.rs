//! The curves drawn in the position/displacement and velocity scenes.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{AnyTrajectory, Linear, Quadratic, Sinusoidal};
use crate::math::Point2;

/// start point shared by both paths of the velocity scene
pub const P: Point2 = Point2 { x: 1., y: 3. };
/// end point shared by both paths of the velocity scene
pub const Q: Point2 = Point2 { x: 4., y: 2. };

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// `-x/2 + 4`
    Straight,
    /// `x²/2 - 7x/2 + 8`
    Parabola,
    /// `sin(πx/4) + 2`
    Wave,
    /// `x²/3 - 2x + 14/3 + sin(3πx)/16`, from P to Q
    LowerPath,
    /// `-2x²/3 + 3x + 2/3 + sin(2πx)/10`, from P to Q
    UpperPath,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Straight,
        Preset::Parabola,
        Preset::Wave,
        Preset::LowerPath,
        Preset::UpperPath,
    ];

    pub fn trajectory(self) -> AnyTrajectory {
        match self {
            Preset::Straight => Linear {
                slope: -0.5,
                intercept: 4.,
            }
            .into(),
            Preset::Parabola => Quadratic {
                a: 0.5,
                b: -3.5,
                c: 8.,
            }
            .into(),
            Preset::Wave => Sinusoidal {
                amplitude: 1.,
                angular_frequency: PI / 4.,
                phase: 0.,
                offset: 2.,
            }
            .into(),
            Preset::LowerPath => AnyTrajectory::sum([
                AnyTrajectory::from(Quadratic {
                    a: 1. / 3.,
                    b: -2.,
                    c: 14. / 3.,
                }),
                Sinusoidal {
                    amplitude: 1. / 16.,
                    angular_frequency: 3. * PI,
                    phase: 0.,
                    offset: 0.,
                }
                .into(),
            ]),
            Preset::UpperPath => AnyTrajectory::sum([
                AnyTrajectory::from(Quadratic {
                    a: -2. / 3.,
                    b: 3.,
                    c: 2. / 3.,
                }),
                Sinusoidal {
                    amplitude: 0.1,
                    angular_frequency: 2. * PI,
                    phase: 0.,
                    offset: 0.,
                }
                .into(),
            ]),
        }
    }
}
