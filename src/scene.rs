//! Scene description.
//!
//! Describes what a renderer should draw on each frame of an animation: dots
//! moving along trajectories, position vectors, chords and velocity arrows.
//! Nothing is rendered here, frames are plain serializable data.
//!
//! # Examples
//!
//! A dot sweeping along the parabola with its position vector:
//! ```
//! use cinematica::{
//!     math::Point2,
//!     scene::{position_vector_frames, Color, SceneObject},
//!     trajectories::{Preset, Sweep},
//! };
//!
//! let frames = position_vector_frames(
//!     &Preset::Parabola.trajectory(),
//!     Point2::origin(),
//!     Sweep::new(0., 5., 5.),
//!     30,
//!     Color::Green,
//! );
//! assert_eq!(frames.len(), 151);
//! assert!(matches!(
//!     frames[0].objects[1],
//!     SceneObject::Arrow { start, .. } if start == Point2::origin()
//! ));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    kinematics::{tangent_velocity, translate, velocity_vector, KinematicsError},
    math::Point2,
    trajectories::{sample_range, Sweep, Trajectory},
};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    White,
}

/// A shape the renderer draws
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum SceneObject {
    Dot {
        color: Color,
        pos: Point2,
    },
    Arrow {
        color: Color,
        start: Point2,
        end: Point2,
    },
    Segment {
        color: Color,
        start: Point2,
        end: Point2,
    },
    Curve {
        color: Color,
        points: Vec<Point2>,
    },
}

/// Everything drawn at `time` seconds into the animation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub time: f64,
    pub objects: Vec<SceneObject>,
}

/// The trajectory drawn as a polyline of `segments` pieces between `from` and `to`.
pub fn plot(
    trajectory: &impl Trajectory,
    from: f64,
    to: f64,
    segments: usize,
    color: Color,
) -> SceneObject {
    SceneObject::Curve {
        color,
        points: sample_range(trajectory, from, to, segments),
    }
}

/// A dot moving along `trajectory` as the sweep's parameter goes by, with the
/// arrow of its position vector drawn from `origin`.
pub fn position_vector_frames(
    trajectory: &impl Trajectory,
    origin: Point2,
    sweep: Sweep,
    fps: u32,
    color: Color,
) -> Vec<SceneFrame> {
    sweep
        .frames(fps)
        .into_iter()
        .map(|(time, x)| {
            let pos = trajectory.get_position(x);
            let (start, end) = translate(origin, origin.to(pos));
            SceneFrame {
                time,
                objects: vec![
                    SceneObject::Dot { color, pos },
                    SceneObject::Arrow { color, start, end },
                ],
            }
        })
        .collect()
}

/// The start of the motion stays at `trajectory(start_x)` while the end moves as
/// the sweep goes by. Each frame has both dots, the chord joining them and an
/// average velocity arrow of length `speed` along the chord, drawn from the start.
///
/// Fails with [`KinematicsError::UndefinedDirection`] if the sweep reaches `start_x`.
pub fn average_velocity_frames(
    trajectory: &impl Trajectory,
    start_x: f64,
    sweep: Sweep,
    speed: f64,
    fps: u32,
    color: Color,
) -> Result<Vec<SceneFrame>, KinematicsError> {
    let start = trajectory.get_position(start_x);
    debug!(?start, speed, "building average velocity frames");
    sweep
        .frames(fps)
        .into_iter()
        .map(|(time, x)| {
            let end = trajectory.get_position(x);
            let velocity = velocity_vector(start, end, speed)?;
            let (arrow_start, arrow_end) = translate(start, velocity);
            Ok(SceneFrame {
                time,
                objects: vec![
                    SceneObject::Dot {
                        color: Color::White,
                        pos: start,
                    },
                    SceneObject::Dot {
                        color: Color::White,
                        pos: end,
                    },
                    SceneObject::Segment {
                        color: Color::Yellow,
                        start,
                        end,
                    },
                    SceneObject::Arrow {
                        color,
                        start: arrow_start,
                        end: arrow_end,
                    },
                ],
            })
        })
        .collect()
}

/// A dot moving along `trajectory` with a velocity arrow of length `speed`
/// pointing towards the position `ds` further along.
pub fn tangent_velocity_frames(
    trajectory: &impl Trajectory,
    sweep: Sweep,
    ds: f64,
    speed: f64,
    fps: u32,
    color: Color,
) -> Result<Vec<SceneFrame>, KinematicsError> {
    sweep
        .frames(fps)
        .into_iter()
        .map(|(time, x)| {
            let pos = trajectory.get_position(x);
            let (start, end) = translate(pos, tangent_velocity(trajectory, x, ds, speed)?);
            Ok(SceneFrame {
                time,
                objects: vec![
                    SceneObject::Dot {
                        color: Color::White,
                        pos,
                    },
                    SceneObject::Arrow { color, start, end },
                ],
            })
        })
        .collect()
}
