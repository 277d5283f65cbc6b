//! Computational core of the kinematics animations: position vectors,
//! displacement, distance travelled, average and instantaneous velocity.
//!
//! The renderer is an external collaborator. This crate evaluates trajectories,
//! computes the vectors to draw, and describes each frame as serializable data
//! (see [`scene`]).
//!
//! ```
//! use cinematica::{kinematics::{displacement, speed_estimate}, math::{Point2, Vec2}};
//!
//! let p = Point2::new(1., 3.);
//! let q = Point2::new(4., 2.);
//! assert_eq!(displacement(p, q), Vec2::new(3., -1.));
//! assert!((speed_estimate(p, q, 2.).unwrap() - 10f64.sqrt() / 2.).abs() < 1e-12);
//! ```
#![deny(clippy::unwrap_used)]
pub mod kinematics;
pub mod math;
pub mod scene;
pub mod trajectories;

/// frame rate used by the animations
pub const DEFAULT_FPS: u32 = 30;
