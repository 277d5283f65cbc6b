use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Trajectory;
use crate::math::Point2;

/// `segments + 1` evenly spaced samples of `trajectory` between `from` and `to`
/// (both included). `from > to` samples backwards.
pub fn sample_range(
    trajectory: &impl Trajectory,
    from: f64,
    to: f64,
    segments: usize,
) -> Vec<Point2> {
    if segments == 0 {
        return vec![trajectory.get_position(from)];
    }
    let step = (to - from) / segments as f64;
    (0..=segments)
        .map(|i| {
            // land exactly on `to` instead of accumulating the step error
            let x = if i == segments {
                to
            } else {
                step.mul_add(i as f64, from)
            };
            trajectory.get_position(x)
        })
        .collect()
}

/// How a sweep progresses from its start to its end value.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// slow start and slow end, like the usual animation default
    #[default]
    Smooth,
}

impl Easing {
    const INFLECTION: f64 = 10.;

    /// Maps progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let progress = progress.clamp(0., 1.);
        match self {
            Easing::Linear => progress,
            Easing::Smooth => {
                let error = sigmoid(-Self::INFLECTION / 2.);
                ((sigmoid(Self::INFLECTION * (progress - 0.5)) - error) / (1. - 2. * error))
                    .clamp(0., 1.)
            }
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1. / (1. + (-x).exp())
}

/// A parameter animated from `from` to `to` over `run_time` seconds.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub from: f64,
    pub to: f64,
    pub run_time: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Sweep {
    pub fn new(from: f64, to: f64, run_time: f64) -> Self {
        Self {
            from,
            to,
            run_time,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Parameter value `t` seconds into the sweep, `t` being clamped to `[0, run_time]`.
    pub fn value_at(&self, t: f64) -> f64 {
        if self.run_time <= 0. || t >= self.run_time {
            return self.to;
        }
        if t <= 0. {
            return self.from;
        }
        let progress = self.easing.apply(t / self.run_time);
        (self.to - self.from).mul_add(progress, self.from)
    }

    /// `(time, value)` of every frame at `fps` frames per second. The first frame
    /// is at time 0 and the last one exactly at `run_time`.
    ///
    /// An `fps` of zero (or a non-positive run time) yields only the final frame.
    pub fn frames(&self, fps: u32) -> Vec<(f64, f64)> {
        if fps == 0 || self.run_time <= 0. {
            let end = self.run_time.max(0.);
            return vec![(end, self.to)];
        }
        let fps = f64::from(fps);
        let n = (self.run_time * fps).ceil() as usize;
        debug!(n_frames = n + 1, sweep = ?self, "sweeping");
        (0..=n)
            .map(|i| {
                let t = (i as f64 / fps).min(self.run_time);
                (t, self.value_at(t))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectories::{Linear, Quadratic};
    use rstest::rstest;

    #[test]
    fn range_has_exact_endpoints() {
        let t = Quadratic {
            a: 0.5,
            b: -3.5,
            c: 8.,
        };
        let points = sample_range(&t, 0., 5., 7);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], t.get_position(0.));
        assert_eq!(points[7], t.get_position(5.));
    }

    #[test]
    fn backwards_range() {
        let t = Linear {
            slope: 1.,
            intercept: 0.,
        };
        let xs: Vec<f64> = sample_range(&t, 5., 0., 5).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![5., 4., 3., 2., 1., 0.]);
    }

    #[test]
    fn zero_segments_is_a_single_point() {
        let t = Linear {
            slope: 1.,
            intercept: 1.,
        };
        assert_eq!(sample_range(&t, 2., 4., 0), vec![Point2::new(2., 3.)]);
    }

    #[rstest]
    #[case(Easing::Linear)]
    #[case(Easing::Smooth)]
    fn easing_fixes_endpoints_and_midpoint(#[case] easing: Easing) {
        assert!(easing.apply(0.).abs() < 1e-12);
        assert!((easing.apply(1.) - 1.).abs() < 1e-12);
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(easing.apply(-3.), easing.apply(0.));
        assert_eq!(easing.apply(3.), easing.apply(1.));
    }

    #[test]
    fn smooth_easing_is_monotone() {
        let values: Vec<f64> = (0..=100)
            .map(|i| Easing::Smooth.apply(f64::from(i) / 100.))
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // slower than linear at the start
        assert!(values[10] < 0.1);
    }

    #[rstest]
    #[case(Easing::Linear)]
    #[case(Easing::Smooth)]
    fn frames_go_from_start_to_end(#[case] easing: Easing) {
        let sweep = Sweep::new(2., 1.05, 6.).with_easing(easing);
        let frames = sweep.frames(30);
        assert_eq!(frames.len(), 181);
        assert_eq!(frames[0], (0., 2.));
        assert_eq!(*frames.last().unwrap(), (6., 1.05));
    }

    #[test]
    fn frames_end_exactly_at_run_time() {
        let frames = Sweep::new(0., 5., 0.25).with_easing(Easing::Linear).frames(6);
        // 1.5 frames worth of time, rounded up
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2], (0.25, 5.));
    }

    #[test]
    fn degenerate_sweeps_yield_the_final_frame() {
        assert_eq!(Sweep::new(0., 5., 5.).frames(0), vec![(5., 5.)]);
        assert_eq!(Sweep::new(0., 5., 0.).frames(30), vec![(0., 5.)]);
        assert_eq!(Sweep::new(0., 5., -1.).value_at(0.), 5.);
    }

    #[test]
    fn value_is_clamped_to_the_sweep() {
        let sweep = Sweep::new(0., 4., 2.).with_easing(Easing::Linear);
        assert_eq!(sweep.value_at(-1.), 0.);
        assert_eq!(sweep.value_at(1.), 2.);
        assert_eq!(sweep.value_at(10.), 4.);
    }
}
