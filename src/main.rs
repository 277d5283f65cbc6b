use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cinematica::{
    kinematics::{average_speed, speed_estimate},
    math::{Point2, Rect},
    scene::{self, Color, SceneFrame},
    trajectories::{arc_length, chord_length, AnyTrajectory, Easing, Preset, Sweep, Trajectory},
    DEFAULT_FPS,
};

/// Describe kinematics animation frames as JSON.
///
/// Scenes are printed on stdout, one JSON document per line. Logs go to stderr
/// and are filtered with `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the trajectory sampled between `--from` and `--to` as a curve.
    Plot {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = 0.)]
        from: f64,
        #[arg(long, default_value_t = 5.)]
        to: f64,
        #[arg(long, default_value_t = 100)]
        segments: usize,
    },
    /// Print the frames of a dot moving along the trajectory with its position vector.
    Animate {
        #[command(flatten)]
        source: Source,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Print the frames of the average velocity from a fixed start point to a
    /// moving end point.
    ///
    /// The arrow length is the speed from `--start` to `--end` over `--elapsed`
    /// seconds. The sweep defaults to 2 -> 1.05 over 6 s, stopping short of the start.
    AverageVelocity {
        #[command(flatten)]
        source: Source,
        /// parameter of the fixed start point
        #[arg(long, default_value_t = 1.)]
        start: f64,
        /// parameter of the end of the motion
        #[arg(long, default_value_t = 4.)]
        end: f64,
        #[arg(long, default_value_t = 2.)]
        elapsed: f64,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Print the frames of a dot with its instantaneous velocity.
    Tangent {
        #[command(flatten)]
        source: Source,
        /// forward step used to estimate the direction
        #[arg(long, default_value_t = 0.1)]
        ds: f64,
        #[arg(long, default_value_t = 1.)]
        speed: f64,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Print the distance travelled between `--from` and `--to`.
    Length {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = 1.)]
        from: f64,
        #[arg(long, default_value_t = 4.)]
        to: f64,
        #[arg(long, default_value_t = 1000)]
        segments: usize,
        /// also print the average speed over this many seconds
        #[arg(long)]
        elapsed: Option<f64>,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// one of the trajectories of the scenes
    #[arg(long, value_enum)]
    preset: Option<Preset>,
    /// JSON trajectory document
    #[arg(long)]
    trajectory: Option<PathBuf>,
}

impl Source {
    fn load(&self) -> Result<AnyTrajectory> {
        match (&self.preset, &self.trajectory) {
            (Some(preset), _) => Ok(preset.trajectory()),
            (None, Some(path)) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("couldn't read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("{} isn't a trajectory document", path.display()))
            }
            (None, None) => anyhow::bail!("either --preset or --trajectory is required"),
        }
    }
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// parameter value at the start of the animation [default: depends on the scene]
    #[arg(long)]
    from: Option<f64>,
    /// parameter value at the end of the animation [default: depends on the scene]
    #[arg(long)]
    to: Option<f64>,
    /// duration in seconds [default: depends on the scene]
    #[arg(long)]
    run_time: Option<f64>,
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    #[arg(long, value_enum, default_value_t = Easing::Smooth)]
    easing: Easing,
    #[arg(long, value_enum, default_value_t = Color::Blue)]
    color: Color,
}

/// the dot goes over the whole axes
const FULL_SWEEP: Sweep = Sweep {
    from: 0.,
    to: 5.,
    run_time: 5.,
    easing: Easing::Smooth,
};

/// the end point comes back towards the start without reaching it
const AVERAGE_VELOCITY_SWEEP: Sweep = Sweep {
    from: 2.,
    to: 1.05,
    run_time: 6.,
    easing: Easing::Smooth,
};

const MAX_FRAMES: f64 = 100_000.;
const MAX_SEGMENTS: usize = 10_000_000;

impl SweepArgs {
    /// The sweep asked for, falling back on `defaults` for what wasn't given.
    fn sweep(&self, defaults: Sweep) -> Result<Sweep> {
        let sweep = Sweep {
            from: self.from.unwrap_or(defaults.from),
            to: self.to.unwrap_or(defaults.to),
            run_time: self.run_time.unwrap_or(defaults.run_time),
            easing: self.easing,
        };
        if !(sweep.from.is_finite() && sweep.to.is_finite() && sweep.run_time.is_finite()) {
            anyhow::bail!("the sweep bounds and run time must be finite");
        }
        if sweep.run_time * f64::from(self.fps) > MAX_FRAMES {
            anyhow::bail!("the sweep would have more than {MAX_FRAMES} frames");
        }
        Ok(sweep)
    }
}

fn check_segments(segments: usize) -> Result<()> {
    if segments > MAX_SEGMENTS {
        anyhow::bail!("at most {MAX_SEGMENTS} segments are supported");
    }
    Ok(())
}

/// Speed from `start` to `end` over `elapsed`, and the frames of the average
/// velocity arrow of that length.
fn average_velocity_scene(
    trajectory: &impl Trajectory,
    start: f64,
    end: f64,
    elapsed: f64,
    sweep: Sweep,
    fps: u32,
    color: Color,
) -> Result<(f64, Vec<SceneFrame>)> {
    let speed = speed_estimate(
        trajectory.get_position(start),
        trajectory.get_position(end),
        elapsed,
    )
    .context("couldn't estimate the average speed")?;
    let frames = scene::average_velocity_frames(trajectory, start, sweep, speed, fps, color)
        .context("couldn't build the average velocity frames")?;
    Ok((speed, frames))
}

#[derive(Serialize, Debug)]
struct LengthReport {
    arc_length: f64,
    chord_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_speed: Option<f64>,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn print_frames(frames: &[SceneFrame]) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for frame in frames {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
    }
    out.flush()?;
    info!(n_frames = frames.len(), "frames written");
    Ok(())
}

/// Warns about sweeps leaving the axes the scenes are drawn on.
fn check_visible(trajectory: &impl Trajectory, sweep: &Sweep) {
    let axes = Rect::default_axes();
    for x in [sweep.from, sweep.to] {
        let pos = trajectory.get_position(x);
        if !axes.contains(pos) {
            warn!(?pos, "sweep goes outside of the axes");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Plot {
            source,
            from,
            to,
            segments,
        } => {
            check_segments(segments)?;
            let trajectory = source.load()?;
            print_json(&scene::plot(&trajectory, from, to, segments, Color::Blue))?;
        }
        Command::Animate { source, sweep: args } => {
            let sweep = args.sweep(FULL_SWEEP)?;
            let trajectory = source.load()?;
            check_visible(&trajectory, &sweep);
            let frames = scene::position_vector_frames(
                &trajectory,
                Point2::origin(),
                sweep,
                args.fps,
                args.color,
            );
            print_frames(&frames)?;
        }
        Command::AverageVelocity {
            source,
            start,
            end,
            elapsed,
            sweep: args,
        } => {
            let sweep = args.sweep(AVERAGE_VELOCITY_SWEEP)?;
            let trajectory = source.load()?;
            check_visible(&trajectory, &sweep);
            let (speed, frames) = average_velocity_scene(
                &trajectory,
                start,
                end,
                elapsed,
                sweep,
                args.fps,
                args.color,
            )?;
            info!(speed, "average speed");
            print_frames(&frames)?;
        }
        Command::Tangent {
            source,
            ds,
            speed,
            sweep: args,
        } => {
            let sweep = args.sweep(FULL_SWEEP)?;
            let trajectory = source.load()?;
            check_visible(&trajectory, &sweep);
            let frames = scene::tangent_velocity_frames(
                &trajectory,
                sweep,
                ds,
                speed,
                args.fps,
                args.color,
            )
            .context("couldn't build the tangent velocity frames")?;
            print_frames(&frames)?;
        }
        Command::Length {
            source,
            from,
            to,
            segments,
            elapsed,
        } => {
            check_segments(segments)?;
            let trajectory = source.load()?;
            let arc = arc_length(&trajectory, from, to, segments);
            let report = LengthReport {
                arc_length: arc,
                chord_length: chord_length(&trajectory, from, to, segments),
                average_speed: elapsed.map(|t| average_speed(arc, t)).transpose()?,
            };
            print_json(&report)?;
        }
    }
    Ok(())
}
