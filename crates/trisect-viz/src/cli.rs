//! Command-line options shared by the sketch binaries.

use clap::{Parser, ValueEnum};
use trisect::{SeedMode, SubdivisionConfig};

/// Which seed mesh to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Padded rectangle cut along its diagonal.
    Fixed,
    /// Delaunay triangulation of corners plus random points.
    Delaunay,
}

impl From<Mode> for SeedMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Fixed => SeedMode::FixedSplit,
            Mode::Delaunay => SeedMode::Delaunay,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "trisect-viz")]
#[command(about = "Recursive longest-edge triangle subdivision sketch")]
pub struct SketchArgs {
    /// Seed for the shared random source; omit for a fresh run each time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random interior points for the Delaunay seed mesh
    #[arg(long, default_value_t = 6)]
    pub points: usize,

    #[arg(long, value_enum, default_value_t = Mode::Delaunay)]
    pub mode: Mode,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 850)]
    pub width: u32,

    /// Canvas height in pixels (defaults to width * sqrt(2))
    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long, default_value_t = 50.0)]
    pub padding: f64,

    #[arg(long, default_value_t = 10)]
    pub max_iterations: u32,

    /// Last iteration at which every triangle is split
    #[arg(long, default_value_t = 2)]
    pub drop_threshold: u32,

    /// Chance of dropping a triangle past the threshold
    #[arg(long, default_value_t = 0.2)]
    pub drop_probability: f64,

    /// Minimum distance between seed points
    #[arg(long, default_value_t = 150.0)]
    pub min_separation: f64,

    /// Split at exact midpoints
    #[arg(long)]
    pub no_jitter: bool,

    /// Seconds between subdivision steps
    #[arg(long, default_value_t = 0.4)]
    pub step_interval: f32,

    /// Palette name; a random one is picked on every restart when omitted
    #[arg(long)]
    pub palette: Option<String>,
}

impl SketchArgs {
    /// Canvas height, derived from the width when not given.
    pub fn canvas_height(&self) -> u32 {
        self.height
            .unwrap_or_else(|| (f64::from(self.width) * std::f64::consts::SQRT_2).round() as u32)
    }

    /// Maps the options onto a subdivision config for a canvas `width` wide.
    pub fn config(&self, width: f64) -> SubdivisionConfig {
        let mut config = SubdivisionConfig::default()
            .with_seed_mode(self.mode.into())
            .with_jitter(!self.no_jitter)
            .with_jitter_scale(width)
            .with_drop(self.drop_threshold, self.drop_probability)
            .with_max_iterations(self.max_iterations)
            .with_min_point_separation(self.min_separation);
        config.random_seed = self.seed;
        config
    }
}
