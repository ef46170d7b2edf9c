//! Runs the subdivision without a window and logs each generation.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trisect::{MeshStats, Subdivision, initial_mesh};
use trisect_viz::{Palette, SketchArgs, paint};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = SketchArgs::parse();
    let (width, height) = (f64::from(args.width), f64::from(args.canvas_height()));
    let config = args.config(width);
    let mut rng = config.rng();

    let palette = match &args.palette {
        Some(name) => Palette::by_name(name)
            .ok_or_else(|| anyhow::anyhow!("unknown palette `{name}`"))?,
        None => Palette::random(&mut rng),
    };

    let seed = initial_mesh(args.points, width, height, args.padding, &config, &mut rng)?;
    info!(triangles = seed.len(), mode = ?config.seed_mode, palette = palette.name, "seeded");

    // Fills are discarded, but drawing them keeps the random stream in step
    // with the windowed sketch for the same seed.
    let mut driver = Subdivision::new(seed, config)?;
    paint(driver.current(), palette, &mut rng);
    while driver.advance(&mut rng) {
        let generation = driver.current();
        paint(generation, palette, &mut rng);

        let mut stats = MeshStats::new();
        generation.accept(&mut stats);
        info!(
            iteration = generation.iteration(),
            triangles = stats.count,
            area = stats.total_area,
            smallest = stats.smallest_area.unwrap_or_default(),
            longest_side = stats.longest_side,
            "generation"
        );
    }

    Ok(())
}
