use ::rand::rngs::StdRng;
use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use trisect::{SeedMode, Subdivision, SubdivisionConfig, initial_mesh};
use trisect_viz::{BACKGROUND, Palette, SketchArgs, draw_generation, paint};

/// Sketch state: the driver, its random source and the current fills.
struct Sketch {
    args: SketchArgs,
    rng: StdRng,
    driver: Subdivision,
    palette: Palette,
    colors: Vec<Color>,
    since_step: f32,
}

impl Sketch {
    fn new(args: SketchArgs) -> Result<Self> {
        let width = f64::from(args.width);
        let rng = args.config(width).rng();
        let driver = Subdivision::new(Default::default(), args.config(width))?;
        let mut sketch = Self {
            args,
            rng,
            driver,
            palette: Palette::by_name("sunset").context("built-in palette missing")?,
            colors: Vec::new(),
            since_step: 0.0,
        };
        sketch.restart()?;
        Ok(sketch)
    }

    /// Draws a fresh seed mesh sized to the current window.
    fn restart(&mut self) -> Result<()> {
        let (width, height) = (screen_width() as f64, screen_height() as f64);
        let config = self.args.config(width);

        self.palette = match &self.args.palette {
            Some(name) => {
                Palette::by_name(name).with_context(|| format!("unknown palette `{name}`"))?
            }
            None => Palette::random(&mut self.rng),
        };

        let seed = match initial_mesh(
            self.args.points,
            width,
            height,
            self.args.padding,
            &config,
            &mut self.rng,
        ) {
            Ok(seed) => seed,
            Err(err) if !err.is_configuration() => {
                warn!(%err, "falling back to the fixed split seed");
                let fallback = config.clone().with_seed_mode(SeedMode::FixedSplit);
                initial_mesh(0, width, height, self.args.padding, &fallback, &mut self.rng)?
            }
            Err(err) => return Err(err).context("invalid sketch configuration"),
        };

        info!(
            triangles = seed.len(),
            palette = self.palette.name,
            width,
            height,
            "restart"
        );

        self.driver = Subdivision::new(seed, config)?;
        self.repaint();
        self.since_step = 0.0;
        Ok(())
    }

    fn repaint(&mut self) {
        self.colors = paint(self.driver.current(), self.palette, &mut self.rng);
    }

    /// Advances one generation every `step_interval` seconds.
    fn tick(&mut self, dt: f32) {
        if self.driver.is_finished() {
            return;
        }
        self.since_step += dt;
        if self.since_step < self.args.step_interval {
            return;
        }
        self.since_step = 0.0;

        if self.driver.advance(&mut self.rng) {
            self.repaint();
            if self.driver.is_finished() {
                info!(
                    iteration = self.driver.iteration(),
                    triangles = self.driver.current().len(),
                    "reached iteration cap"
                );
            }
        }
    }

    fn draw(&self) {
        clear_background(BACKGROUND);
        draw_generation(self.driver.current(), &self.colors, None);

        let cfg: &SubdivisionConfig = self.driver.config();
        draw_text(
            &format!(
                "Iteration {}/{} | {} triangles | {}",
                self.driver.iteration(),
                cfg.max_iterations,
                self.driver.current().len(),
                self.palette.name
            ),
            10.0,
            screen_height() - 28.0,
            18.0,
            DARKGRAY,
        );
        draw_text(
            "[R]/[Space] restart | [Esc] quit",
            10.0,
            screen_height() - 10.0,
            16.0,
            GRAY,
        );
    }
}

fn window_conf() -> Conf {
    let args = SketchArgs::parse();
    Conf {
        window_title: "Trisect".to_owned(),
        window_width: args.width as i32,
        window_height: args.canvas_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut sketch = match Sketch::new(SketchArgs::parse()) {
        Ok(sketch) => sketch,
        Err(err) => {
            error!("{err:#}");
            return;
        }
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::R) || is_key_pressed(KeyCode::Space) {
            if let Err(err) = sketch.restart() {
                error!("{err:#}");
                break;
            }
        }

        sketch.tick(get_frame_time());
        sketch.draw();

        next_frame().await
    }
}
