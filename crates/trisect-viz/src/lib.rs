//! Rendering helpers for the subdivision sketch.

use ::rand::Rng;
use macroquad::prelude::*;
use trisect::{Generation, GenerationVisitor, Point, Triangle};

pub mod cli;
pub mod palette;

pub use cli::{Mode, SketchArgs};
pub use palette::{PALETTES, Palette};

/// Background behind the mesh.
pub const BACKGROUND: Color = Color::new(0.96, 0.94, 0.89, 1.0);

/// Converts a mesh point to screen coordinates.
#[inline]
pub fn to_screen(p: Point) -> Vec2 {
    vec2(p.x as f32, p.y as f32)
}

/// Draws a single filled triangle, optionally outlined.
pub fn draw_shape(triangle: &Triangle, fill: Color, outline: Option<Color>) {
    let [a, b, c] = triangle.vertices().map(to_screen);
    draw_triangle(a, b, c, fill);
    if let Some(line) = outline {
        draw_triangle_lines(a, b, c, 1.0, line);
    }
}

/// Visitor that assigns each triangle a random palette color.
///
/// Draws exactly one palette index per triangle, in generation order.
pub struct PaintVisitor<'a, R: Rng + ?Sized> {
    palette: Palette,
    rng: &'a mut R,
    colors: Vec<Color>,
}

impl<'a, R: Rng + ?Sized> PaintVisitor<'a, R> {
    pub fn new(palette: Palette, rng: &'a mut R) -> Self {
        Self {
            palette,
            rng,
            colors: Vec::new(),
        }
    }

    /// Returns the assigned colors.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl<R: Rng + ?Sized> GenerationVisitor for PaintVisitor<'_, R> {
    fn visit(&mut self, _triangle: &Triangle) {
        self.colors.push(self.palette.pick(self.rng));
    }
}

/// Picks a fill color for every triangle of `generation`.
pub fn paint<R: Rng + ?Sized>(generation: &Generation, palette: Palette, rng: &mut R) -> Vec<Color> {
    let mut visitor = PaintVisitor::new(palette, rng);
    generation.accept(&mut visitor);
    visitor.into_colors()
}

/// Visitor that renders triangles with precomputed fill colors.
pub struct RenderVisitor<'a> {
    colors: std::slice::Iter<'a, Color>,
    outline: Option<Color>,
}

impl<'a> RenderVisitor<'a> {
    pub fn new(colors: &'a [Color], outline: Option<Color>) -> Self {
        Self {
            colors: colors.iter(),
            outline,
        }
    }
}

impl GenerationVisitor for RenderVisitor<'_> {
    fn visit(&mut self, triangle: &Triangle) {
        let fill = self.colors.next().copied().unwrap_or(WHITE);
        draw_shape(triangle, fill, self.outline);
    }
}

/// Draws a whole generation. `colors` is indexed like the triangles.
pub fn draw_generation(generation: &Generation, colors: &[Color], outline: Option<Color>) {
    generation.accept(&mut RenderVisitor::new(colors, outline));
}
