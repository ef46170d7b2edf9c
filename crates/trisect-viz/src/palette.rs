//! Color palettes for filling triangles.

use macroquad::color::Color;
use rand::Rng;

/// A named set of fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    colors: &'static [u32],
}

/// Built-in palettes, as `0xRRGGBB` values.
pub const PALETTES: &[Palette] = &[
    Palette {
        name: "sunset",
        colors: &[0x264653, 0x2a9d8f, 0xe9c46a, 0xf4a261, 0xe76f51],
    },
    Palette {
        name: "ocean",
        colors: &[0x03045e, 0x0077b6, 0x00b4d8, 0x90e0ef, 0xcaf0f8],
    },
    Palette {
        name: "forest",
        colors: &[0x283618, 0x606c38, 0xdda15e, 0xbc6c25, 0xfefae0],
    },
    Palette {
        name: "berry",
        colors: &[0x590d22, 0x800f2f, 0xa4133c, 0xff4d6d, 0xffccd5],
    },
    Palette {
        name: "mono",
        colors: &[0x111111, 0x444444, 0x777777, 0xaaaaaa, 0xdddddd],
    },
];

impl Palette {
    /// Looks up a built-in palette by name.
    pub fn by_name(name: &str) -> Option<Palette> {
        PALETTES.iter().copied().find(|p| p.name == name)
    }

    /// Picks a built-in palette uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Palette {
        PALETTES[rng.gen_range(0..PALETTES.len())]
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`, wrapping around.
    pub fn color(&self, index: usize) -> Color {
        Color::from_hex(self.colors[index % self.colors.len()])
    }

    /// Draws one palette index from `rng` and returns its color.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.color(rng.gen_range(0..self.colors.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lookup_by_name() {
        assert_eq!(Palette::by_name("ocean").map(|p| p.name), Some("ocean"));
        assert!(Palette::by_name("plaid").is_none());
    }

    #[test]
    fn palettes_are_non_empty() {
        for palette in PALETTES {
            assert!(!palette.is_empty());
        }
    }

    #[test]
    fn color_wraps() {
        let palette = Palette::by_name("mono").unwrap();
        assert_eq!(palette.color(0), palette.color(palette.len()));
    }

    #[test]
    fn pick_is_replayable() {
        let palette = Palette::by_name("sunset").unwrap();
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(palette.pick(&mut a), palette.pick(&mut b));
        }
    }
}
