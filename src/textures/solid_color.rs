use crate::textures::Texture;
use crate::{Color, Point};

/// A texture in graphics usually means a function that makes the colors on a surface procedural.
/// We also model constant colors as textures, for simplicity and uniformity with the procedural
/// and image-backed variants.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    color: Color,
}

impl Texture for SolidColor {
    fn value(&self, _u: f64, _v: f64, _p: &Point) -> Color {
        self.color
    }
}

impl SolidColor {
    pub fn new(color: Color) -> SolidColor {
        SolidColor { color }
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        SolidColor {
            color: Color::new(1.0, 1.0, 1.0),
        }
    }
}
