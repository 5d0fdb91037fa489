use super::Texture;
use crate::textures::SolidColor;
use crate::{Color, Point};
use std::sync::Arc;

/// The sign of sine and cosine alternates regularly; multiplying the three axes together turns
/// that alternation into a 3D checker pattern that doesn't need any explicit grid bookkeeping.
pub struct CheckerTexture {
    odd: Arc<dyn Texture>,
    even: Arc<dyn Texture>,
}

impl Texture for CheckerTexture {
    fn value(&self, u: f64, v: f64, p: &Point) -> Color {
        let sines = (10.0 * p.x()).sin() * (10.0 * p.y()).sin() * (10.0 * p.z()).sin();

        if sines < 0.0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}

impl CheckerTexture {
    pub fn new(odd: Arc<dyn Texture>, even: Arc<dyn Texture>) -> CheckerTexture {
        CheckerTexture { odd, even }
    }

    pub fn new_with_colors(odd: Color, even: Color) -> CheckerTexture {
        CheckerTexture::new(Arc::new(SolidColor::new(odd)), Arc::new(SolidColor::new(even)))
    }
}

impl Default for CheckerTexture {
    fn default() -> Self {
        CheckerTexture::new_with_colors(Color::new(0.0, 0.0, 0.0), Color::new(1.0, 1.0, 1.0))
    }
}
