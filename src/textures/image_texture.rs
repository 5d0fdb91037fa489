use crate::error::RenderError;
use crate::textures::Texture;
use crate::{Color, Point};
use image::RgbImage;

/// A texture backed by a decoded 2D image. Lookup is nearest-neighbor, not bilinearly filtered:
/// `u,v` in `[0,1]` map directly to a single pixel.
#[derive(Clone)]
pub struct ImageTexture {
    image: RgbImage,
    width: u32,
    height: u32,
}

impl Texture for ImageTexture {
    fn value(&self, u: f64, v: f64, _p: &Point) -> Color {
        if self.width == 0 || self.height == 0 {
            return Color::new(0.0, 1.0, 1.0);
        }

        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let i = ((u * self.width as f64) as u32).min(self.width - 1);
        let j = (((1.0 - v) * self.height as f64) as u32).min(self.height - 1);

        let pixel = self.image.get_pixel(i, j);
        let color_scale = 1.0 / 255.0;

        Color::new(
            pixel[0] as f64 * color_scale,
            pixel[1] as f64 * color_scale,
            pixel[2] as f64 * color_scale,
        )
    }
}

impl ImageTexture {
    pub fn load(path: &str) -> Result<ImageTexture, RenderError> {
        let image = image::open(path)
            .map_err(|source| RenderError::AssetLoad {
                path: path.to_string(),
                source,
            })?
            .to_rgb8();
        let (width, height) = image.dimensions();

        Ok(ImageTexture {
            image,
            width,
            height,
        })
    }
}
