mod checker_texture;
mod image_texture;
mod perlin;
mod solid_color;
mod texture;

pub use checker_texture::CheckerTexture;
pub use image_texture::ImageTexture;
pub use perlin::PerlinNoiseTexture;
pub use solid_color::SolidColor;
pub use texture::Texture;
