mod perlin_noise;
mod perlin_noise_texture;

pub use perlin_noise_texture::PerlinNoiseTexture;
