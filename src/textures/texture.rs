use crate::{Color, Point};

/// Anything that can produce a color from a surface point. `u`/`v` are the hit's texture
/// coordinates; `p` is the world-space hit point (used by `PerlinNoiseTexture`, which ignores
/// `u`/`v` entirely and samples noise directly from `p`).
pub trait Texture: Send + Sync {
    fn value(&self, u: f64, v: f64, p: &Point) -> Color;
}
