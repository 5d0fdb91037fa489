use crate::objects::HitRecord;
use crate::{Color, Point, Ray};

/// Determines how a surface scatters the light that hits it. A material either returns a
/// scattered ray and an attenuation color, or `None` if it absorbs the ray entirely (used by
/// `lights::DiffuseLight`, which only emits).
pub trait Material: Send + Sync {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<(Ray, Color)>;

    /// Light emitted by the surface itself, independent of any incoming ray. Black for every
    /// material except emissive ones.
    fn emitted(&self, _u: f64, _v: f64, _p: &Point) -> Color {
        Color::new(0.0, 0.0, 0.0)
    }
}
