use crate::materials::Material;
use crate::objects::HitRecord;
use crate::textures::{SolidColor, Texture};
use crate::Vec3;
use crate::{Color, Ray};
use std::sync::Arc;

/// A uniform-scattering phase function: every direction is equally likely. Used by
/// `ConstantMedium` to model light bouncing around inside smoke or fog.
pub struct Isotropic {
    albedo: Arc<dyn Texture>,
}

impl Material for Isotropic {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<(Ray, Color)> {
        let scattered = Ray::new_with_time(&rec.p, &Vec3::random_in_unit_sphere(), r_in.time());
        let attenuation = self.albedo.value(rec.u, rec.v, &rec.p);

        Some((scattered, attenuation))
    }
}

impl Isotropic {
    pub fn new(albedo: Arc<dyn Texture>) -> Isotropic {
        Isotropic { albedo }
    }

    pub fn new_with_color(color: Color) -> Isotropic {
        Isotropic {
            albedo: Arc::new(SolidColor::new(color)),
        }
    }
}
