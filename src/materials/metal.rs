use super::material::Material;
use crate::objects::HitRecord;
use crate::{Color, Ray, Vec3};

/// A reflective surface. `fuzz` perturbs the ideal mirror direction by a random point in a sphere
/// of that radius, producing blurred reflections; `0.0` is a perfect mirror. Rays that would
/// scatter below the surface (possible for large fuzz or grazing angles) are absorbed.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Material for Metal {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<(Ray, Color)> {
        let reflected = Vec3::reflect(&r_in.direction().unit_vector(), &rec.normal);
        let scattered = Ray::new(
            &rec.p,
            &(reflected + self.fuzz * Vec3::random_in_unit_sphere()),
        );

        if scattered.direction().dot(&rec.normal) > 0.0 {
            Some((scattered, self.albedo))
        } else {
            None
        }
    }
}

impl Metal {
    pub fn new(albedo: Color, fuzz: f64) -> Metal {
        Metal {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }
}
