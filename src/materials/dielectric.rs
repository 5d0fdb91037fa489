use crate::materials::Material;
use crate::objects::HitRecord;
use crate::rtweekend::random_in_unit_interval;
use crate::{Color, Ray, Vec3};

/// A transparent material (glass, water) with index of refraction `ir`. Each scattered ray is
/// either reflected or refracted, chosen randomly by Schlick's reflectance approximation so that
/// glazing angles reflect more often, matching real glass and avoiding a separate recursive
/// branch per interaction.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    ir: f64,
}

impl Material for Dielectric {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<(Ray, Color)> {
        let attenuation = Color::new(1.0, 1.0, 1.0);
        let refraction_ratio = if rec.front_face { 1.0 / self.ir } else { self.ir };

        let unit_direction = r_in.direction().unit_vector();
        let cos_theta = f64::min(-unit_direction.dot(&rec.normal), 1.0);
        let sin_theta = f64::sqrt(1.0 - cos_theta * cos_theta);

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction = if cannot_refract
            || reflectance(cos_theta, refraction_ratio) > random_in_unit_interval()
        {
            Vec3::reflect(&unit_direction, &rec.normal)
        } else {
            Vec3::refract(&unit_direction, &rec.normal, refraction_ratio)
        };

        Some((Ray::new(&rec.p, &direction), attenuation))
    }
}

impl Dielectric {
    pub fn new(ir: f64) -> Dielectric {
        Dielectric { ir }
    }
}

/// Schlick's approximation for reflectance: how much of the light reflects rather than refracts,
/// as a function of the viewing angle.
fn reflectance(cosine: f64, ref_idx: f64) -> f64 {
    let r0 = (1.0 - ref_idx) / (1.0 + ref_idx);
    let r0 = r0 * r0;

    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::HitRecord;
    use crate::vec3::Point;
    use std::sync::Arc;

    #[test]
    fn normal_incidence_passes_straight_through() {
        let glass = Dielectric::new(1.5);
        let r_in = Ray::new(&Point::new(0.0, 0.0, -5.0), &Vec3::new(0.0, 0.0, 1.0));
        let rec = HitRecord::new(
            Point::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
            Arc::new(glass),
            4.0,
            0.0,
            0.0,
            true,
        );

        let (scattered, attenuation) = glass.scatter(&r_in, &rec).unwrap();
        assert!((scattered.direction().unit_vector().z() - 1.0).abs() < 1e-9);
        assert_eq!(attenuation, Color::new(1.0, 1.0, 1.0));
    }
}
