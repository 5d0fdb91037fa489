use crate::materials::{Isotropic, Material};
use crate::objects::{HitRecord, Hittable, AABB};
use crate::rtweekend::{random_in_unit_interval, INFINITY};
use crate::{Color, Ray, Vec3};
use std::sync::Arc;

/// # Participating Media
/// A volume of constant density, rendered as a random surface: a ray that enters the boundary
/// hittable may scatter at any point inside, with the scattering distance drawn from an
/// exponential distribution. Denser media (`density`) scatter sooner on average.
pub struct ConstantMedium {
    neg_inv_density: f64,
    boundary: Arc<dyn Hittable>,
    phase_function: Arc<dyn Material>,
}

impl Hittable for ConstantMedium {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let rec1 = self.boundary.hit(r, -INFINITY, INFINITY)?;
        let rec2 = self.boundary.hit(r, rec1.t + 0.0001, INFINITY)?;

        let mut t_enter = rec1.t.max(t_min);
        let t_exit = rec2.t.min(t_max);

        if t_enter >= t_exit {
            return None;
        }

        if t_enter < 0.0 {
            t_enter = 0.0;
        }

        let ray_length = r.direction().length();
        let distance_inside_boundary = (t_exit - t_enter) * ray_length;
        let hit_distance = self.neg_inv_density * random_in_unit_interval().ln();

        if hit_distance > distance_inside_boundary {
            return None;
        }

        let t = t_enter + hit_distance / ray_length;
        let p = r.at(t);

        Some(HitRecord::new(
            p,
            Vec3::new(1.0, 0.0, 0.0),
            self.phase_function.clone(),
            t,
            0.0,
            0.0,
            true,
        ))
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Option<AABB> {
        self.boundary.bounding_box(time0, time1)
    }
}

impl ConstantMedium {
    pub fn new(
        boundary: Arc<dyn Hittable>,
        phase_function: Arc<dyn Material>,
        density: f64,
    ) -> ConstantMedium {
        ConstantMedium {
            boundary,
            phase_function,
            neg_inv_density: -1.0 / density,
        }
    }

    pub fn new_with_color(boundary: Arc<dyn Hittable>, color: Color, density: f64) -> ConstantMedium {
        ConstantMedium::new(boundary, Arc::new(Isotropic::new_with_color(color)), density)
    }
}
