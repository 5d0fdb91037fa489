use crate::materials::Material;
use crate::objects::{HitRecord, Hittable, AABB};
use crate::{Point, Ray, Vec3};
use std::sync::Arc;

/// An axis-aligned rectangle in the plane `y = k`, spanning `[x0,x1] x [z0,z1]`. Its default
/// outward normal is `+y`; used for the Cornell box floor/ceiling and for area lights.
pub struct XZRect {
    x0: f64,
    x1: f64,
    z0: f64,
    z1: f64,
    k: f64,
    material: Arc<dyn Material>,
}

impl Hittable for XZRect {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let t = (self.k - r.origin().y()) / r.direction().y();
        if t < t_min || t > t_max {
            return None;
        }
        let x = r.origin().x() + t * r.direction().x();
        let z = r.origin().z() + t * r.direction().z();
        if x < self.x0 || x > self.x1 || z < self.z0 || z > self.z1 {
            return None;
        }

        let mut hit_rec = HitRecord::new(
            r.at(t),
            Vec3::default(),
            self.material.clone(),
            t,
            (x - self.x0) / (self.x1 - self.x0),
            (z - self.z0) / (self.z1 - self.z0),
            false,
        );

        let outward_normal = Vec3::new(0.0, 1.0, 0.0);
        hit_rec.set_face_normal(r, &outward_normal);

        Some(hit_rec)
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<AABB> {
        Some(AABB::new(
            Point::new(self.x0, self.k - 0.0001, self.z0),
            Point::new(self.x1, self.k + 0.0001, self.z1),
        ))
    }
}

impl XZRect {
    pub fn new(x0: f64, x1: f64, z0: f64, z1: f64, k: f64, material: Arc<dyn Material>) -> XZRect {
        XZRect {
            x0,
            x1,
            z0,
            z1,
            k,
            material,
        }
    }
}
