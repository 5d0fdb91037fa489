use crate::materials::Material;
use crate::objects::{HitRecord, Hittable, AABB};
use crate::{Point, Ray, Vec3};
use std::sync::Arc;

/// An axis-aligned rectangle in the plane `z = k`, spanning `[x0,x1] x [y0,y1]`. Its default
/// outward normal is `+z`.
pub struct XYRect {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    k: f64,
    material: Arc<dyn Material>,
}

impl Hittable for XYRect {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let t = (self.k - r.origin().z()) / r.direction().z();
        if t < t_min || t > t_max {
            return None;
        }
        let x = r.origin().x() + t * r.direction().x();
        let y = r.origin().y() + t * r.direction().y();
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return None;
        }

        let mut hit_rec = HitRecord::new(
            r.at(t),
            Vec3::default(),
            self.material.clone(),
            t,
            (x - self.x0) / (self.x1 - self.x0),
            (y - self.y0) / (self.y1 - self.y0),
            false,
        );

        let outward_normal = Vec3::new(0.0, 0.0, 1.0);
        hit_rec.set_face_normal(r, &outward_normal);

        Some(hit_rec)
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<AABB> {
        // Rectangles are infinitely thin along their plane's normal axis; a BVH needs every
        // bounding box to have non-zero width, so pad the Z dimension by a tiny amount.
        Some(AABB::new(
            Point::new(self.x0, self.y0, self.k - 0.0001),
            Point::new(self.x1, self.y1, self.k + 0.0001),
        ))
    }
}

impl XYRect {
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64, k: f64, material: Arc<dyn Material>) -> XYRect {
        XYRect {
            x0,
            x1,
            y0,
            y1,
            k,
            material,
        }
    }
}
