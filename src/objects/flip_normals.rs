use crate::objects::{HitRecord, Hittable, AABB};
use crate::ray::Ray;
use std::sync::Arc;

/// Wraps a `Hittable` and reverses the front/back sense of every hit it reports. Used to turn an
/// axis-aligned rectangle's default outward normal around, e.g. for the inside-facing walls of a
/// box built from six rectangles.
pub struct FlipNormals {
    hittable: Arc<dyn Hittable>,
}

impl FlipNormals {
    pub fn new(hittable: Arc<dyn Hittable>) -> FlipNormals {
        FlipNormals { hittable }
    }
}

impl Hittable for FlipNormals {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        self.hittable.hit(r, t_min, t_max).map(|mut hit_rec| {
            hit_rec.front_face = !hit_rec.front_face;
            hit_rec.normal = -hit_rec.normal;
            hit_rec
        })
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Option<AABB> {
        self.hittable.bounding_box(time0, time1)
    }
}
