use crate::objects::{HitRecord, Hittable, AABB};
use crate::{Ray, Vec3};
use std::sync::Arc;

/// An instance transform: rather than moving the wrapped object, the ray is moved by `-offset`
/// before testing, and any resulting hit point is moved back by `+offset`.
pub struct Translate {
    obj: Arc<dyn Hittable>,
    offset: Vec3,
}

impl Translate {
    pub fn new(obj: Arc<dyn Hittable>, offset: Vec3) -> Translate {
        Translate { obj, offset }
    }
}

impl Hittable for Translate {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let moved_ray = Ray::new_with_time(&(r.origin() - self.offset), &r.direction(), r.time());

        self.obj.hit(&moved_ray, t_min, t_max).map(|mut hit_rec| {
            hit_rec.p = hit_rec.p + self.offset;
            let normal = hit_rec.normal;
            hit_rec.set_face_normal(&moved_ray, &normal);
            hit_rec
        })
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Option<AABB> {
        self.obj
            .bounding_box(time0, time1)
            .map(|bbox| AABB::new(bbox.min() + self.offset, bbox.max() + self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::LambertianMaterial;
    use crate::objects::Sphere;
    use crate::vec3::{Color, Point};

    #[test]
    fn translated_hit_point_shifts_by_offset() {
        let mat = Arc::new(LambertianMaterial::new(Color::new(0.5, 0.5, 0.5)));
        let sphere = Arc::new(Sphere::new(Point::new(0.0, 0.0, 0.0), 1.0, mat));
        let offset = Vec3::new(5.0, 0.0, 0.0);
        let translated = Translate::new(sphere, offset);

        let r = Ray::new(&Point::new(5.0, 0.0, -10.0), &Vec3::new(0.0, 0.0, 1.0));
        let hit_rec = translated.hit(&r, 0.001, f64::INFINITY).unwrap();
        assert!((hit_rec.p.z() - (-1.0)).abs() < 1e-9);
        assert!((hit_rec.p.x() - 5.0).abs() < 1e-9);
    }
}
