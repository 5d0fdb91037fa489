use crate::objects::{HitRecord, Hittable, AABB};
use crate::ray::Ray;
use std::sync::Arc;
use std::vec::Vec;

/// A flat, unordered collection of hittables, itself `Hittable`. Used both as the top-level
/// scene container and as the building block `BVHNode` is constructed from.
#[derive(Clone, Default)]
pub struct HittableList {
    pub(in crate::objects) objects: Vec<Arc<dyn Hittable>>,
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let mut closest_so_far = t_max;
        let mut result = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, t_min, closest_so_far) {
                closest_so_far = rec.t;
                result = Some(rec);
            }
        }

        result
    }

    fn bounding_box(&self, time0: f64, time1: f64) -> Option<AABB> {
        if self.objects.is_empty() {
            return None;
        }

        let mut result: Option<AABB> = None;

        for object in &self.objects {
            let bbox = object.bounding_box(time0, time1)?;
            result = Some(match result {
                None => bbox,
                Some(acc) => AABB::surrounding_box(&acc, &bbox),
            });
        }

        result
    }
}

impl HittableList {
    pub fn new() -> HittableList {
        HittableList { objects: vec![] }
    }

    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn into_objects(self) -> Vec<Arc<dyn Hittable>> {
        self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::LambertianMaterial;
    use crate::objects::Sphere;
    use crate::vec3::{Color, Point};

    #[test]
    fn empty_list_has_no_bounding_box() {
        let list = HittableList::new();
        assert!(list.bounding_box(0.0, 1.0).is_none());
    }

    #[test]
    fn bounding_box_encloses_every_member() {
        let mut list = HittableList::new();
        let mat = Arc::new(LambertianMaterial::new(Color::new(0.5, 0.5, 0.5)));
        list.add(Arc::new(Sphere::new(Point::new(-5.0, 0.0, 0.0), 1.0, mat.clone())));
        list.add(Arc::new(Sphere::new(Point::new(5.0, 0.0, 0.0), 1.0, mat)));

        let bbox = list.bounding_box(0.0, 1.0).unwrap();
        assert!(bbox.min().x() <= -6.0);
        assert!(bbox.max().x() >= 6.0);
    }
}
