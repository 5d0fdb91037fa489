use crate::error::RenderError;
use crate::objects::{HitRecord, Hittable};
use crate::ray::Ray;
use crate::rtweekend::random_int;
use crate::Point;
use std::cmp::Ordering;
use std::sync::Arc;

/// An axis-aligned bounding box: the Cartesian product of three intervals, one per axis.
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    minimum: Point,
    maximum: Point,
}

impl AABB {
    pub fn new(minimum: Point, maximum: Point) -> AABB {
        AABB { minimum, maximum }
    }

    pub fn min(&self) -> Point {
        self.minimum
    }

    pub fn max(&self) -> Point {
        self.maximum
    }

    /// Slab test: the ray hits the box iff, on every axis, the interval of `t` for which the ray
    /// is inside that axis's slab overlaps the intervals from the other two axes and `[t_min,
    /// t_max]`. Dividing by a direction component of zero produces `+-inf`, which still compares
    /// correctly, so axis-aligned rays need no special case.
    pub fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> bool {
        let mut t_min = t_min;
        let mut t_max = t_max;

        for a in 0..3 {
            let inv_d = 1.0 / r.direction()[a];
            let mut t0 = (self.minimum[a] - r.origin()[a]) * inv_d;
            let mut t1 = (self.maximum[a] - r.origin()[a]) * inv_d;

            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t0.max(t_min);
            t_max = t1.min(t_max);

            if t_max <= t_min {
                return false;
            }
        }

        true
    }

    /// The smallest box containing both `box0` and `box1`.
    pub fn surrounding_box(box0: &AABB, box1: &AABB) -> AABB {
        let small = Point::new(
            box0.min().x().min(box1.min().x()),
            box0.min().y().min(box1.min().y()),
            box0.min().z().min(box1.min().z()),
        );

        let big = Point::new(
            box0.max().x().max(box1.max().x()),
            box0.max().y().max(box1.max().y()),
            box0.max().z().max(box1.max().z()),
        );

        AABB::new(small, big)
    }
}

/// # Bounding Volume Hierarchies
/// A binary tree over a flat list of hittables, built by repeatedly splitting the list along a
/// randomly chosen axis. Traversal prunes an entire subtree as soon as a ray misses its box,
/// turning an O(n) linear scan into an expected O(log n) search.
pub struct BVHNode {
    left: Arc<dyn Hittable>,
    right: Arc<dyn Hittable>,
    bbox: AABB,
}

impl Hittable for BVHNode {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        if !self.bbox.hit(r, t_min, t_max) {
            return None;
        }

        let left = self.left.hit(r, t_min, t_max);
        let closest = left.as_ref().map_or(t_max, |hit| hit.t);
        let right = self.right.hit(r, t_min, closest);

        right.or(left)
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<AABB> {
        Some(self.bbox)
    }
}

impl BVHNode {
    /// As long as the incoming list gets divided into two sub-lists, `hit` works regardless of
    /// how good the split is; a single-element list is duplicated into both children so traversal
    /// never needs a null check.
    pub fn new(
        src_objects: &mut Vec<Arc<dyn Hittable>>,
        time0: f64,
        time1: f64,
    ) -> Result<BVHNode, RenderError> {
        let len = src_objects.len();
        Self::new_helper(src_objects, 0, len, time0, time1)
    }

    fn new_helper(
        src_objects: &mut [Arc<dyn Hittable>],
        start: usize,
        end: usize,
        time0: f64,
        time1: f64,
    ) -> Result<BVHNode, RenderError> {
        let axis = random_int(0, 2) as usize;

        let object_span = end - start;

        let (left, right): (Arc<dyn Hittable>, Arc<dyn Hittable>) = if object_span == 1 {
            (src_objects[start].clone(), src_objects[start].clone())
        } else if object_span == 2 {
            if Self::box_compare(&src_objects[start], &src_objects[start + 1], axis, time0, time1)?
                == Ordering::Less
            {
                (
                    src_objects[start].clone(),
                    src_objects[start + 1].clone(),
                )
            } else {
                (
                    src_objects[start + 1].clone(),
                    src_objects[start].clone(),
                )
            }
        } else {
            let mut sort_err = None;
            src_objects[start..end].sort_by(|a, b| {
                match Self::box_compare(a, b, axis, time0, time1) {
                    Ok(ordering) => ordering,
                    Err(e) => {
                        sort_err.get_or_insert(e);
                        Ordering::Equal
                    }
                }
            });
            if let Some(e) = sort_err {
                return Err(e);
            }
            let mid = start + object_span / 2;

            let left: Arc<dyn Hittable> =
                Arc::new(Self::new_helper(src_objects, start, mid, time0, time1)?);
            let right: Arc<dyn Hittable> =
                Arc::new(Self::new_helper(src_objects, mid, end, time0, time1)?);

            (left, right)
        };

        let lbox = left.bounding_box(time0, time1);
        let rbox = right.bounding_box(time0, time1);

        let bbox = match (lbox, rbox) {
            (Some(lb), Some(rb)) => AABB::surrounding_box(&lb, &rb),
            _ => return Err(RenderError::MissingBoundingBox),
        };

        Ok(BVHNode { left, right, bbox })
    }

    #[inline]
    fn box_compare(
        a: &Arc<dyn Hittable>,
        b: &Arc<dyn Hittable>,
        axis: usize,
        time0: f64,
        time1: f64,
    ) -> Result<Ordering, RenderError> {
        let a_box = a
            .bounding_box(time0, time1)
            .ok_or(RenderError::MissingBoundingBox)?;
        let b_box = b
            .bounding_box(time0, time1)
            .ok_or(RenderError::MissingBoundingBox)?;

        Ok(a_box.min()[axis]
            .partial_cmp(&b_box.min()[axis])
            .unwrap_or(Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Vec3;

    fn ray_along_x(y: f64, z: f64) -> Ray {
        Ray::new(&Point::new(-10.0, y, z), &Vec3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn nested_box_hit_implies_outer_box_hit() {
        let inner = AABB::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
        let outer = AABB::new(Point::new(-5.0, -5.0, -5.0), Point::new(5.0, 5.0, 5.0));

        let r = ray_along_x(0.0, 0.0);
        assert!(inner.hit(&r, 0.001, f64::INFINITY));
        assert!(outer.hit(&r, 0.001, f64::INFINITY));
    }

    #[test]
    fn miss_is_miss_regardless_of_direction_sign() {
        let bbox = AABB::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
        let miss = Ray::new(&Point::new(-10.0, 5.0, 5.0), &Vec3::new(1.0, 0.0, 0.0));
        let miss_reversed = Ray::new(&Point::new(-10.0, 5.0, 5.0), &Vec3::new(-1.0, 0.0, 0.0));

        assert!(!bbox.hit(&miss, 0.001, f64::INFINITY));
        assert!(!bbox.hit(&miss_reversed, 0.001, f64::INFINITY));
    }

    #[test]
    fn surrounding_box_contains_both_inputs() {
        let a = AABB::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
        let b = AABB::new(Point::new(-1.0, 2.0, 0.5), Point::new(0.5, 3.0, 4.0));
        let s = AABB::surrounding_box(&a, &b);

        assert_eq!(s.min(), Point::new(-1.0, 0.0, 0.0));
        assert_eq!(s.max(), Point::new(1.0, 3.0, 4.0));
    }

    /// A BVH is purely a traversal-order optimization: querying it must agree with a linear
    /// scan of the same primitives for every ray, hit or miss.
    #[test]
    fn bvh_hit_agrees_with_linear_scan_of_same_spheres() {
        use crate::materials::LambertianMaterial;
        use crate::objects::{Hittable, Sphere, World};
        use crate::rtweekend::{random, seed_rng};
        use crate::Color;

        seed_rng(42);
        let material = Arc::new(LambertianMaterial::new(Color::new(0.5, 0.5, 0.5)));

        let mut list_objects: Vec<Arc<dyn Hittable>> = Vec::new();
        for _ in 0..100 {
            let center = Point::new(
                random(-50.0, 50.0),
                random(-50.0, 50.0),
                random(-50.0, 50.0),
            );
            let radius = random(0.2, 2.0);
            list_objects.push(Arc::new(Sphere::new(center, radius, material.clone())));
        }

        let mut world = World::new();
        for object in &list_objects {
            world.add(object.clone());
        }

        let mut bvh_source = list_objects.clone();
        let bvh = BVHNode::new(&mut bvh_source, 0.0, 1.0).expect("every sphere has a bounding box");

        for _ in 0..200 {
            let origin = Point::new(
                random(-100.0, 100.0),
                random(-100.0, 100.0),
                random(-100.0, 100.0),
            );
            let direction = Point::new(
                random(-1.0, 1.0),
                random(-1.0, 1.0),
                random(-1.0, 1.0),
            );
            let r = Ray::new(&origin, &direction);

            let list_hit = world.hit(&r, 0.001, f64::INFINITY).map(|h| h.t);
            let bvh_hit = bvh.hit(&r, 0.001, f64::INFINITY).map(|h| h.t);

            assert_eq!(list_hit, bvh_hit);
        }
    }
}
