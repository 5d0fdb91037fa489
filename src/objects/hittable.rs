use crate::materials::Material;
use crate::objects::AABB;
use crate::ray::Ray;
use crate::vec3::{Point, Vec3};
use std::sync::Arc;

/// Details of a ray-object intersection: where it happened, the surface normal there, the
/// material to shade with, the ray parameter, texture coordinates, and which side of the
/// surface was struck.
#[derive(Clone)]
pub struct HitRecord {
    pub p: Point,
    pub normal: Vec3,
    pub mat: Arc<dyn Material>,
    pub t: f64,
    pub u: f64,
    pub v: f64,
    pub front_face: bool,
}

/// Anything a ray can intersect: primitives (`Sphere`, the axis-aligned rectangles), and
/// composites that wrap another `Hittable` (`BVHNode`, `Translate`, `RotateY`, `FlipNormals`,
/// `ConstantMedium`, `HittableList`).
pub trait Hittable: Send + Sync {
    /// Returns the closest hit with `t` in `(t_min, t_max)`, or `None`.
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord>;

    /// Returns the object's axis-aligned bounding box over the shutter interval
    /// `[time0, time1]`, or `None` if the object has no finite box (e.g. an infinite plane).
    /// A `None` here is fatal if the object is inserted into a `BVHNode`.
    fn bounding_box(&self, time0: f64, time1: f64) -> Option<AABB>;
}

impl HitRecord {
    pub fn new(
        p: Point,
        normal: Vec3,
        mat: Arc<dyn Material>,
        t: f64,
        u: f64,
        v: f64,
        front_face: bool,
    ) -> HitRecord {
        HitRecord {
            p,
            normal,
            mat,
            t,
            u,
            v,
            front_face,
        }
    }

    /// Surface normals are stored pointing against the incoming ray. `front_face` records
    /// whether the ray approached from outside (`outward_normal` already points against it) or
    /// from inside (in which case the stored normal is flipped).
    #[inline]
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: &Vec3) {
        self.front_face = r.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            *outward_normal
        } else {
            -outward_normal
        };
    }
}
