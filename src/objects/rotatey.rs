use crate::objects::{HitRecord, Hittable, AABB};
use crate::rtweekend::{degrees_to_radians, INFINITY};
use crate::{Point, Ray, Vec3};
use std::sync::Arc;

/// Rotation about the Y axis by `angle_degrees`, counter-clockwise when looking down the axis
/// from +Y. Implemented the same way as `Translate`: the incoming ray is rotated by `-theta`
/// into the wrapped object's frame, and the resulting hit point and normal are rotated back by
/// `+theta`.
pub struct RotateY {
    sin_theta: f64,
    cos_theta: f64,
    bbox: Option<AABB>,
    obj: Arc<dyn Hittable>,
}

impl Hittable for RotateY {
    fn hit(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let mut origin = r.origin();
        let mut direction = r.direction();

        origin[0] = self.cos_theta * r.origin().x() - self.sin_theta * r.origin().z();
        origin[2] = self.sin_theta * r.origin().x() + self.cos_theta * r.origin().z();

        direction[0] = self.cos_theta * r.direction().x() - self.sin_theta * r.direction().z();
        direction[2] = self.sin_theta * r.direction().x() + self.cos_theta * r.direction().z();

        let rotated_ray = Ray::new_with_time(&origin, &direction, r.time());

        self.obj.hit(&rotated_ray, t_min, t_max).map(|mut hit_rec| {
            let mut p = hit_rec.p;
            let mut normal = hit_rec.normal;

            p[0] = self.cos_theta * hit_rec.p.x() + self.sin_theta * hit_rec.p.z();
            p[2] = -self.sin_theta * hit_rec.p.x() + self.cos_theta * hit_rec.p.z();

            normal[0] = self.cos_theta * hit_rec.normal.x() + self.sin_theta * hit_rec.normal.z();
            normal[2] = -self.sin_theta * hit_rec.normal.x() + self.cos_theta * hit_rec.normal.z();

            hit_rec.p = p;
            hit_rec.set_face_normal(&rotated_ray, &normal);

            hit_rec
        })
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<AABB> {
        self.bbox
    }
}

impl RotateY {
    pub fn new(obj: Arc<dyn Hittable>, angle_degrees: f64) -> RotateY {
        let radians = degrees_to_radians(angle_degrees);
        let sin_theta = radians.sin();
        let cos_theta = radians.cos();

        let bbox = obj.bounding_box(0.0, 1.0).map(|obj_box| {
            let mut min = Point::new(INFINITY, INFINITY, INFINITY);
            let mut max = Point::new(-INFINITY, -INFINITY, -INFINITY);

            for i in 0..2 {
                for j in 0..2 {
                    for k in 0..2 {
                        let ii = i as f64;
                        let jj = j as f64;
                        let kk = k as f64;

                        let x = ii * obj_box.max().x() + (1.0 - ii) * obj_box.min().x();
                        let y = jj * obj_box.max().y() + (1.0 - jj) * obj_box.min().y();
                        let z = kk * obj_box.max().z() + (1.0 - kk) * obj_box.min().z();

                        let newx = cos_theta * x + sin_theta * z;
                        let newz = -sin_theta * x + cos_theta * z;

                        let tester = Vec3::new(newx, y, newz);

                        for l in 0..3 {
                            min[l] = min[l].min(tester[l]);
                            max[l] = max[l].max(tester[l]);
                        }
                    }
                }
            }

            AABB::new(min, max)
        });

        RotateY {
            cos_theta,
            sin_theta,
            bbox,
            obj,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::LambertianMaterial;
    use crate::objects::Box as RectBox;
    use crate::vec3::Color;

    #[test]
    fn bounding_box_contains_rotated_corners() {
        let mat = Arc::new(LambertianMaterial::new(Color::new(0.5, 0.5, 0.5)));
        let cube = Arc::new(RectBox::new(
            Point::new(-1.0, -1.0, -1.0),
            Point::new(1.0, 1.0, 1.0),
            mat,
        ));
        let inner_box = cube.bounding_box(0.0, 1.0).unwrap();
        let rotated = RotateY::new(cube, 45.0);
        let rbox = rotated.bounding_box(0.0, 1.0).unwrap();

        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let x = if i == 0 { inner_box.min().x() } else { inner_box.max().x() };
                    let y = if j == 0 { inner_box.min().y() } else { inner_box.max().y() };
                    let z = if k == 0 { inner_box.min().z() } else { inner_box.max().z() };

                    let theta = degrees_to_radians(45.0);
                    let rx = theta.cos() * x + theta.sin() * z;
                    let rz = -theta.sin() * x + theta.cos() * z;

                    assert!(rx >= rbox.min().x() - 1e-9 && rx <= rbox.max().x() + 1e-9);
                    assert!(y >= rbox.min().y() - 1e-9 && y <= rbox.max().y() + 1e-9);
                    assert!(rz >= rbox.min().z() - 1e-9 && rz <= rbox.max().z() + 1e-9);
                }
            }
        }
    }
}
