use crate::ray::Ray;
use crate::rtweekend::degrees_to_radians;
use crate::vec3::{Point, Vec3};

/// # Camera Viewing Geometry
///
/// A thin-lens camera: rays originate from a random point on a disk of radius `aperture / 2`
/// centered at `look_from`, all converging through the same point on the focus plane at
/// `focus_dist`. A zero aperture collapses the disk to a point and the camera behaves like a
/// pinhole. Each ray also carries a random `time` in `[time0, time1]`, which lets `MovingSphere`
/// simulate a shutter open for that interval.
#[derive(Clone)]
pub struct Camera {
    origin: Point,
    lower_left_corner: Point,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
    time0: f64,
    time1: f64,
}

impl Camera {
    /// * `vfov`: vertical field of view, in degrees.
    /// * `aperture`: lens diameter; `0.0` disables defocus blur.
    /// * `focus_dist`: distance from `look_from` to the plane that is in perfect focus.
    /// * `time0`/`time1`: shutter interval each sampled ray's `time` is drawn from.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Point,
        look_at: Point,
        v_up: Vec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
        time0: f64,
        time1: f64,
    ) -> Camera {
        let theta = degrees_to_radians(vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (look_from - look_at).unit_vector();
        let u = v_up.cross(&w).unit_vector();
        let v = w.cross(&u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
            time0,
            time1,
        }
    }

    /// `s`/`t` are normalized viewport coordinates in `[0,1]`.
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        let rd = self.lens_radius * Vec3::random_in_unit_disk();
        let offset = self.u * rd.x() + self.v * rd.y();

        Ray::new_with_time(
            &(self.origin + offset),
            &(self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset),
            crate::rtweekend::random(self.time0, self.time1),
        )
    }
}
