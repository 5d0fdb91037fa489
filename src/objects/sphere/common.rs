use crate::materials::Material;
use crate::objects::HitRecord;
use crate::ray::Ray;
use crate::rtweekend::PI;
use crate::vec3::Point;
use std::sync::Arc;

/// Maps a point on the unit sphere to texture coordinates. `u` wraps around the Y axis starting
/// from -X and going through -Z, `v` runs from the south pole (`y = -1`) to the north pole
/// (`y = 1`). Deliberately `atan2`/`asin` rather than the `acos`-based derivation some textbooks
/// use: swapping conventions halfway through a texture mapping mirrors it.
#[inline]
pub(in crate::objects::sphere) fn get_sphere_uv(p: &Point) -> (f64, f64) {
    let u = 1.0 - (p.z().atan2(p.x()) + PI) / (2.0 * PI);
    let v = (p.y().asin() + PI / 2.0) / PI;

    (u, v)
}

/// Ray-sphere intersection shared by `Sphere` and `MovingSphere`. `center_at` resolves the
/// sphere's center at the ray's time, which lets a stationary sphere pass a constant closure and
/// a moving one interpolate.
pub(in crate::objects::sphere) fn hit(
    r: &Ray,
    t_min: f64,
    t_max: f64,
    center_at: &dyn Fn(f64) -> Point,
    radius: f64,
    material: &Arc<dyn Material>,
) -> Option<HitRecord> {
    let center = center_at(r.time());
    let oc = r.origin() - center;
    let a = r.direction().length_squared();
    let half_b = oc.dot(&r.direction());
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();

    let mut root = (-half_b - sqrtd) / a;
    if root < t_min || root > t_max {
        root = (-half_b + sqrtd) / a;
        if root < t_min || root > t_max {
            return None;
        }
    }

    let p = r.at(root);
    let outward_normal = (p - center) / radius;
    let (u, v) = get_sphere_uv(&outward_normal);

    let mut hit_rec = HitRecord::new(p, outward_normal, material.clone(), root, u, v, false);
    hit_rec.set_face_normal(r, &outward_normal);

    Some(hit_rec)
}
