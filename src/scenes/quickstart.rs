use crate::materials::{Dielectric, LambertianMaterial, Metal};
use crate::objects::{Sphere, World};
use crate::rtweekend::PI;
use crate::{Background, Camera, Color, Point, Scene, Vec3};
use std::sync::Arc;

/// The book's opening scene: a matte ground, a matte center sphere, a hollow glass sphere and a
/// polished metal sphere, viewed head-on.
pub fn two_spheres(aspect_ratio: f64) -> Scene {
    let mut world = World::new();
    let material_ground = Arc::new(LambertianMaterial::new(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(LambertianMaterial::new(Color::new(0.1, 0.2, 0.5)));
    let material_left = Arc::new(Dielectric::new(1.5));
    let material_right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -100.5, -1.0),
        100.0,
        material_ground,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 0.0, -1.0),
        0.5,
        material_center,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        0.5,
        material_left,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(1.0, 0.0, -1.0),
        0.5,
        material_right,
    )));

    let camera = Camera::new(
        Point::new(-2.0, 2.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.0,
        1.0,
        0.0,
        0.0,
    );

    Scene::new(world, camera, Background::SkyGradient)
}

/// A negative radius leaves the geometry unchanged but turns the surface normal inward, turning
/// the left sphere into a hollow glass bubble.
pub fn hollow_glass_sphere(aspect_ratio: f64) -> Scene {
    let mut world = World::new();
    let material_ground = Arc::new(LambertianMaterial::new(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(LambertianMaterial::new(Color::new(0.1, 0.2, 0.5)));
    let material_left = Arc::new(Dielectric::new(1.5));
    let material_right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -100.5, -1.0),
        100.0,
        material_ground,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 0.0, -1.0),
        0.5,
        material_center,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        0.5,
        material_left.clone(),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        -0.4,
        material_left,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(1.0, 0.0, -1.0),
        0.5,
        material_right,
    )));

    let camera = Camera::new(
        Point::new(-2.0, 2.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.0,
        1.0,
        0.0,
        0.0,
    );

    Scene::new(world, camera, Background::SkyGradient)
}

/// Two tangent spheres seen through a 90-degree vertical field of view, wide enough that the
/// horizon curves visibly toward the frame edges.
pub fn wide_angle_camera(aspect_ratio: f64) -> Scene {
    let r = (PI / 4.0).cos();
    let mut world = World::new();

    let material_left = Arc::new(LambertianMaterial::new(Color::new(0.0, 0.0, 1.0)));
    let material_right = Arc::new(LambertianMaterial::new(Color::new(1.0, 0.0, 0.0)));

    world.add(Arc::new(Sphere::new(
        Point::new(-r, 0.0, -1.0),
        r,
        material_left,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(r, 0.0, -1.0),
        r,
        material_right,
    )));

    let camera = Camera::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        90.0,
        aspect_ratio,
        0.0,
        1.0,
        0.0,
        0.0,
    );

    Scene::new(world, camera, Background::SkyGradient)
}

/// `two_spheres`'s geometry, viewed from a pulled-back, zoomed-in vantage rather than head-on.
pub fn alternate_viewpoint(aspect_ratio: f64) -> Scene {
    let mut world = World::new();

    let material_ground = Arc::new(LambertianMaterial::new(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(LambertianMaterial::new(Color::new(0.1, 0.2, 0.5)));
    let material_left = Arc::new(Dielectric::new(1.5));
    let material_right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -100.5, -1.0),
        100.0,
        material_ground,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 0.0, -1.0),
        0.5,
        material_center,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        0.5,
        material_left.clone(),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        -0.45,
        material_left,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(1.0, 0.0, -1.0),
        0.5,
        material_right,
    )));

    let camera = Camera::new(
        Point::new(-2.0, 2.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.0,
        1.0,
        0.0,
        0.0,
    );

    Scene::new(world, camera, Background::SkyGradient)
}

/// Same geometry again, this time with a wide aperture and the focus plane set exactly at
/// `lookat`, so everything off that plane blurs.
pub fn depth_of_field(aspect_ratio: f64) -> Scene {
    let mut world = World::new();

    let material_ground = Arc::new(LambertianMaterial::new(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(LambertianMaterial::new(Color::new(0.1, 0.2, 0.5)));
    let material_left = Arc::new(Dielectric::new(1.5));
    let material_right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -100.5, -1.0),
        100.0,
        material_ground,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 0.0, -1.0),
        0.5,
        material_center,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        0.5,
        material_left.clone(),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-1.0, 0.0, -1.0),
        -0.45,
        material_left,
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(1.0, 0.0, -1.0),
        0.5,
        material_right,
    )));

    let lookfrom = Point::new(3.0, 3.0, 2.0);
    let lookat = Point::new(0.0, 0.0, -1.0);
    let dist_to_focus = (lookfrom - lookat).length();
    let aperture = 2.0;

    let camera = Camera::new(
        lookfrom,
        lookat,
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        aperture,
        dist_to_focus,
        0.0,
        0.0,
    );

    Scene::new(world, camera, Background::SkyGradient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_spheres_has_four_objects() {
        let scene = two_spheres(16.0 / 9.0);
        assert_eq!(scene.world.len(), 4);
    }

    #[test]
    fn hollow_glass_sphere_adds_the_inner_bubble() {
        let scene = hollow_glass_sphere(16.0 / 9.0);
        assert_eq!(scene.world.len(), 5);
    }
}
