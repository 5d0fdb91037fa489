use crate::error::RenderError;
use crate::materials::lights::DiffuseLight;
use crate::materials::{Dielectric, LambertianMaterial, Metal};
use crate::objects::volumes::ConstantMedium;
use crate::objects::{self, BVHNode, Hittable, MovingSphere, RotateY, Sphere, Translate, World, XZRect};
use crate::rtweekend::random;
use crate::textures::{ImageTexture, PerlinNoiseTexture};
use crate::{Background, Camera, Color, Point, Scene, Vec3};
use std::sync::Arc;

/// A Perlin-noise ground and floating sphere lit by both an emissive sphere and an emissive
/// rectangle hovering above - the book's introduction to `DiffuseLight`.
pub fn simple_light(aspect_ratio: f64) -> Scene {
    let mut world = World::new();

    let pertext = Arc::new(PerlinNoiseTexture::new(4.0, true));
    let lambertian = Arc::new(LambertianMaterial::new_with_texture(pertext));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -1000.0, 0.0),
        1000.0,
        lambertian.clone(),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 2.0, 0.0),
        2.0,
        lambertian,
    )));

    // Brighter than (1,1,1) so it's strong enough to light the rest of the scene.
    let difflight = Arc::new(DiffuseLight::new(Color::new(4.0, 4.0, 4.0)));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 7.0, 0.0),
        2.0,
        difflight.clone(),
    )));
    world.add(Arc::new(XZRect::new(3.0, 5.0, 1.0, 3.0, -2.0, difflight)));

    let camera = Camera::new(
        Point::new(26.0, 3.0, 6.0),
        Point::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.0,
        10.0,
        0.0,
        1.0,
    );

    Scene::new(world, camera, Background::Black)
}

const BOXES_PER_SIDE: i32 = 20;

fn ground_boxes() -> Result<BVHNode, RenderError> {
    let ground = Arc::new(LambertianMaterial::new(Color::new(0.48, 0.83, 0.53)));
    let w = 100.0;

    let mut boxes: Vec<Arc<dyn Hittable>> = Vec::new();
    for i in 0..BOXES_PER_SIDE {
        for j in 0..BOXES_PER_SIDE {
            let x0 = -1000.0 + (i as f64) * w;
            let z0 = -1000.0 + (j as f64) * w;
            let y0 = 0.0;
            let x1 = x0 + w;
            let y1 = random(1.0, 101.0);
            let z1 = z0 + w;

            boxes.push(Arc::new(objects::Box::new(
                Point::new(x0, y0, z0),
                Point::new(x1, y1, z1),
                ground.clone(),
            )));
        }
    }

    BVHNode::new(&mut boxes, 0.0, 1.0)
}

/// The demo scene that closes out the second book: a BVH of ~400 ground boxes, a moving diffuse
/// sphere, a dielectric sphere with a blue-tinted subsurface-style fog trapped inside it, a giant
/// dielectric sphere filled with thin white fog to tint the whole scene, an Earth-textured
/// sphere, a marbled Perlin sphere, and 1000 tiny white spheres packed into their own BVH,
/// rotated and translated into a corner of the box.
pub fn final_scene(aspect_ratio: f64) -> Result<Scene, RenderError> {
    let mut world = World::new();
    world.add(Arc::new(ground_boxes()?));

    let light = Arc::new(DiffuseLight::new(Color::new(7.0, 7.0, 7.0)));
    world.add(Arc::new(XZRect::new(
        123.0, 423.0, 147.0, 412.0, 554.0, light,
    )));

    let center1 = Point::new(400.0, 400.0, 400.0);
    let center2 = center1 + Vec3::new(30.0, 0.0, 0.0);
    let moving_sphere_material = Arc::new(LambertianMaterial::new(Color::new(0.7, 0.3, 0.1)));
    world.add(Arc::new(MovingSphere::new(
        center1,
        center2,
        50.0,
        moving_sphere_material,
        0.0,
        1.0,
    )?));

    world.add(Arc::new(Sphere::new(
        Point::new(260.0, 150.0, 45.0),
        50.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 150.0, 145.0),
        50.0,
        Arc::new(Metal::new(Color::new(0.8, 0.8, 0.9), 1.0)),
    )));

    let boundary = Arc::new(Sphere::new(
        Point::new(360.0, 150.0, 145.0),
        70.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    world.add(boundary.clone());
    world.add(Arc::new(ConstantMedium::new_with_color(
        boundary,
        Color::new(0.2, 0.4, 0.9),
        0.2,
    )));

    let fog_boundary = Arc::new(Sphere::new(Point::new(0.0, 0.0, 0.0), 5000.0, Arc::new(Dielectric::new(1.5))));
    world.add(Arc::new(ConstantMedium::new_with_color(
        fog_boundary,
        Color::new(1.0, 1.0, 1.0),
        0.0001,
    )));

    let earth_texture = Arc::new(ImageTexture::load("demos/assets/earthmap.png")?);
    world.add(Arc::new(Sphere::new(
        Point::new(400.0, 200.0, 400.0),
        100.0,
        Arc::new(LambertianMaterial::new_with_texture(earth_texture)),
    )));

    let pertext = Arc::new(PerlinNoiseTexture::new(0.1, true));
    world.add(Arc::new(Sphere::new(
        Point::new(220.0, 280.0, 300.0),
        80.0,
        Arc::new(LambertianMaterial::new_with_texture(pertext)),
    )));

    // Unlike the teacher's flat `HittableList` here, 1000 small spheres sharing one bounding
    // region are worth their own inner BVH: without it this cluster degrades traversal to a
    // 1000-way linear scan on every ray that reaches this corner of the box.
    let white = Arc::new(LambertianMaterial::new(Color::new(0.73, 0.73, 0.73)));
    let mut small_spheres: Vec<Arc<dyn Hittable>> = Vec::with_capacity(1000);
    for _ in 0..1000 {
        small_spheres.push(Arc::new(Sphere::new(
            Point::random_vector(0.0, 165.0),
            10.0,
            white.clone(),
        )));
    }
    let small_spheres_bvh: Arc<dyn Hittable> = Arc::new(BVHNode::new(&mut small_spheres, 0.0, 1.0)?);

    world.add(Arc::new(Translate::new(
        Arc::new(RotateY::new(small_spheres_bvh, 15.0)),
        Vec3::new(-100.0, 270.0, 395.0),
    )));

    let camera = Camera::new(
        Point::new(478.0, 278.0, -600.0),
        Point::new(278.0, 278.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect_ratio,
        0.0,
        10.0,
        0.0,
        1.0,
    );

    Ok(Scene::new(world, camera, Background::Black))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_light_has_ground_sphere_and_two_lights() {
        let scene = simple_light(16.0 / 9.0);
        assert_eq!(scene.world.len(), 4);
    }

    #[test]
    fn ground_boxes_cover_the_full_grid() {
        let bvh = ground_boxes().unwrap();
        let bbox = bvh.bounding_box(0.0, 1.0).unwrap();
        assert!(bbox.min().x() <= -1000.0 + 1e-6);
        assert!(bbox.max().x() >= -1000.0 + (BOXES_PER_SIDE as f64) * 100.0 - 1e-6);
    }
}
