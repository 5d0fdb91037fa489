use crate::error::RenderError;
use crate::materials::{Dielectric, LambertianMaterial, Metal};
use crate::objects::{MovingSphere, Sphere, World};
use crate::rtweekend::{random, random_in_unit_interval};
use crate::textures::{CheckerTexture, SolidColor};
use crate::{Background, Camera, Color, Point, Scene, Vec3};
use std::sync::Arc;

fn final_camera(aspect_ratio: f64, time0: f64, time1: f64) -> Camera {
    Camera::new(
        Point::new(13.0, 2.0, 3.0),
        Point::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.1,
        10.0,
        time0,
        time1,
    )
}

/// Scatters ~500 small random spheres (diffuse/metal/glass by a weighted coin flip) around three
/// large feature spheres on a matte ground plane - the capstone scene of the first book.
pub fn final_scene(aspect_ratio: f64) -> Result<Scene, RenderError> {
    let mut world = World::new();

    let ground_material = Arc::new(LambertianMaterial::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_material = random_in_unit_interval();
            let center = Point::new(
                a as f64 + 0.9 * random_in_unit_interval(),
                0.2,
                b as f64 + 0.9 * random_in_unit_interval(),
            );

            if (center - Point::new(4.0, 0.2, 0.0)).length() > 0.9 {
                if choose_material < 0.8 {
                    let albedo = Color::random_unit_vector() * Color::random_unit_vector();
                    let sphere_material = Arc::new(LambertianMaterial::new(albedo));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                } else if choose_material < 0.95 {
                    let albedo = Color::random_vector(0.5, 1.0);
                    let fuzz = random(0.0, 0.5);
                    let sphere_material = Arc::new(Metal::new(albedo, fuzz));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                } else {
                    let sphere_material = Arc::new(Dielectric::new(1.5));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                }
            }
        }
    }

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(LambertianMaterial::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    Ok(Scene::new(world, final_camera(aspect_ratio, 0.0, 0.0), Background::SkyGradient))
}

/// `final_scene`, but every diffuse sphere drifts upward over the shutter interval, so a camera
/// with a nonzero `time1` renders motion blur on roughly 80% of the small spheres.
pub fn final_scene_with_moving_spheres(aspect_ratio: f64) -> Result<Scene, RenderError> {
    let mut world = World::new();

    let ground_material = Arc::new(LambertianMaterial::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_material = random_in_unit_interval();
            let center = Point::new(
                a as f64 + 0.9 * random_in_unit_interval(),
                0.2,
                b as f64 + 0.9 * random_in_unit_interval(),
            );

            if (center - Point::new(4.0, 0.2, 0.0)).length() > 0.9 {
                if choose_material < 0.8 {
                    let albedo = Color::random_unit_vector() * Color::random_unit_vector();
                    let sphere_material = Arc::new(LambertianMaterial::new(albedo));
                    let center2 = center + Vec3::new(0.0, random(0.0, 0.5), 0.0);
                    world.add(Arc::new(MovingSphere::new(
                        center,
                        center2,
                        0.2,
                        sphere_material,
                        0.0,
                        1.0,
                    )?));
                } else if choose_material < 0.95 {
                    let albedo = Color::random_vector(0.5, 1.0);
                    let fuzz = random(0.0, 0.5);
                    let sphere_material = Arc::new(Metal::new(albedo, fuzz));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                } else {
                    let sphere_material = Arc::new(Dielectric::new(1.5));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                }
            }
        }
    }

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(LambertianMaterial::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    Ok(Scene::new(world, final_camera(aspect_ratio, 0.0, 1.0), Background::SkyGradient))
}

/// `final_scene_with_moving_spheres`, with the ground plane replaced by a checkered texture
/// instead of flat gray.
pub fn final_scene_with_checkered_ground(aspect_ratio: f64) -> Result<Scene, RenderError> {
    let mut world = World::new();

    let checker = Arc::new(CheckerTexture::new(
        Arc::new(SolidColor::new(Color::new(0.2, 0.3, 0.1))),
        Arc::new(SolidColor::new(Color::new(0.9, 0.9, 0.9))),
    ));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(LambertianMaterial::new_with_texture(checker)),
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_material = random_in_unit_interval();
            let center = Point::new(
                a as f64 + 0.9 * random_in_unit_interval(),
                0.2,
                b as f64 + 0.9 * random_in_unit_interval(),
            );

            if (center - Point::new(4.0, 0.2, 0.0)).length() > 0.9 {
                if choose_material < 0.8 {
                    let albedo = Color::random_unit_vector() * Color::random_unit_vector();
                    let sphere_material = Arc::new(LambertianMaterial::new(albedo));
                    let center2 = center + Vec3::new(0.0, random(0.0, 0.5), 0.0);
                    world.add(Arc::new(MovingSphere::new(
                        center,
                        center2,
                        0.2,
                        sphere_material,
                        0.0,
                        1.0,
                    )?));
                } else if choose_material < 0.95 {
                    let albedo = Color::random_vector(0.5, 1.0);
                    let fuzz = random(0.0, 0.5);
                    let sphere_material = Arc::new(Metal::new(albedo, fuzz));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                } else {
                    let sphere_material = Arc::new(Dielectric::new(1.5));
                    world.add(Arc::new(Sphere::new(center, 0.2, sphere_material)));
                }
            }
        }
    }

    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(LambertianMaterial::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    Ok(Scene::new(world, final_camera(aspect_ratio, 0.0, 1.0), Background::SkyGradient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_scene_has_the_three_feature_spheres_plus_ground() {
        let scene = final_scene(16.0 / 9.0).unwrap();
        assert!(scene.world.len() >= 4);
    }
}
