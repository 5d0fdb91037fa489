use crate::error::RenderError;
use crate::materials::LambertianMaterial;
use crate::objects::{Sphere, World};
use crate::textures::{CheckerTexture, ImageTexture, PerlinNoiseTexture, SolidColor};
use crate::{Background, Camera, Color, Point, Scene, Vec3};
use std::sync::Arc;

fn orbit_camera(aspect_ratio: f64, vfov: f64) -> Camera {
    Camera::new(
        Point::new(13.0, 2.0, 3.0),
        Point::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        vfov,
        aspect_ratio,
        0.0,
        10.0,
        0.0,
        1.0,
    )
}

/// Two huge spheres, tangent at the origin, share one checker texture - at this scale the
/// pattern reads as a tiled floor/ceiling rather than a small grid.
pub fn two_checkered_spheres(aspect_ratio: f64) -> Scene {
    let checker = Arc::new(CheckerTexture::new(
        Arc::new(SolidColor::new(Color::new(0.2, 0.3, 0.1))),
        Arc::new(SolidColor::new(Color::new(0.9, 0.9, 0.9))),
    ));

    let mut world = World::new();
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -10.0, 0.0),
        10.0,
        Arc::new(LambertianMaterial::new_with_texture(checker.clone())),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 10.0, 0.0),
        10.0,
        Arc::new(LambertianMaterial::new_with_texture(checker)),
    )));

    Scene::new(world, orbit_camera(aspect_ratio, 40.0), Background::SkyGradient)
}

/// A ground plane and a floating sphere, both driven by the same raw (untextured) Perlin noise
/// field.
pub fn perlin_spheres(aspect_ratio: f64) -> Scene {
    let pertext = Arc::new(PerlinNoiseTexture::new(4.0, false));

    let mut world = World::new();
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(LambertianMaterial::new_with_texture(pertext.clone())),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(LambertianMaterial::new_with_texture(pertext)),
    )));

    Scene::new(world, orbit_camera(aspect_ratio, 20.0), Background::SkyGradient)
}

/// `perlin_spheres` with turbulence enabled: the noise perturbs a sine wave's phase instead of
/// driving color directly, giving the marbled-veins look.
pub fn marble_spheres(aspect_ratio: f64) -> Scene {
    let pertext = Arc::new(PerlinNoiseTexture::new(4.0, true));

    let mut world = World::new();
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(LambertianMaterial::new_with_texture(pertext.clone())),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(LambertianMaterial::new_with_texture(pertext)),
    )));

    Scene::new(world, orbit_camera(aspect_ratio, 20.0), Background::SkyGradient)
}

/// A single sphere textured with a decoded Earth image, viewed as a globe.
pub fn earth(aspect_ratio: f64) -> Result<Scene, RenderError> {
    let earth_texture = Arc::new(ImageTexture::load("demos/assets/earthmap.png")?);
    let earth_surface = Arc::new(LambertianMaterial::new_with_texture(earth_texture));

    let mut world = World::new();
    world.add(Arc::new(Sphere::new(
        Point::new(0.0, 0.0, 0.0),
        2.0,
        earth_surface,
    )));

    Ok(Scene::new(world, orbit_camera(aspect_ratio, 20.0), Background::SkyGradient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perlin_spheres_has_ground_and_sphere() {
        let scene = perlin_spheres(16.0 / 9.0);
        assert_eq!(scene.world.len(), 2);
    }

    #[test]
    fn two_checkered_spheres_share_one_texture_instance() {
        let scene = two_checkered_spheres(16.0 / 9.0);
        assert_eq!(scene.world.len(), 2);
    }
}
