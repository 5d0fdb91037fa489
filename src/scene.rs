use crate::objects::World;
use crate::{Camera, Color, Ray};

/// The background radiance seen by a ray that escapes the scene without hitting anything. The
/// source's evolutionary scenes disagree on this: scenes built around `DiffuseLight` want total
/// darkness outside the light sources, while the earlier demonstration scenes (plain spheres,
/// dielectric studies, Perlin/earth spheres) rely on a sky gradient to read as a photograph at
/// all. Each scene builder picks one explicitly rather than the renderer guessing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    /// No ambient light; only emissive surfaces and their bounces contribute.
    Black,
    /// A vertical lerp from white at the horizon to a pale blue overhead, keyed on the ray's
    /// unit-length Y component.
    SkyGradient,
}

impl Background {
    pub fn sample(&self, ray: &Ray) -> Color {
        match self {
            Background::Black => Color::new(0.0, 0.0, 0.0),
            Background::SkyGradient => {
                let unit_direction = ray.direction().unit_vector();
                let t = 0.5 * (unit_direction.y() + 1.0);
                (1.0 - t) * Color::new(1.0, 1.0, 1.0) + t * Color::new(0.5, 0.7, 1.0)
            }
        }
    }
}

#[derive(Clone)]
pub struct Scene {
    pub(crate) world: World,
    pub(crate) camera: Camera,
    pub(crate) background: Background,
}

impl Scene {
    pub fn new(world: World, camera: Camera, background: Background) -> Scene {
        Scene {
            world,
            camera,
            background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_gradient_is_white_straight_up_and_blue_tinted_down() {
        let up = Ray::new(&crate::Point::new(0.0, 0.0, 0.0), &crate::Vec3::new(0.0, 1.0, 0.0));
        let down = Ray::new(&crate::Point::new(0.0, 0.0, 0.0), &crate::Vec3::new(0.0, -1.0, 0.0));

        assert_eq!(Background::SkyGradient.sample(&up), Color::new(0.5, 0.7, 1.0));
        assert_eq!(Background::SkyGradient.sample(&down), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn black_background_is_always_black() {
        let r = Ray::new(&crate::Point::new(0.0, 0.0, 0.0), &crate::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Background::Black.sample(&r), Color::new(0.0, 0.0, 0.0));
    }
}
