mod bounding_box;
mod boxobject;
mod flip_normals;
mod hittable;
mod hittablelist;
mod rotatey;
mod sphere;
mod translate;
mod xyrect;
mod xzrect;
mod yzrect;

pub use bounding_box::{BVHNode, AABB};
pub use hittable::*;
pub use sphere::*;
//Export HittableList as world, since it is just a collection of hittable objects.
pub use boxobject::Box;
pub use flip_normals::FlipNormals;
pub use hittablelist::HittableList as World;
pub use rotatey::RotateY;
pub use translate::Translate;
pub use xyrect::XYRect;
pub use xzrect::XZRect;
pub use yzrect::YZRect;
pub mod volumes;
