mod diffuse_light;

pub use diffuse_light::{DiffuseLight, Options};
