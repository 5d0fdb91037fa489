use thiserror::Error;

/// Errors surfaced across scene construction, configuration loading and rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("hittable has no bounding box and cannot be inserted into a BVH")]
    MissingBoundingBox,

    #[error("failed to load asset {path}: {source}")]
    AssetLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("invalid shutter interval [{time0}, {time1}]: times must be non-negative and time1 >= time0")]
    InvalidShutterInterval { time0: f64, time1: f64 },
}
