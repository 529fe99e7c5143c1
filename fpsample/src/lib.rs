//! Farthest point sampling for three-dimensional point clouds. A dense cloud is reduced to a
//! fixed number of representative points by repeatedly selecting the point which lies farthest
//! from everything selected so far.

pub mod common;
mod errors;
pub mod geom3;
pub mod io;
pub mod sampling;

use std::error::Error;

pub use errors::{ErrorKind, SampleError};
pub use geom3::{Point3, PointCloud, PointCloudFeatures};
pub use sampling::{
    DEFAULT_PARALLEL_THRESHOLD, DistanceField, FarthestPointSampler, SamplerOptions, SelectedSet,
    sample_farthest_points, sample_farthest_points_with, sample_farthest_points_with_rng,
};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;
