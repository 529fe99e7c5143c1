//! Point selection strategies which reduce a cloud to a representative subset.

mod farthest;

pub use farthest::{
    DEFAULT_PARALLEL_THRESHOLD, DistanceField, FarthestPointSampler, SamplerOptions, SelectedSet,
    sample_farthest_points, sample_farthest_points_with, sample_farthest_points_with_rng,
};
