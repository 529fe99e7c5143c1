//! Reading and writing point clouds

mod point_cloud;

pub use point_cloud::{load_xyz, read_xyz, save_xyz, write_xyz};
