mod point_cloud;

pub use point_cloud::{PointCloud, PointCloudFeatures};

pub type Point3 = parry3d_f64::na::Point3<f64>;
