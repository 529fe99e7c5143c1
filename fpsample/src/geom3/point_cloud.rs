use crate::sampling::{SelectedSet, sample_farthest_points};
use crate::{Point3, Result, SampleError};
use parry3d_f64::bounding_volume::Aabb;

pub trait PointCloudFeatures {
    fn points(&self) -> &[Point3];

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    fn len(&self) -> usize {
        self.points().len()
    }

    fn aabb(&self) -> Aabb {
        Aabb::from_points(self.points())
    }

    fn create_from_indices(&self, indices: &[usize]) -> Result<PointCloud> {
        // Verify that all indices are valid
        if indices.iter().any(|&i| i >= self.len()) {
            return Err("Index out of bounds".into());
        }

        let points = self.points();
        Ok(PointCloud::new(indices.iter().map(|i| points[*i]).collect()))
    }

    /// Reduce the cloud to `k` points with farthest point sampling. If `seed_index` is `None`
    /// the first point is drawn at random from the thread-local generator.
    ///
    /// # Arguments
    ///
    /// * `k`: the number of points to select, between 1 and the number of points in the cloud
    /// * `seed_index`: the index of the first point to select
    ///
    /// returns: Result<SelectedSet, SampleError>
    ///
    /// # Examples
    ///
    /// ```
    /// use fpsample::{Point3, PointCloud, PointCloudFeatures};
    /// let cloud = PointCloud::new(vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 0.0, 0.0),
    ///     Point3::new(5.0, 0.0, 0.0),
    /// ]);
    /// let selected = cloud.sample_farthest(2, Some(0)).unwrap();
    /// assert_eq!(selected.indices(), &[0, 1]);
    /// ```
    fn sample_farthest(
        &self,
        k: usize,
        seed_index: Option<usize>,
    ) -> std::result::Result<SelectedSet, SampleError> {
        sample_farthest_points(self.points(), k, seed_index)
    }
}

/// An ordered collection of points in three dimensions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl From<Vec<Point3>> for PointCloud {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

impl From<&[Point3]> for PointCloud {
    fn from(points: &[Point3]) -> Self {
        Self::new(points.to_vec())
    }
}

impl PointCloudFeatures for PointCloud {
    fn points(&self) -> &[Point3] {
        &self.points
    }
}
