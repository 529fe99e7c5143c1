//! Farthest point sampling, a greedy maximin selection. Starting from a seed point, each step
//! selects the point whose distance to the nearest already selected point is largest. A running
//! distance field holds that nearest-selected distance for every point in the cloud, and each
//! new selection can only shrink it, so a step costs a single pass over the cloud.

use crate::common::IndexMask;
use crate::common::points::{dist, first_non_finite};
use crate::{Point3, PointCloud, SampleError};
use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Clouds with at least this many points update their distance field in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 16_384;

/// Tuning options for the sampler. None of these change which points are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerOptions {
    /// The minimum number of points in a cloud before the distance field is built and updated
    /// on the rayon thread pool.
    pub parallel_threshold: usize,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SamplerOptions {
    /// Options which never use the thread pool.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    fn is_parallel(&self, n: usize) -> bool {
        n >= self.parallel_threshold
    }
}

/// The distance from every point in a cloud to the nearest point selected so far, index-aligned
/// with the cloud. Values never grow as more points are selected.
#[derive(Debug, Clone)]
pub struct DistanceField {
    values: Vec<f64>,
}

impl DistanceField {
    fn from_origin(points: &[Point3], origin: &Point3, parallel: bool) -> Self {
        let values = if parallel {
            points.par_iter().map(|p| dist(origin, p)).collect()
        } else {
            points.iter().map(|p| dist(origin, p)).collect()
        };

        Self { values }
    }

    /// Lower each value to its distance from `origin` where that is closer. Every slot is
    /// written independently, so the parallel and sequential paths give identical results.
    fn shrink_to(&mut self, points: &[Point3], origin: &Point3, parallel: bool) {
        if parallel {
            self.values
                .par_iter_mut()
                .zip(points.par_iter())
                .for_each(|(d, p)| *d = d.min(dist(origin, p)));
        } else {
            for (d, p) in self.values.iter_mut().zip(points) {
                *d = d.min(dist(origin, p));
            }
        }
    }

    /// Find the unselected index with the largest value. Ties go to the lowest index, as the
    /// best candidate is only replaced on a strictly greater value.
    fn farthest_unselected(&self, selected: &IndexMask) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in self.values.iter().enumerate() {
            if selected.get(i) {
                continue;
            }
            match best {
                Some((_, best_d)) if d <= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The largest distance from any point in the cloud to its nearest selected point.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// The points chosen by farthest point sampling, in the order they were selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSet {
    indices: Vec<usize>,
    points: Vec<Point3>,
    radii: Vec<f64>,
}

impl SelectedSet {
    fn with_capacity(k: usize) -> Self {
        Self {
            indices: Vec::with_capacity(k),
            points: Vec::with_capacity(k),
            radii: Vec::with_capacity(k),
        }
    }

    fn push(&mut self, index: usize, point: Point3, radius: f64) {
        self.indices.push(index);
        self.points.push(point);
        self.radii.push(radius);
    }

    /// The indices of the selected points in the source cloud.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// For each selection, its distance to the nearest point selected before it. The seed point
    /// has nothing before it, and its radius is infinite.
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    pub fn to_point_cloud(&self) -> PointCloud {
        PointCloud::new(self.points.clone())
    }
}

/// A farthest point sampling run which can be advanced one selection at a time. The cloud is
/// borrowed for the lifetime of the sampler and never modified.
///
/// # Examples
///
/// ```
/// use fpsample::{FarthestPointSampler, Point3};
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(5.0, 0.0, 0.0),
/// ];
/// let mut sampler = FarthestPointSampler::try_new(&points, 0).unwrap();
/// assert_eq!(sampler.field().values(), &[0.0, 10.0, 5.0]);
/// assert_eq!(sampler.step(), Some(1));
/// assert_eq!(sampler.field().values(), &[0.0, 0.0, 5.0]);
/// assert_eq!(sampler.step(), Some(2));
/// assert_eq!(sampler.step(), None);
/// ```
pub struct FarthestPointSampler<'a> {
    points: &'a [Point3],
    field: DistanceField,
    mask: IndexMask,
    selected: SelectedSet,
    parallel: bool,
}

impl<'a> FarthestPointSampler<'a> {
    /// Start a run at `points[seed_index]` with default options.
    pub fn try_new(points: &'a [Point3], seed_index: usize) -> Result<Self, SampleError> {
        Self::with_options(points, seed_index, &SamplerOptions::default())
    }

    pub fn with_options(
        points: &'a [Point3],
        seed_index: usize,
        options: &SamplerOptions,
    ) -> Result<Self, SampleError> {
        check_not_empty(points)?;
        check_finite(points)?;
        check_seed(points, seed_index)?;
        Ok(Self::start(points, seed_index, points.len(), options))
    }

    /// Build the sampler around a seed that has already been validated.
    fn start(points: &'a [Point3], seed_index: usize, k: usize, options: &SamplerOptions) -> Self {
        let parallel = options.is_parallel(points.len());
        let seed = points[seed_index];

        let mut mask = IndexMask::new(points.len(), false);
        mask.set(seed_index, true);

        let mut selected = SelectedSet::with_capacity(k);
        selected.push(seed_index, seed, f64::INFINITY);

        Self {
            points,
            field: DistanceField::from_origin(points, &seed, parallel),
            mask,
            selected,
            parallel,
        }
    }

    /// Select the next point, returning its index, or `None` once every point in the cloud has
    /// been selected.
    pub fn step(&mut self) -> Option<usize> {
        let (index, radius) = self.field.farthest_unselected(&self.mask)?;
        let point = self.points[index];
        trace!("selected point {} at distance {}", index, radius);

        self.mask.set(index, true);
        self.selected.push(index, point, radius);
        self.field.shrink_to(self.points, &point, self.parallel);

        Some(index)
    }

    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    pub fn selected(&self) -> &SelectedSet {
        &self.selected
    }

    /// The distance from the worst covered point in the cloud to its nearest selected point.
    pub fn max_distance(&self) -> f64 {
        self.field.max()
    }

    pub fn is_exhausted(&self) -> bool {
        self.selected.len() == self.points.len()
    }

    pub fn finish(self) -> SelectedSet {
        self.selected
    }
}

/// Select `k` points from `points` with farthest point sampling. The first point is
/// `points[seed_index]`, or a uniformly random point if `seed_index` is `None`.
///
/// # Arguments
///
/// * `points`: the cloud to sample, which must be non-empty and contain only finite coordinates
/// * `k`: the number of points to select, between 1 and `points.len()` inclusive
/// * `seed_index`: the index of the first point to select
///
/// returns: Result<SelectedSet, SampleError>
///
/// # Examples
///
/// ```
/// use fpsample::{sample_farthest_points, Point3};
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(5.0, 0.0, 0.0),
/// ];
/// let selected = sample_farthest_points(&points, 3, Some(0)).unwrap();
/// assert_eq!(selected.indices(), &[0, 1, 2]);
/// ```
pub fn sample_farthest_points(
    points: &[Point3],
    k: usize,
    seed_index: Option<usize>,
) -> Result<SelectedSet, SampleError> {
    sample_farthest_points_with(
        points,
        k,
        seed_index,
        &SamplerOptions::default(),
        &mut rand::rng(),
    )
}

/// Select `k` points with farthest point sampling, drawing the first point from `rng`.
pub fn sample_farthest_points_with_rng<R: Rng + ?Sized>(
    points: &[Point3],
    k: usize,
    rng: &mut R,
) -> Result<SelectedSet, SampleError> {
    sample_farthest_points_with(points, k, None, &SamplerOptions::default(), rng)
}

/// The general form of farthest point sampling. If `seed_index` is given it is used as the first
/// point and `rng` is left untouched, otherwise a single index is drawn from `rng`. All
/// preconditions are checked before any distance is computed.
pub fn sample_farthest_points_with<R: Rng + ?Sized>(
    points: &[Point3],
    k: usize,
    seed_index: Option<usize>,
    options: &SamplerOptions,
    rng: &mut R,
) -> Result<SelectedSet, SampleError> {
    check_not_empty(points)?;
    if k == 0 || k > points.len() {
        return Err(SampleError::TargetCountOutOfRange {
            k,
            n: points.len(),
        });
    }
    check_finite(points)?;

    let seed_index = match seed_index {
        Some(index) => {
            check_seed(points, index)?;
            index
        }
        None => rng.random_range(0..points.len()),
    };

    debug!(
        "farthest point sampling {} of {} points, seed index {}",
        k,
        points.len(),
        seed_index
    );

    let mut sampler = FarthestPointSampler::start(points, seed_index, k, options);
    while sampler.selected().len() < k {
        if sampler.step().is_none() {
            break;
        }
    }

    debug!(
        "farthest point sampling finished, coverage radius {}",
        sampler.max_distance()
    );

    Ok(sampler.finish())
}

fn check_not_empty(points: &[Point3]) -> Result<(), SampleError> {
    if points.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    Ok(())
}

fn check_finite(points: &[Point3]) -> Result<(), SampleError> {
    match first_non_finite(points) {
        Some(index) => Err(SampleError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

fn check_seed(points: &[Point3], index: usize) -> Result<(), SampleError> {
    if index >= points.len() {
        return Err(SampleError::SeedIndexOutOfRange {
            index,
            n: points.len(),
        });
    }
    Ok(())
}
