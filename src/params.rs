//! Parameter bundles, one per algorithm.
//!
//! Each struct carries the numeric knobs of a single kernel, provides
//! defaults that behave reasonably on typical scan volumes, and validates
//! its ranges before any computation starts. Validation failures are
//! configuration errors; they never abort a running kernel.
//!
//! All bundles round-trip through serde so a caller can persist or ship
//! them as JSON.

use serde::{Deserialize, Serialize};

use crate::error::ProcessError;

fn require(ok: bool, name: &'static str, reason: &str) -> Result<(), ProcessError> {
    if ok {
        Ok(())
    } else {
        Err(ProcessError::config(name, reason.to_string()))
    }
}

fn require_odd_window(size: usize, name: &'static str) -> Result<(), ProcessError> {
    require(size >= 1, name, "window size must be positive")?;
    require(size % 2 == 1, name, "window size must be odd")
}

/// Range-based binary segmentation thresholds, expressed as fractions of
/// the volume's [min, max] intensity range. Ordering of the two fractions
/// is the caller's responsibility.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThresholdParams {
    pub min_fraction: f32,
    pub max_fraction: f32,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            min_fraction: 0.25,
            max_fraction: 0.75,
        }
    }
}

impl ThresholdParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require(
            (0.0..=1.0).contains(&self.min_fraction) && (0.0..=1.0).contains(&self.max_fraction),
            "threshold",
            "fractions must lie in [0, 1]",
        )
    }
}

/// Seeded flood-fill segmentation. The seed is supplied by the caller's
/// selection step; dispatching without one is a precondition error.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionGrowParams {
    /// Seed voxel (x, y, z); must lie inside the volume.
    pub seed: Option<[i32; 3]>,
    /// Admission tolerance as a fraction of the intensity range, in (0, 1].
    pub tolerance: f32,
}

impl Default for RegionGrowParams {
    fn default() -> Self {
        Self {
            seed: None,
            tolerance: 0.1,
        }
    }
}

impl RegionGrowParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require(
            self.tolerance > 0.0 && self.tolerance <= 1.0,
            "region_grow",
            "tolerance must lie in (0, 1]",
        )
    }
}

/// 1D K-means over voxel intensities.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KMeansParams {
    pub k: usize,
    pub max_iterations: usize,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            k: 3,
            max_iterations: 20,
        }
    }
}

impl KMeansParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require(self.k >= 2, "kmeans", "k must be at least 2")?;
        require(
            self.max_iterations >= 1,
            "kmeans",
            "max_iterations must be positive",
        )
    }
}

/// Cubic-neighborhood mean filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeanFilterParams {
    pub kernel_size: usize,
}

impl Default for MeanFilterParams {
    fn default() -> Self {
        Self { kernel_size: 3 }
    }
}

impl MeanFilterParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require_odd_window(self.kernel_size, "mean_filter")
    }
}

/// Cubic-neighborhood median filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedianFilterParams {
    pub kernel_size: usize,
}

impl Default for MedianFilterParams {
    fn default() -> Self {
        Self { kernel_size: 3 }
    }
}

impl MedianFilterParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require_odd_window(self.kernel_size, "median_filter")
    }
}

/// Edge-preserving bilateral filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BilateralParams {
    pub window_size: usize,
    pub sigma_space: f32,
    pub sigma_range: f32,
}

impl Default for BilateralParams {
    fn default() -> Self {
        Self {
            window_size: 5,
            sigma_space: 2.0,
            sigma_range: 25.0,
        }
    }
}

impl BilateralParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require_odd_window(self.window_size, "bilateral")?;
        require(
            self.sigma_space > 0.0 && self.sigma_range > 0.0,
            "bilateral",
            "sigmas must be positive",
        )
    }
}

/// Perona-Malik anisotropic diffusion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffusionParams {
    pub iterations: usize,
    /// Conductance; larger values let diffusion cross stronger gradients.
    pub kappa: f32,
    /// Time step; must stay in (0, 0.25] for a stable explicit update.
    pub lambda: f32,
}

impl Default for DiffusionParams {
    fn default() -> Self {
        Self {
            iterations: 10,
            kappa: 30.0,
            lambda: 0.2,
        }
    }
}

impl DiffusionParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require(self.iterations >= 1, "diffusion", "iterations must be positive")?;
        require(self.kappa > 0.0, "diffusion", "kappa must be positive")?;
        require(
            self.lambda > 0.0 && self.lambda <= 0.25,
            "diffusion",
            "lambda must lie in (0, 0.25]",
        )
    }
}

/// Canny-style per-slice edge pipeline.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CannyParams {
    /// Gaussian blur kernel size; sigma is derived from it.
    pub kernel_size: usize,
    /// Hysteresis low threshold as a fraction of the magnitude range.
    pub low_fraction: f32,
    /// Hysteresis high threshold as a fraction of the magnitude range.
    pub high_fraction: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            low_fraction: 0.1,
            high_fraction: 0.3,
        }
    }
}

impl CannyParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require_odd_window(self.kernel_size, "canny")?;
        require(self.kernel_size >= 3, "canny", "kernel size must be at least 3")?;
        require(
            (0.0..=1.0).contains(&self.low_fraction)
                && (0.0..=1.0).contains(&self.high_fraction)
                && self.low_fraction < self.high_fraction,
            "canny",
            "fractions must satisfy 0 <= low < high <= 1",
        )
    }
}

/// Roberts cross edge detector.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RobertsParams {
    /// Binarization threshold on the per-slice normalized magnitude.
    pub threshold: f32,
}

impl Default for RobertsParams {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

impl RobertsParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require(
            (0.0..=1.0).contains(&self.threshold),
            "roberts",
            "threshold must lie in [0, 1]",
        )
    }
}

/// Laplacian-of-Gaussian zero-crossing detector.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogParams {
    pub sigma: f32,
    pub kernel_size: usize,
}

impl Default for LogParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            kernel_size: 5,
        }
    }
}

impl LogParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require_odd_window(self.kernel_size, "log")?;
        require(self.kernel_size >= 3, "log", "kernel size must be at least 3")?;
        require(self.sigma > 0.0, "log", "sigma must be positive")
    }
}

/// Per-slice non-local means denoiser.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NlmParams {
    pub patch_size: usize,
    pub search_radius: usize,
    /// Filtering strength on the normalized [0, 1] slice.
    pub h: f32,
}

impl Default for NlmParams {
    fn default() -> Self {
        Self {
            patch_size: 5,
            search_radius: 5,
            h: 0.1,
        }
    }
}

impl NlmParams {
    pub fn validate(&self) -> Result<(), ProcessError> {
        require_odd_window(self.patch_size, "nlm")?;
        require(self.search_radius >= 1, "nlm", "search radius must be positive")?;
        require(self.h > 0.0, "nlm", "filtering strength must be positive")
    }
}
