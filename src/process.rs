//! Algorithm dispatch and the caller-driven volume session.
//!
//! The dispatcher maps an algorithm selector plus its parameter bundle to
//! exactly one kernel, after validating the bundle. Results carry the
//! label/edge semantics the caller needs to pick display or export
//! behavior, plus the wall-clock latency of the kernel.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::denoise::non_local_means;
use crate::edge::{canny_edges, log_edges, roberts_edges};
use crate::error::ProcessError;
use crate::filter::{anisotropic_diffusion, bilateral_filter, mean_filter, median_filter};
use crate::params::{
    BilateralParams, CannyParams, DiffusionParams, KMeansParams, LogParams, MeanFilterParams,
    MedianFilterParams, NlmParams, RegionGrowParams, RobertsParams, ThresholdParams,
};
use crate::segment::{cluster_intensities, grow_region, threshold_range};
use crate::volume::VolumeF32;

/// Semantics of a result volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputKind {
    /// Voxels are 0.0 or 1.0 membership flags.
    BinaryMask,
    /// Voxels hold cluster/label values rather than raw intensity.
    LabelMap,
    /// Voxels hold continuous filtered intensities.
    Filtered,
}

/// The closed algorithm set with its per-algorithm parameter bundle.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "camelCase")]
pub enum AlgorithmParams {
    Threshold(ThresholdParams),
    RegionGrow(RegionGrowParams),
    KMeans(KMeansParams),
    MeanFilter(MeanFilterParams),
    MedianFilter(MedianFilterParams),
    Bilateral(BilateralParams),
    AnisotropicDiffusion(DiffusionParams),
    CannyEdges(CannyParams),
    Roberts(RobertsParams),
    Log(LogParams),
    NonLocalMeans(NlmParams),
}

impl AlgorithmParams {
    /// Stable identifier used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold(_) => "threshold",
            Self::RegionGrow(_) => "region_grow",
            Self::KMeans(_) => "kmeans",
            Self::MeanFilter(_) => "mean_filter",
            Self::MedianFilter(_) => "median_filter",
            Self::Bilateral(_) => "bilateral",
            Self::AnisotropicDiffusion(_) => "diffusion",
            Self::CannyEdges(_) => "canny",
            Self::Roberts(_) => "roberts",
            Self::Log(_) => "log",
            Self::NonLocalMeans(_) => "nlm",
        }
    }

    /// Range-check the bundle without running anything.
    pub fn validate(&self) -> Result<(), ProcessError> {
        match self {
            Self::Threshold(p) => p.validate(),
            Self::RegionGrow(p) => p.validate(),
            Self::KMeans(p) => p.validate(),
            Self::MeanFilter(p) => p.validate(),
            Self::MedianFilter(p) => p.validate(),
            Self::Bilateral(p) => p.validate(),
            Self::AnisotropicDiffusion(p) => p.validate(),
            Self::CannyEdges(p) => p.validate(),
            Self::Roberts(p) => p.validate(),
            Self::Log(p) => p.validate(),
            Self::NonLocalMeans(p) => p.validate(),
        }
    }
}

/// A kernel result: the derived volume, its semantics, and the kernel's
/// wall-clock latency.
#[derive(Clone, Debug)]
pub struct ProcessOutput {
    pub volume: VolumeF32,
    pub kind: OutputKind,
    pub latency_ms: f64,
}

/// Validate the parameter bundle and run exactly one kernel over the
/// volume. The output always has the input's dimensions.
pub fn run(volume: &VolumeF32, params: &AlgorithmParams) -> Result<ProcessOutput, ProcessError> {
    params.validate()?;

    let start = Instant::now();
    debug!(
        "process::run algorithm={} dims={}x{}x{}",
        params.name(),
        volume.w,
        volume.h,
        volume.d
    );

    let (result, kind) = match params {
        AlgorithmParams::Threshold(p) => (threshold_range(volume, p), OutputKind::BinaryMask),
        AlgorithmParams::RegionGrow(p) => (grow_region(volume, p)?, OutputKind::BinaryMask),
        AlgorithmParams::KMeans(p) => (cluster_intensities(volume, p), OutputKind::LabelMap),
        AlgorithmParams::MeanFilter(p) => (mean_filter(volume, p), OutputKind::Filtered),
        AlgorithmParams::MedianFilter(p) => (median_filter(volume, p), OutputKind::Filtered),
        AlgorithmParams::Bilateral(p) => (bilateral_filter(volume, p), OutputKind::Filtered),
        AlgorithmParams::AnisotropicDiffusion(p) => {
            (anisotropic_diffusion(volume, p), OutputKind::Filtered)
        }
        AlgorithmParams::CannyEdges(p) => (canny_edges(volume, p), OutputKind::BinaryMask),
        AlgorithmParams::Roberts(p) => (roberts_edges(volume, p), OutputKind::BinaryMask),
        AlgorithmParams::Log(p) => (log_edges(volume, p), OutputKind::BinaryMask),
        AlgorithmParams::NonLocalMeans(p) => (non_local_means(volume, p), OutputKind::Filtered),
    };

    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "process::run algorithm={} latency_ms={:.3}",
        params.name(),
        latency_ms
    );

    debug_assert_eq!(result.dims(), volume.dims());
    Ok(ProcessOutput {
        volume: result,
        kind,
        latency_ms,
    })
}

/// Caller-driven volume lifecycle: a current buffer that kernels read and
/// that the caller explicitly replaces with a committed result.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<VolumeF32>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded volume as the current buffer.
    pub fn load(&mut self, volume: VolumeF32) {
        self.current = Some(volume);
    }

    /// The current buffer, if one has been loaded.
    pub fn current(&self) -> Option<&VolumeF32> {
        self.current.as_ref()
    }

    /// Run an algorithm against the current buffer.
    pub fn run(&self, params: &AlgorithmParams) -> Result<ProcessOutput, ProcessError> {
        let volume = self
            .current
            .as_ref()
            .ok_or_else(|| ProcessError::precondition("a loaded volume"))?;
        run(volume, params)
    }

    /// Replace the current buffer with a previously produced result.
    pub fn commit(&mut self, output: ProcessOutput) {
        self.current = Some(output.volume);
    }
}
