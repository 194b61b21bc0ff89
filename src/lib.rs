#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod params;
pub mod process;
pub mod volume;

// Kernel modules – public for stage-level use, but the dispatcher in
// `process` is the intended entry point.
pub mod denoise;
pub mod edge;
pub mod filter;
pub mod segment;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::ProcessError;
pub use crate::process::{run, AlgorithmParams, OutputKind, ProcessOutput, Session};
pub use crate::volume::{SliceF32, VolumeF32};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use volume_processor::prelude::*;
///
/// # fn main() {
/// let volume = VolumeF32::new(32, 32, 8);
/// let params = AlgorithmParams::MeanFilter(MeanFilterParams { kernel_size: 3 });
///
/// let output = run(&volume, &params).expect("valid parameters");
/// println!("kind={:?} latency_ms={:.3}", output.kind, output.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::params::{
        BilateralParams, CannyParams, DiffusionParams, KMeansParams, LogParams, MeanFilterParams,
        MedianFilterParams, NlmParams, RegionGrowParams, RobertsParams, ThresholdParams,
    };
    pub use crate::{run, AlgorithmParams, OutputKind, ProcessError, Session, VolumeF32};
}
