//! Edge detectors operating on axial slices.
//!
//! Each detector runs per 2D slice, independently, and assembles a binary
//! 3D volume:
//!
//! - Canny-style pipeline: Gaussian blur, Sobel gradients, direction-aligned
//!   non-maximum suppression, hysteresis thresholding.
//! - Roberts cross: 2x2 diagonal-difference kernels with per-slice
//!   normalization and a fixed binarization threshold.
//! - Laplacian of Gaussian: smoothed second derivative with zero-crossing
//!   extraction.
//!
//! Building blocks (separable Gaussian, gradients, suppression, hysteresis)
//! are split into their own modules so each stage stays testable.

pub mod canny;
pub mod gaussian;
pub mod grad;
pub mod hysteresis;
pub mod laplacian;
pub mod nms;
pub mod roberts;

pub use canny::canny_edges;
pub use grad::{sobel_gradients, Grad};
pub use laplacian::log_edges;
pub use roberts::roberts_edges;

#[cfg(test)]
mod tests;
