//! Canny-style edge pipeline, one axial slice at a time.
//!
//! Stages per slice: normalize to [0, 1], separable Gaussian blur, Sobel
//! gradients, direction-aligned non-maximum suppression, hysteresis
//! thresholding. Slices are independent and run in parallel; the
//! hysteresis expansion inside one slice stays sequential.

use log::debug;

use crate::edge::gaussian::{blur_separable, derived_sigma, gaussian_taps};
use crate::edge::grad::sobel_gradients;
use crate::edge::hysteresis::hysteresis_threshold;
use crate::edge::nms::suppress_non_maxima;
use crate::params::CannyParams;
use crate::volume::f32::map_slices;
use crate::volume::{SliceF32, VolumeF32};

/// Run the Canny pipeline over every axial slice, assembling a binary
/// edge volume.
pub fn canny_edges(volume: &VolumeF32, params: &CannyParams) -> VolumeF32 {
    let sigma = derived_sigma(params.kernel_size);
    let taps = gaussian_taps(params.kernel_size, sigma);
    debug!(
        "canny_edges kernel_size={} sigma={sigma:.3} slices={}",
        params.kernel_size, volume.d
    );
    map_slices(volume, |_, slice| canny_slice(slice, &taps, params))
}

fn canny_slice(slice: &SliceF32, taps: &[f32], params: &CannyParams) -> SliceF32 {
    let normalized = slice.normalized();
    let blurred = blur_separable(&normalized, taps);
    let grad = sobel_gradients(&blurred);
    let suppressed = suppress_non_maxima(&grad);
    hysteresis_threshold(&suppressed, params.low_fraction, params.high_fraction)
}
