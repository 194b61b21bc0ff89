//! Range-based binary segmentation.

use crate::params::ThresholdParams;
use crate::volume::VolumeF32;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Produce a binary mask selecting voxels whose intensity falls inside the
/// band `[min + min_fraction * span, min + max_fraction * span]` of the
/// volume's own intensity range.
pub fn threshold_range(volume: &VolumeF32, params: &ThresholdParams) -> VolumeF32 {
    let (min_val, max_val) = volume.min_max();
    let span = max_val - min_val;
    let lo = min_val + params.min_fraction * span;
    let hi = min_val + params.max_fraction * span;

    let mut out = VolumeF32::new(volume.w, volume.h, volume.d);

    #[cfg(feature = "parallel")]
    {
        out.data
            .par_iter_mut()
            .zip(volume.data.par_iter())
            .for_each(|(dst, &v)| {
                *dst = if v >= lo && v <= hi { 1.0 } else { 0.0 };
            });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (dst, &v) in out.data.iter_mut().zip(&volume.data) {
            *dst = if v >= lo && v <= hi { 1.0 } else { 0.0 };
        }
    }

    out
}
