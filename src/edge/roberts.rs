//! Roberts cross edge detector.
//!
//! Applies the 2×2 diagonal-difference kernel pair over every pixel except
//! the last row and column, normalizes each slice's gradient magnitude by
//! its own maximum, and binarizes at the configured threshold.

use crate::params::RobertsParams;
use crate::volume::f32::map_slices;
use crate::volume::{SliceF32, VolumeF32};

/// Run the Roberts cross detector over every axial slice.
pub fn roberts_edges(volume: &VolumeF32, params: &RobertsParams) -> VolumeF32 {
    map_slices(volume, |_, slice| roberts_slice(slice, params.threshold))
}

fn roberts_slice(slice: &SliceF32, threshold: f32) -> SliceF32 {
    let (w, h) = (slice.w, slice.h);
    let mut mag = SliceF32::new(w, h);
    if w < 2 || h < 2 {
        return mag;
    }

    let mut max_mag = 0.0f32;
    for y in 0..h - 1 {
        let row = slice.row(y);
        let next = slice.row(y + 1);
        let out_row = mag.row_mut(y);
        for x in 0..w - 1 {
            let diag = row[x] - next[x + 1];
            let anti = row[x + 1] - next[x];
            let m = (diag * diag + anti * anti).sqrt();
            out_row[x] = m;
            max_mag = max_mag.max(m);
        }
    }

    let mut out = SliceF32::new(w, h);
    if max_mag > 0.0 {
        let inv = 1.0 / max_mag;
        for (dst, &m) in out.data.iter_mut().zip(&mag.data) {
            *dst = if m * inv > threshold { 1.0 } else { 0.0 };
        }
    }
    out
}
