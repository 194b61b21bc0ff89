//! Non-local means, one axial slice at a time.
//!
//! Every pixel owning a full centered patch is averaged against the other
//! full patches inside its search window, weighted by patch similarity.
//! Pixels too close to the slice border for a full patch copy through
//! unchanged. Each slice is processed in its normalized [0, 1] form and
//! rescaled back to its own intensity range afterwards.

use crate::filter::window::clamped_range;
use crate::params::NlmParams;
use crate::volume::f32::map_slices;
use crate::volume::{SliceF32, VolumeF32};

/// Run non-local means over every axial slice.
pub fn non_local_means(volume: &VolumeF32, params: &NlmParams) -> VolumeF32 {
    map_slices(volume, |_, slice| nlm_slice(slice, params))
}

fn nlm_slice(slice: &SliceF32, params: &NlmParams) -> SliceF32 {
    let (w, h) = (slice.w, slice.h);
    let half = params.patch_size / 2;
    let inv_h2 = 1.0 / (params.h * params.h);

    let (slice_min, slice_max) = slice.min_max();
    let span = slice_max - slice_min;
    let normalized = slice.normalized();

    // Border pixels start as copies; only full-patch pixels are rewritten.
    let mut filtered = normalized.clone();

    if w > 2 * half && h > 2 * half {
        let patch_lo = half;
        let patch_hi_x = w - half;
        let patch_hi_y = h - half;

        for y in patch_lo..patch_hi_y {
            for x in patch_lo..patch_hi_x {
                let mut acc = 0.0f32;
                let mut weight_sum = 0.0f32;

                let search_y = clamped_range(y, params.search_radius, h);
                let search_x = clamped_range(x, params.search_radius, w);
                for ny in search_y.clone() {
                    if ny < patch_lo || ny >= patch_hi_y {
                        continue;
                    }
                    for nx in search_x.clone() {
                        if nx < patch_lo || nx >= patch_hi_x {
                            continue;
                        }
                        if nx == x && ny == y {
                            continue;
                        }
                        let dist = patch_distance(&normalized, x, y, nx, ny, half);
                        let weight = (-dist * inv_h2).exp();
                        acc += weight * normalized.get(nx, ny);
                        weight_sum += weight;
                    }
                }

                let value = if weight_sum > 0.0 {
                    acc / weight_sum
                } else {
                    normalized.get(x, y)
                };
                filtered.set(x, y, value);
            }
        }
    }

    // Back to the slice's own intensity range. A flat slice rescales to
    // its constant value.
    let mut out = SliceF32::new(w, h);
    for (dst, &v) in out.data.iter_mut().zip(&filtered.data) {
        *dst = slice_min + v * span;
    }
    out
}

/// Summed squared difference between the two centered patches.
fn patch_distance(
    plane: &SliceF32,
    ax: usize,
    ay: usize,
    bx: usize,
    by: usize,
    half: usize,
) -> f32 {
    let mut dist = 0.0f32;
    for dy in 0..=2 * half {
        let a_row = plane.row(ay - half + dy);
        let b_row = plane.row(by - half + dy);
        for dx in 0..=2 * half {
            let diff = a_row[ax - half + dx] - b_row[bx - half + dx];
            dist += diff * diff;
        }
    }
    dist
}
