//! Bilateral filter: joint spatial/range-weighted smoothing.
//!
//! The weight of a neighbor combines its squared Euclidean offset distance
//! and its intensity difference to the window center, so smoothing is
//! suppressed across strong edges. Window support is clamped at the
//! volume boundary.

use crate::filter::window::clamped_range;
use crate::params::BilateralParams;
use crate::volume::VolumeF32;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply the bilateral filter over a cubic window.
///
/// A voxel whose window accumulates zero total weight keeps its original
/// intensity.
pub fn bilateral_filter(volume: &VolumeF32, params: &BilateralParams) -> VolumeF32 {
    let radius = params.window_size / 2;
    let inv_space = -0.5 / (params.sigma_space * params.sigma_space);
    let inv_range = -0.5 / (params.sigma_range * params.sigma_range);

    let mut out = VolumeF32::new(volume.w, volume.h, volume.d);
    let plane = volume.plane_len();
    if plane == 0 || volume.d == 0 {
        return out;
    }

    let slab_body = |z: usize, slab: &mut [f32]| {
        bilateral_slab(volume, z, radius, inv_space, inv_range, slab)
    };

    #[cfg(feature = "parallel")]
    {
        out.data
            .par_chunks_mut(plane)
            .enumerate()
            .for_each(|(z, slab)| slab_body(z, slab));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.data
            .chunks_mut(plane)
            .enumerate()
            .for_each(|(z, slab)| slab_body(z, slab));
    }

    out
}

fn bilateral_slab(
    volume: &VolumeF32,
    z: usize,
    radius: usize,
    inv_space: f32,
    inv_range: f32,
    slab: &mut [f32],
) {
    let (w, h, d) = volume.dims();
    for y in 0..h {
        for x in 0..w {
            let center = volume.get(x, y, z);
            let mut acc = 0.0f32;
            let mut weight_sum = 0.0f32;
            for nz in clamped_range(z, radius, d) {
                let dz = nz as f32 - z as f32;
                for ny in clamped_range(y, radius, h) {
                    let dy = ny as f32 - y as f32;
                    let row_start = volume.idx(0, ny, nz);
                    for nx in clamped_range(x, radius, w) {
                        let dx = nx as f32 - x as f32;
                        let neighbor = volume.data[row_start + nx];
                        let dist2 = dx * dx + dy * dy + dz * dz;
                        let delta = neighbor - center;
                        let weight =
                            (dist2 * inv_space).exp() * (delta * delta * inv_range).exp();
                        acc += weight * neighbor;
                        weight_sum += weight;
                    }
                }
            }
            slab[y * w + x] = if weight_sum > 0.0 {
                acc / weight_sum
            } else {
                center
            };
        }
    }
}
