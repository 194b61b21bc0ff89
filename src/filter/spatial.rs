//! Fixed-radius mean and median filters over cubic neighborhoods.
//!
//! Complexity is O(W·H·D·k³); kernels address the volume through flat
//! indices with precomputed plane strides and split the output into
//! per-plane slabs for parallel execution.

use crate::filter::window::clamped_range;
use crate::params::{MeanFilterParams, MedianFilterParams};
use crate::volume::VolumeF32;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Replace every voxel by the mean of its in-bounds cubic neighborhood.
pub fn mean_filter(volume: &VolumeF32, params: &MeanFilterParams) -> VolumeF32 {
    let radius = params.kernel_size / 2;
    run_slabs(volume, |z, slab| mean_slab(volume, z, radius, slab))
}

/// Replace every voxel by the median of its in-bounds cubic neighborhood.
///
/// An even-sized sample (possible at volume edges) takes the mean of the
/// two middle order statistics.
pub fn median_filter(volume: &VolumeF32, params: &MedianFilterParams) -> VolumeF32 {
    let radius = params.kernel_size / 2;
    run_slabs(volume, |z, slab| median_slab(volume, z, radius, slab))
}

fn run_slabs<F>(volume: &VolumeF32, body: F) -> VolumeF32
where
    F: Fn(usize, &mut [f32]) + Sync,
{
    let mut out = VolumeF32::new(volume.w, volume.h, volume.d);
    let plane = volume.plane_len();
    if plane == 0 || volume.d == 0 {
        return out;
    }

    #[cfg(feature = "parallel")]
    {
        out.data
            .par_chunks_mut(plane)
            .enumerate()
            .for_each(|(z, slab)| body(z, slab));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.data
            .chunks_mut(plane)
            .enumerate()
            .for_each(|(z, slab)| body(z, slab));
    }

    out
}

fn mean_slab(volume: &VolumeF32, z: usize, radius: usize, slab: &mut [f32]) {
    let (w, h, d) = volume.dims();
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            let mut count = 0usize;
            for nz in clamped_range(z, radius, d) {
                for ny in clamped_range(y, radius, h) {
                    let row_start = volume.idx(0, ny, nz);
                    for nx in clamped_range(x, radius, w) {
                        sum += volume.data[row_start + nx];
                        count += 1;
                    }
                }
            }
            slab[y * w + x] = sum / count as f32;
        }
    }
}

fn median_slab(volume: &VolumeF32, z: usize, radius: usize, slab: &mut [f32]) {
    let (w, h, d) = volume.dims();
    let window = 2 * radius + 1;
    let mut samples: Vec<f32> = Vec::with_capacity(window * window * window);
    for y in 0..h {
        for x in 0..w {
            samples.clear();
            for nz in clamped_range(z, radius, d) {
                for ny in clamped_range(y, radius, h) {
                    let row_start = volume.idx(0, ny, nz);
                    for nx in clamped_range(x, radius, w) {
                        samples.push(volume.data[row_start + nx]);
                    }
                }
            }
            slab[y * w + x] = median_of(&mut samples);
        }
    }
}

fn median_of(samples: &mut [f32]) -> f32 {
    samples.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = samples.len();
    if n % 2 == 1 {
        samples[n / 2]
    } else {
        0.5 * (samples[n / 2 - 1] + samples[n / 2])
    }
}
