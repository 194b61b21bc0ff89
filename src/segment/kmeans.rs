//! 1D K-means clustering over voxel intensities.
//!
//! Intensities are normalized to [0, 1] before clustering; the output
//! volume stores each voxel's assigned centroid value rescaled to
//! [0, 255], so voxels of one cluster share a value rather than a label
//! id. Centroid initialization draws from a fixed-seed generator so two
//! runs over the same volume produce identical clusters.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::params::KMeansParams;
use crate::volume::VolumeF32;

/// Fixed centroid-initialization seed; clustering must stay reproducible
/// across runs.
const CENTROID_SEED: u64 = 0x566F_7853_6567;

/// Centroid movement below which iteration stops early.
const CONVERGENCE_EPS: f32 = 1e-4;

/// Cluster the volume's intensities into `params.k` groups.
///
/// The kernel itself accepts any `k >= 1`; the dispatcher enforces the
/// `k >= 2` configuration range. With `k = 1` the single centroid lands on
/// the global mean after one iteration.
pub fn cluster_intensities(volume: &VolumeF32, params: &KMeansParams) -> VolumeF32 {
    let mut out = VolumeF32::new(volume.w, volume.h, volume.d);
    if volume.is_empty() {
        return out;
    }

    let (min_val, max_val) = volume.min_max();
    let span = max_val - min_val;
    let normalized: Vec<f32> = if span > 0.0 {
        let inv = 1.0 / span;
        volume.data.iter().map(|&v| (v - min_val) * inv).collect()
    } else {
        vec![0.0; volume.len()]
    };

    let k = params.k.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(CENTROID_SEED);
    let mut centroids: Vec<f32> = (0..k).map(|_| rng.gen::<f32>()).collect();
    let mut assignments = vec![0usize; normalized.len()];

    for iteration in 0..params.max_iterations {
        // Assignment: nearest centroid by absolute distance, first index
        // wins ties.
        for (slot, &v) in assignments.iter_mut().zip(&normalized) {
            let mut best = 0usize;
            let mut best_dist = (v - centroids[0]).abs();
            for (ci, &c) in centroids.iter().enumerate().skip(1) {
                let dist = (v - c).abs();
                if dist < best_dist {
                    best_dist = dist;
                    best = ci;
                }
            }
            *slot = best;
        }

        // Update: mean of assigned voxels; empty centroids keep their value.
        let mut sums = vec![0.0f64; k];
        let mut counts = vec![0usize; k];
        for (&ci, &v) in assignments.iter().zip(&normalized) {
            sums[ci] += v as f64;
            counts[ci] += 1;
        }

        let mut max_shift = 0.0f32;
        for ci in 0..k {
            if counts[ci] == 0 {
                continue;
            }
            let updated = (sums[ci] / counts[ci] as f64) as f32;
            max_shift = max_shift.max((updated - centroids[ci]).abs());
            centroids[ci] = updated;
        }

        debug!("kmeans iteration={iteration} max_shift={max_shift:.6}");
        if max_shift < CONVERGENCE_EPS {
            break;
        }
    }

    for (dst, &ci) in out.data.iter_mut().zip(&assignments) {
        *dst = centroids[ci] * 255.0;
    }
    out
}
