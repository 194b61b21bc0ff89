//! Perona-Malik anisotropic diffusion.
//!
//! Explicit Jacobi scheme: every update of an iteration reads the previous
//! iteration's buffer, so results do not depend on sweep order. Border
//! voxels (any coordinate at 0 or its maximum) are carried over unmodified
//! each iteration. The kernel runs for the configured iteration count with
//! no early convergence exit.

use log::debug;

use crate::params::DiffusionParams;
use crate::volume::VolumeF32;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Diffuse the volume for `params.iterations` steps with conduction
/// `g(Δ, κ) = exp(-(Δ/κ)²)` over the six face-neighbor differences.
pub fn anisotropic_diffusion(volume: &VolumeF32, params: &DiffusionParams) -> VolumeF32 {
    let mut prev = volume.clone();
    let mut next = volume.clone();
    let inv_kappa = 1.0 / params.kappa;
    let lambda = params.lambda;

    for iteration in 0..params.iterations {
        diffuse_once(&prev, &mut next, inv_kappa, lambda);
        std::mem::swap(&mut prev, &mut next);
        debug!("diffusion iteration={iteration} done");
    }

    prev
}

fn diffuse_once(prev: &VolumeF32, next: &mut VolumeF32, inv_kappa: f32, lambda: f32) {
    let plane = prev.plane_len();
    if plane == 0 || prev.d == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        next.data
            .par_chunks_mut(plane)
            .enumerate()
            .for_each(|(z, slab)| diffuse_slab(prev, z, inv_kappa, lambda, slab));
    }
    #[cfg(not(feature = "parallel"))]
    {
        next.data
            .chunks_mut(plane)
            .enumerate()
            .for_each(|(z, slab)| diffuse_slab(prev, z, inv_kappa, lambda, slab));
    }
}

fn diffuse_slab(prev: &VolumeF32, z: usize, inv_kappa: f32, lambda: f32, slab: &mut [f32]) {
    let (w, h, d) = prev.dims();
    let plane_start = z * prev.plane_len();
    // Border planes are copied through untouched.
    if z == 0 || z + 1 >= d {
        slab.copy_from_slice(&prev.data[plane_start..plane_start + prev.plane_len()]);
        return;
    }

    for y in 0..h {
        let row_start = y * w;
        if y == 0 || y + 1 >= h {
            slab[row_start..row_start + w]
                .copy_from_slice(&prev.data[plane_start + row_start..plane_start + row_start + w]);
            continue;
        }
        for x in 0..w {
            if x == 0 || x + 1 >= w {
                slab[row_start + x] = prev.data[plane_start + row_start + x];
                continue;
            }
            let center = prev.get(x, y, z);
            let mut flux = 0.0f32;
            for neighbor in [
                prev.get(x + 1, y, z),
                prev.get(x - 1, y, z),
                prev.get(x, y + 1, z),
                prev.get(x, y - 1, z),
                prev.get(x, y, z + 1),
                prev.get(x, y, z - 1),
            ] {
                let delta = neighbor - center;
                let scaled = delta * inv_kappa;
                let conduction = (-scaled * scaled).exp();
                flux += conduction * delta;
            }
            slab[row_start + x] = center + lambda * flux;
        }
    }
}
