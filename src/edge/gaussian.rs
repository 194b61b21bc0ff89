//! Gaussian kernels and separable blur for the per-slice pipelines.
//!
//! The blur is applied as two 1D passes (horizontal then vertical). Taps
//! that fall outside the plane are ignored and the remaining weights are
//! renormalized, so border pixels average over their in-bounds support
//! instead of being dimmed.

use crate::volume::SliceF32;

/// Sigma derived from a kernel size, `0.3·((k−1)·0.5 − 1) + 0.8`.
#[inline]
pub fn derived_sigma(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1D Gaussian taps of the given odd length.
pub fn gaussian_taps(kernel_size: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(kernel_size % 2 == 1, "kernel size must be odd");
    let radius = (kernel_size / 2) as isize;
    let inv_two_sigma2 = -0.5 / (sigma * sigma);
    let mut taps: Vec<f32> = (-radius..=radius)
        .map(|i| {
            let x = i as f32;
            (x * x * inv_two_sigma2).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in taps.iter_mut() {
        *t /= sum;
    }
    taps
}

/// Normalized 2D Gaussian kernel (row-major, `kernel_size²` entries).
pub fn gaussian_kernel_2d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(kernel_size % 2 == 1, "kernel size must be odd");
    let radius = (kernel_size / 2) as isize;
    let inv_two_sigma2 = -0.5 / (sigma * sigma);
    let mut kernel = Vec::with_capacity(kernel_size * kernel_size);
    for ky in -radius..=radius {
        for kx in -radius..=radius {
            let r2 = (kx * kx + ky * ky) as f32;
            kernel.push((r2 * inv_two_sigma2).exp());
        }
    }
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }
    kernel
}

/// Blur a plane with the given 1D taps, horizontal pass then vertical pass.
pub fn blur_separable(plane: &SliceF32, taps: &[f32]) -> SliceF32 {
    let radius = (taps.len() / 2) as isize;
    let (w, h) = (plane.w, plane.h);
    let mut horizontal = SliceF32::new(w, h);
    for y in 0..h {
        let src = plane.row(y);
        let dst = horizontal.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            let mut weight = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = x as isize + k as isize - radius;
                if sx < 0 || sx as usize >= w {
                    continue;
                }
                acc += tap * src[sx as usize];
                weight += tap;
            }
            dst[x] = if weight > 0.0 { acc / weight } else { 0.0 };
        }
    }

    let mut out = SliceF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            let mut weight = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = y as isize + k as isize - radius;
                if sy < 0 || sy as usize >= h {
                    continue;
                }
                acc += tap * horizontal.get(x, sy as usize);
                weight += tap;
            }
            dst[x] = if weight > 0.0 { acc / weight } else { 0.0 };
        }
    }
    out
}
