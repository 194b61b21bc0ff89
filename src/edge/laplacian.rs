//! Laplacian-of-Gaussian zero-crossing detector.
//!
//! Per slice: direct (non-FFT) convolution with a normalized Gaussian,
//! then with the discrete Laplacian, both zero-padded at the slice border.
//! The response is scaled by its maximum absolute value, keeping the sign
//! the zero-crossing test needs; an interior pixel becomes an edge when
//! any of its 8 neighbors has a response of opposite sign.

use crate::edge::gaussian::gaussian_kernel_2d;
use crate::params::LogParams;
use crate::volume::f32::map_slices;
use crate::volume::{SliceF32, VolumeF32};

/// Run the LoG zero-crossing detector over every axial slice.
pub fn log_edges(volume: &VolumeF32, params: &LogParams) -> VolumeF32 {
    let gaussian = gaussian_kernel_2d(params.kernel_size, params.sigma);
    let laplacian = laplacian_kernel(params.kernel_size);
    map_slices(volume, |_, slice| {
        log_slice(slice, &gaussian, &laplacian, params.kernel_size)
    })
}

/// Discrete Laplacian: the 3×3 base stencil, centered inside a zero
/// kernel when `kernel_size > 3`.
fn laplacian_kernel(kernel_size: usize) -> Vec<f32> {
    const BASE: [[f32; 3]; 3] = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
    debug_assert!(kernel_size >= 3 && kernel_size % 2 == 1);
    let mut kernel = vec![0.0f32; kernel_size * kernel_size];
    let offset = kernel_size / 2 - 1;
    for (ky, base_row) in BASE.iter().enumerate() {
        for (kx, &v) in base_row.iter().enumerate() {
            kernel[(ky + offset) * kernel_size + kx + offset] = v;
        }
    }
    kernel
}

/// Direct 2D convolution with zero padding outside the plane.
fn convolve_2d(plane: &SliceF32, kernel: &[f32], kernel_size: usize) -> SliceF32 {
    let (w, h) = (plane.w, plane.h);
    let radius = (kernel_size / 2) as isize;
    let mut out = SliceF32::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            for ky in 0..kernel_size {
                let sy = y as isize + ky as isize - radius;
                if sy < 0 || sy as usize >= h {
                    continue;
                }
                let src = plane.row(sy as usize);
                let k_row = &kernel[ky * kernel_size..(ky + 1) * kernel_size];
                for (kx, &kv) in k_row.iter().enumerate() {
                    if kv == 0.0 {
                        continue;
                    }
                    let sx = x as isize + kx as isize - radius;
                    if sx < 0 || sx as usize >= w {
                        continue;
                    }
                    acc += kv * src[sx as usize];
                }
            }
            dst[x] = acc;
        }
    }
    out
}

fn log_slice(
    slice: &SliceF32,
    gaussian: &[f32],
    laplacian: &[f32],
    kernel_size: usize,
) -> SliceF32 {
    let smoothed = convolve_2d(slice, gaussian, kernel_size);
    let mut response = convolve_2d(&smoothed, laplacian, kernel_size);

    let max_abs = response
        .data
        .iter()
        .fold(0.0f32, |acc, &v| acc.max(v.abs()));
    if max_abs > 0.0 {
        let inv = 1.0 / max_abs;
        for v in response.data.iter_mut() {
            *v *= inv;
        }
    }

    let (w, h) = (response.w, response.h);
    let mut out = SliceF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let center = response.get(x, y);
            let mut crossing = false;
            'neighbors: for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let neighbor =
                        response.get((x as i64 + dx) as usize, (y as i64 + dy) as usize);
                    if center * neighbor < 0.0 {
                        crossing = true;
                        break 'neighbors;
                    }
                }
            }
            if crossing {
                out.set(x, y, 1.0);
            }
        }
    }
    out
}
