//! Sobel gradients with magnitude on a single plane.
//!
//! Convolves the standard 3×3 kernel pair and outputs per-pixel `gx`,
//! `gy`, `mag = sqrt(gx² + gy²)`. Gradients are computed for interior
//! pixels only; the outermost 1-pixel frame stays zero.

use crate::volume::SliceF32;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: SliceF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: SliceF32,
    /// Euclidean magnitude per pixel: `sqrt(gx² + gy²)`
    pub mag: SliceF32,
}

/// Compute Sobel gradients on a single-channel float plane.
pub fn sobel_gradients(l: &SliceF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = SliceF32::new(w, h);
    let mut gy = SliceF32::new(w, h);
    let mut mag = SliceF32::new(w, h);

    if w < 3 || h < 3 {
        return Grad { gx, gy, mag };
    }

    for y in 1..h - 1 {
        let rows = [l.row(y - 1), l.row(y), l.row(y + 1)];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 1..w - 1 {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x - 1] * kx_row[0] + row[x] * kx_row[1] + row[x + 1] * kx_row[2];
                sum_y += row[x - 1] * ky_row[0] + row[x] * ky_row[1] + row[x + 1] * ky_row[2];
            }
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}
