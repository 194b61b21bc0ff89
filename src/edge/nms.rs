//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! The gradient direction is quantized into four bins (0°, 45°, 90°, 135°,
//! modulo 180°) and a pixel survives only if its magnitude is at least as
//! large as both neighbors along the quantized direction. The outermost
//! 1-pixel frame is ignored to avoid out-of-bounds neighbor lookups.

use crate::edge::grad::Grad;
use crate::volume::SliceF32;

/// Suppress non-maximal magnitudes, returning a dense thinned-magnitude
/// plane (zero where suppressed).
pub fn suppress_non_maxima(grad: &Grad) -> SliceF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = SliceF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag == 0.0 {
                continue;
            }

            let angle = gy_row[x].atan2(gx_row[x]).to_degrees();
            let folded = ((angle % 180.0) + 180.0) % 180.0;

            let (neighbor1, neighbor2) = if !(22.5..157.5).contains(&folded) {
                // 0 degrees: horizontal gradient, compare left/right.
                (mag_row[x - 1], mag_row[x + 1])
            } else if folded < 67.5 {
                // 45 degrees: compare along the rising diagonal.
                (mag_prev[x + 1], mag_next[x - 1])
            } else if folded < 112.5 {
                // 90 degrees: vertical gradient, compare above/below.
                (mag_prev[x], mag_next[x])
            } else {
                // 135 degrees: compare along the falling diagonal.
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag >= neighbor1 && mag >= neighbor2 {
                out_row[x] = mag;
            }
        }
    }

    out
}
