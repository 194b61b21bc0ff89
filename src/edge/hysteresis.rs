//! Two-level hysteresis thresholding with seed-driven expansion.
//!
//! Pixels at or above the high threshold seed the edge set; pixels between
//! the two thresholds are promoted only if a breadth-first expansion over
//! 8-connectivity reaches them from a seed. The frontier is an explicit
//! FIFO queue over a visited mask, never recursion.

use std::collections::VecDeque;

use crate::volume::SliceF32;

/// Binarize a suppressed-magnitude plane with thresholds given as
/// fractions of the plane's own magnitude range.
pub fn hysteresis_threshold(mag: &SliceF32, low_fraction: f32, high_fraction: f32) -> SliceF32 {
    let w = mag.w;
    let h = mag.h;
    let mut out = SliceF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let (min_mag, max_mag) = mag.min_max();
    let span = max_mag - min_mag;
    if span <= 0.0 {
        return out;
    }
    let low = min_mag + low_fraction * span;
    let high = min_mag + high_fraction * span;

    let mut visited = vec![false; w * h];
    let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();

    for y in 0..h {
        let row = mag.row(y);
        for x in 0..w {
            if row[x] >= high {
                let idx = y * w + x;
                if !visited[idx] {
                    visited[idx] = true;
                    out.data[idx] = 1.0;
                    frontier.push_back((x, y));
                }
            }
        }
    }

    while let Some((x, y)) = frontier.pop_front() {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let idx = ny * w + nx;
                if visited[idx] {
                    continue;
                }
                visited[idx] = true;
                if mag.data[idx] >= low {
                    out.data[idx] = 1.0;
                    frontier.push_back((nx, ny));
                }
            }
        }
    }

    out
}
