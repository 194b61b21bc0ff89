//! Seeded breadth-first flood fill with an intensity tolerance band.
//!
//! Traversal is queue-based (FIFO), never recursive, so deep regions on
//! large volumes cannot grow the call stack. Each voxel is evaluated at
//! most once: the first neighbor to reach it marks it visited, and a voxel
//! that fails the tolerance test is not re-tested from other paths.

use std::collections::VecDeque;

use log::debug;

use crate::error::ProcessError;
use crate::params::RegionGrowParams;
use crate::volume::VolumeF32;

/// Face-neighbor offsets (6-connectivity).
const FACE_NEIGHBORS: [(i64, i64, i64); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Grow a region from the seed voxel, admitting neighbors whose intensity
/// stays within `tolerance * (max - min)` of the seed's intensity.
///
/// Returns a binary mask. Fails with a precondition error when no seed was
/// supplied and a configuration error when the seed lies outside the
/// volume.
pub fn grow_region(volume: &VolumeF32, params: &RegionGrowParams) -> Result<VolumeF32, ProcessError> {
    let seed = params
        .seed
        .ok_or_else(|| ProcessError::precondition("seed point for region growing"))?;
    let [sx, sy, sz] = seed;
    if !volume.contains(sx as i64, sy as i64, sz as i64) {
        return Err(ProcessError::config(
            "region_grow",
            format!(
                "seed ({sx}, {sy}, {sz}) lies outside the {}x{}x{} volume",
                volume.w, volume.h, volume.d
            ),
        ));
    }
    let (sx, sy, sz) = (sx as usize, sy as usize, sz as usize);

    let (min_val, max_val) = volume.min_max();
    let tolerance_range = params.tolerance * (max_val - min_val);
    let seed_value = volume.get(sx, sy, sz);

    let mut out = VolumeF32::new(volume.w, volume.h, volume.d);
    let mut visited = vec![false; volume.len()];
    let mut frontier: VecDeque<(usize, usize, usize)> = VecDeque::new();

    let seed_idx = volume.idx(sx, sy, sz);
    visited[seed_idx] = true;
    out.data[seed_idx] = 1.0;
    frontier.push_back((sx, sy, sz));

    let mut admitted = 1usize;
    while let Some((x, y, z)) = frontier.pop_front() {
        for &(dx, dy, dz) in &FACE_NEIGHBORS {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            let nz = z as i64 + dz;
            if !volume.contains(nx, ny, nz) {
                continue;
            }
            let (nx, ny, nz) = (nx as usize, ny as usize, nz as usize);
            let n_idx = volume.idx(nx, ny, nz);
            if visited[n_idx] {
                continue;
            }
            // One-shot evaluation: mark before testing so a failing voxel
            // is never re-tested from another neighbor.
            visited[n_idx] = true;
            if (volume.data[n_idx] - seed_value).abs() <= tolerance_range {
                out.data[n_idx] = 1.0;
                admitted += 1;
                frontier.push_back((nx, ny, nz));
            }
        }
    }

    debug!(
        "region_grow seed=({sx},{sy},{sz}) tolerance_range={tolerance_range:.4} admitted={admitted}"
    );
    Ok(out)
}
