use volume_processor::VolumeF32;

/// Generates a volume ramping 0..=255 along x, constant in y and z.
pub fn ramp_volume_x(width: usize, height: usize, depth: usize) -> VolumeF32 {
    assert!(width > 1, "ramp needs at least two samples along x");
    let mut vol = VolumeF32::new(width, height, depth);
    let step = 255.0 / (width - 1) as f32;
    for z in 0..depth {
        for y in 0..height {
            for x in 0..width {
                vol.set(x, y, z, x as f32 * step);
            }
        }
    }
    vol
}

/// Generates a zero volume with a single bright voxel.
pub fn impulse_volume(
    width: usize,
    height: usize,
    depth: usize,
    at: (usize, usize, usize),
    value: f32,
) -> VolumeF32 {
    let mut vol = VolumeF32::new(width, height, depth);
    vol.set(at.0, at.1, at.2, value);
    vol
}

/// Generates a flat slice volume with one bright axis-aligned block.
pub fn block_volume(
    width: usize,
    height: usize,
    depth: usize,
    x_range: std::ops::Range<usize>,
    y_range: std::ops::Range<usize>,
    value: f32,
) -> VolumeF32 {
    let mut vol = VolumeF32::new(width, height, depth);
    for z in 0..depth {
        for y in y_range.clone() {
            for x in x_range.clone() {
                vol.set(x, y, z, value);
            }
        }
    }
    vol
}
