use super::*;
use crate::params::{BilateralParams, DiffusionParams, MeanFilterParams, MedianFilterParams};
use crate::volume::VolumeF32;

fn constant_volume(w: usize, h: usize, d: usize, value: f32) -> VolumeF32 {
    let mut vol = VolumeF32::new(w, h, d);
    for v in vol.data.iter_mut() {
        *v = value;
    }
    vol
}

#[test]
fn mean_preserves_constant_volume() {
    let vol = constant_volume(6, 5, 4, 3.25);
    let out = mean_filter(&vol, &MeanFilterParams { kernel_size: 5 });
    for (i, &v) in out.data.iter().enumerate() {
        assert!(
            (v - 3.25).abs() < 1e-6,
            "voxel {i} drifted on a constant volume: {v}"
        );
    }
}

#[test]
fn median_preserves_constant_volume() {
    let vol = constant_volume(6, 5, 4, -1.5);
    let out = median_filter(&vol, &MedianFilterParams { kernel_size: 3 });
    assert!(out.data.iter().all(|&v| v == -1.5));
}

#[test]
fn median_removes_an_isolated_impulse() {
    let mut vol = constant_volume(5, 5, 5, 1.0);
    vol.set(2, 2, 2, 100.0);
    let out = median_filter(&vol, &MedianFilterParams { kernel_size: 3 });
    assert_eq!(
        out.get(2, 2, 2),
        1.0,
        "median should reject a single outlier in a 27-voxel window"
    );
}

#[test]
fn mean_averages_clamped_corner_window() {
    // 2x2x2 volume, kernel 3: every window covers the whole volume.
    let mut vol = VolumeF32::new(2, 2, 2);
    for (i, v) in vol.data.iter_mut().enumerate() {
        *v = i as f32;
    }
    let expected = vol.data.iter().sum::<f32>() / 8.0;
    let out = mean_filter(&vol, &MeanFilterParams { kernel_size: 3 });
    for &v in &out.data {
        assert!((v - expected).abs() < 1e-6);
    }
}

#[test]
fn bilateral_with_huge_sigmas_matches_mean() {
    let mut vol = VolumeF32::new(6, 6, 3);
    for (i, v) in vol.data.iter_mut().enumerate() {
        *v = (i % 13) as f32;
    }
    let mean = mean_filter(&vol, &MeanFilterParams { kernel_size: 3 });
    let bilateral = bilateral_filter(
        &vol,
        &BilateralParams {
            window_size: 3,
            sigma_space: 1e6,
            sigma_range: 1e6,
        },
    );
    for (i, (&m, &b)) in mean.data.iter().zip(&bilateral.data).enumerate() {
        assert!(
            (m - b).abs() < 1e-3,
            "voxel {i}: bilateral {b} should approach mean {m} for large sigmas"
        );
    }
}

#[test]
fn bilateral_preserves_a_strong_step() {
    let mut vol = VolumeF32::new(8, 4, 4);
    for z in 0..4 {
        for y in 0..4 {
            for x in 0..8 {
                vol.set(x, y, z, if x < 4 { 0.0 } else { 100.0 });
            }
        }
    }
    let out = bilateral_filter(
        &vol,
        &BilateralParams {
            window_size: 3,
            sigma_space: 1.0,
            sigma_range: 1.0,
        },
    );
    // With a narrow range sigma the 100-step contributes ~zero weight.
    assert!(out.get(3, 2, 2) < 1.0, "dark side leaked: {}", out.get(3, 2, 2));
    assert!(out.get(4, 2, 2) > 99.0, "bright side leaked: {}", out.get(4, 2, 2));
}

#[test]
fn diffusion_keeps_borders_and_smooths_interior() {
    let mut vol = VolumeF32::new(5, 5, 5);
    vol.set(2, 2, 2, 10.0);
    let out = anisotropic_diffusion(
        &vol,
        &DiffusionParams {
            iterations: 3,
            kappa: 50.0,
            lambda: 0.1,
        },
    );

    assert_eq!(out.dims(), vol.dims());
    assert_eq!(out.get(0, 0, 0), 0.0, "border voxel must stay unmodified");
    assert_eq!(out.get(4, 2, 2), 0.0, "border voxel must stay unmodified");
    assert!(
        out.get(2, 2, 2) < 10.0,
        "peak should diffuse outward, got {}",
        out.get(2, 2, 2)
    );
    assert!(
        out.get(2, 2, 1) > 0.0,
        "interior neighbor should have received mass"
    );
}

#[test]
fn diffusion_preserves_constant_volume() {
    let vol = constant_volume(4, 4, 4, 7.0);
    let out = anisotropic_diffusion(
        &vol,
        &DiffusionParams {
            iterations: 5,
            kappa: 10.0,
            lambda: 0.25,
        },
    );
    assert!(out.data.iter().all(|&v| (v - 7.0).abs() < 1e-6));
}
