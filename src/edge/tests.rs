use super::*;
use crate::params::{CannyParams, LogParams, RobertsParams};
use crate::volume::{SliceF32, VolumeF32};

fn step_plane(w: usize, h: usize, split_x: usize) -> SliceF32 {
    let mut plane = SliceF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            plane.set(x, y, if x < split_x { 0.0 } else { 1.0 });
        }
    }
    plane
}

fn step_volume(w: usize, h: usize, d: usize, split_x: usize) -> VolumeF32 {
    let mut vol = VolumeF32::new(w, h, d);
    let plane = step_plane(w, h, split_x);
    for z in 0..d {
        vol.write_slice_xy(z, &plane);
    }
    vol
}

fn is_binary(data: &[f32]) -> bool {
    data.iter().all(|&v| v == 0.0 || v == 1.0)
}

#[test]
fn sobel_responds_to_a_vertical_step() {
    let plane = step_plane(16, 16, 8);
    let grad = sobel_gradients(&plane);

    assert!(
        grad.mag.get(7, 8) > 0.0 || grad.mag.get(8, 8) > 0.0,
        "expected a response at the step"
    );
    assert_eq!(grad.mag.get(2, 8), 0.0, "flat area should have no response");
    assert!(
        grad.gy.get(7, 8).abs() < 1e-6,
        "a vertical edge has no y gradient"
    );
    // Border frame stays zero.
    assert_eq!(grad.mag.get(0, 0), 0.0);
    assert_eq!(grad.mag.get(15, 15), 0.0);
}

#[test]
fn canny_marks_a_vertical_edge_and_stays_binary() {
    let vol = step_volume(24, 16, 3, 12);
    let out = canny_edges(
        &vol,
        &CannyParams {
            kernel_size: 3,
            low_fraction: 0.1,
            high_fraction: 0.3,
        },
    );

    assert_eq!(out.dims(), vol.dims());
    assert!(is_binary(&out.data), "canny output must be a binary mask");
    let hits: usize = out.data.iter().filter(|&&v| v == 1.0).count();
    assert!(hits > 0, "expected edge pixels along the step");
    // The edge must hug the step; nothing fires in the far flat areas.
    for z in 0..3 {
        for y in 2..14 {
            assert_eq!(out.get(2, y, z), 0.0);
            assert_eq!(out.get(21, y, z), 0.0);
            let near_step: f32 = (10..14).map(|x| out.get(x, y, z)).sum();
            assert!(
                near_step > 0.0,
                "no edge pixel near the step at y={y} z={z}"
            );
        }
    }
}

#[test]
fn roberts_detects_the_step_and_stays_binary() {
    let vol = step_volume(12, 8, 2, 6);
    let out = roberts_edges(&vol, &RobertsParams { threshold: 0.5 });

    assert_eq!(out.dims(), vol.dims());
    assert!(is_binary(&out.data), "roberts output must be a binary mask");
    for z in 0..2 {
        for y in 0..7 {
            assert_eq!(out.get(5, y, z), 1.0, "missing edge at y={y} z={z}");
            assert_eq!(out.get(2, y, z), 0.0);
            assert_eq!(out.get(9, y, z), 0.0);
        }
    }
}

#[test]
fn roberts_flat_slice_has_no_edges() {
    let vol = VolumeF32::new(8, 8, 2);
    let out = roberts_edges(&vol, &RobertsParams { threshold: 0.1 });
    assert!(out.data.iter().all(|&v| v == 0.0));
}

#[test]
fn log_zero_crossings_follow_the_step_and_stay_binary() {
    let vol = step_volume(20, 12, 2, 10);
    let out = log_edges(
        &vol,
        &LogParams {
            sigma: 1.0,
            kernel_size: 5,
        },
    );

    assert_eq!(out.dims(), vol.dims());
    assert!(is_binary(&out.data), "log output must be a binary mask");
    let hits: usize = out.data.iter().filter(|&&v| v == 1.0).count();
    assert!(hits > 0, "expected zero crossings along the step");
    for z in 0..2 {
        for y in 3..9 {
            assert_eq!(out.get(2, y, z), 0.0, "flat region fired at y={y}");
            assert_eq!(out.get(17, y, z), 0.0, "flat region fired at y={y}");
        }
    }
}

#[test]
fn laplacian_kernel_is_embedded_centered() {
    // Exercised through a 5-tap LoG run on an impulse: the response must
    // be antisymmetric around the impulse, which only holds if the 3x3
    // stencil sits at the kernel center.
    let mut vol = VolumeF32::new(9, 9, 1);
    vol.set(4, 4, 0, 1.0);
    let out = log_edges(
        &vol,
        &LogParams {
            sigma: 1.0,
            kernel_size: 5,
        },
    );
    assert!(is_binary(&out.data));
    // The crossing ring around the impulse is symmetric in x and y.
    for r in 1..4 {
        assert_eq!(out.get(4 - r, 4, 0), out.get(4 + r, 4, 0));
        assert_eq!(out.get(4, 4 - r, 0), out.get(4, 4 + r, 0));
    }
}
