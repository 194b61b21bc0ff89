use super::*;
use crate::params::{KMeansParams, RegionGrowParams, ThresholdParams};
use crate::volume::VolumeF32;

fn ramp_volume_x(w: usize, h: usize, d: usize) -> VolumeF32 {
    let mut vol = VolumeF32::new(w, h, d);
    for z in 0..d {
        for y in 0..h {
            for x in 0..w {
                vol.set(x, y, z, x as f32);
            }
        }
    }
    vol
}

#[test]
fn threshold_selects_middle_band_of_ramp() {
    let vol = ramp_volume_x(8, 2, 2);
    let params = ThresholdParams {
        min_fraction: 0.25,
        max_fraction: 0.75,
    };
    let mask = threshold_range(&vol, &params);

    // Range is [0, 7]; band is [1.75, 5.25], so x in {2..=5} is selected.
    for x in 0..8 {
        let expected = if (2..=5).contains(&x) { 1.0 } else { 0.0 };
        assert_eq!(
            mask.get(x, 0, 0),
            expected,
            "unexpected mask value at x={x}"
        );
    }
}

#[test]
fn threshold_is_idempotent_on_binary_volumes() {
    let vol = ramp_volume_x(8, 2, 2);
    let params = ThresholdParams {
        min_fraction: 0.5,
        max_fraction: 1.0,
    };
    let once = threshold_range(&vol, &params);
    let twice = threshold_range(&once, &params);
    assert_eq!(once.data, twice.data, "re-thresholding a mask changed it");
}

#[test]
fn region_grow_requires_a_seed() {
    let vol = ramp_volume_x(4, 4, 4);
    let params = RegionGrowParams {
        seed: None,
        tolerance: 0.5,
    };
    assert!(grow_region(&vol, &params).is_err());
}

#[test]
fn region_grow_rejects_out_of_bounds_seed() {
    let vol = ramp_volume_x(4, 4, 4);
    let params = RegionGrowParams {
        seed: Some([4, 0, 0]),
        tolerance: 0.5,
    };
    assert!(grow_region(&vol, &params).is_err());
}

#[test]
fn region_grow_isolated_bright_voxel_stays_alone() {
    let mut vol = VolumeF32::new(8, 8, 8);
    vol.set(4, 4, 4, 1.0);
    let params = RegionGrowParams {
        seed: Some([4, 4, 4]),
        tolerance: 0.5,
    };
    let mask = grow_region(&vol, &params).unwrap();

    let selected: usize = mask.data.iter().filter(|&&v| v == 1.0).count();
    assert_eq!(selected, 1, "expected the region to contain only the seed");
    assert_eq!(mask.get(4, 4, 4), 1.0);
}

#[test]
fn region_grow_is_monotone_in_tolerance() {
    let vol = ramp_volume_x(16, 4, 4);
    let seed = Some([8, 2, 2]);

    let narrow = grow_region(
        &vol,
        &RegionGrowParams {
            seed,
            tolerance: 0.1,
        },
    )
    .unwrap();
    let wide = grow_region(
        &vol,
        &RegionGrowParams {
            seed,
            tolerance: 0.4,
        },
    )
    .unwrap();

    for (i, (&n, &w)) in narrow.data.iter().zip(&wide.data).enumerate() {
        assert!(
            w >= n,
            "widening the tolerance dropped voxel {i} from the region"
        );
    }
}

#[test]
fn kmeans_single_cluster_converges_to_global_mean() {
    let vol = ramp_volume_x(11, 1, 1);
    let params = KMeansParams {
        k: 1,
        max_iterations: 5,
    };
    let clustered = cluster_intensities(&vol, &params);

    // Normalized ramp 0..1 has mean 0.5; output is rescaled to [0, 255].
    for &v in &clustered.data {
        assert!(
            (v - 127.5).abs() < 0.1,
            "expected all voxels at the global mean, got {v}"
        );
    }
}

#[test]
fn kmeans_runs_are_deterministic() {
    let vol = ramp_volume_x(16, 4, 4);
    let params = KMeansParams {
        k: 3,
        max_iterations: 30,
    };
    let first = cluster_intensities(&vol, &params);
    let second = cluster_intensities(&vol, &params);
    assert_eq!(first.data, second.data, "two runs diverged");
}

#[test]
fn kmeans_separates_two_intensity_populations() {
    let mut vol = VolumeF32::new(8, 8, 2);
    for z in 0..2 {
        for y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 10.0 } else { 200.0 };
                vol.set(x, y, z, v);
            }
        }
    }
    let params = KMeansParams {
        k: 2,
        max_iterations: 30,
    };
    let clustered = cluster_intensities(&vol, &params);

    let low = clustered.get(0, 0, 0);
    let high = clustered.get(7, 7, 1);
    assert!(
        (high - low).abs() > 100.0,
        "expected two well-separated cluster values, got {low} and {high}"
    );
    assert_eq!(clustered.get(1, 3, 0), low);
    assert_eq!(clustered.get(5, 2, 1), high);
}
