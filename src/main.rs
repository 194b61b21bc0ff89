use volume_processor::prelude::*;

fn main() {
    // Demo stub: builds a synthetic volume with a bright core and runs a
    // couple of kernels through the dispatcher.
    let (w, h, d) = (64usize, 64usize, 16usize);
    let mut volume = VolumeF32::new(w, h, d);
    for z in 4..12 {
        for y in 16..48 {
            for x in 16..48 {
                volume.set(x, y, z, 100.0);
            }
        }
    }

    let mut session = Session::new();
    session.load(volume);

    let smoothed = session
        .run(&AlgorithmParams::MeanFilter(MeanFilterParams {
            kernel_size: 3,
        }))
        .expect("valid mean filter parameters");
    println!(
        "mean filter: kind={:?} latency_ms={:.3}",
        smoothed.kind, smoothed.latency_ms
    );
    session.commit(smoothed);

    let mask = session
        .run(&AlgorithmParams::RegionGrow(RegionGrowParams {
            seed: Some([32, 32, 8]),
            tolerance: 0.3,
        }))
        .expect("valid region grow parameters");
    let voxels = mask.volume.data.iter().filter(|&&v| v == 1.0).count();
    println!(
        "region grow: kind={:?} voxels={} latency_ms={:.3}",
        mask.kind, voxels, mask.latency_ms
    );
}
