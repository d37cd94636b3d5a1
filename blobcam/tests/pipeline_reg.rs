//! Frame pipeline regression test
//!
//! Run with:
//! ```
//! cargo test -p blobcam --test pipeline_reg
//! ```

use blobcam::morph::BorderMode;
use blobcam::threshold::ThresholdMode;
use blobcam::{Box, FrameGeometry, FramePool, FrameProcessor, PipelineOptions, Plane, mask};
use blobcam_test::{RegParams, blob_frame, sprinkle};

fn pool_from(gray: &Plane) -> FramePool {
    let (w, h) = gray.dimensions();
    let geometry = FrameGeometry::new(w, h).expect("geometry");
    let mut pool = FramePool::new(geometry).expect("pool");
    pool.load_grayscale(gray.data()).expect("load");
    pool
}

#[test]
fn pipeline_small_frame_reg() {
    let mut rp = RegParams::new("pipeline_small_frame");

    // -----------------------------------------------------------
    // 4x4 frame, 2x2 block of 200 on 10, manual 50%
    // -----------------------------------------------------------
    let block = Box::new(1, 1, 2, 2).expect("box");
    let gray = blob_frame(4, 4, 10, 200, &[block]).expect("frame");
    let mut pool = pool_from(&gray);
    let mut opts = PipelineOptions::for_geometry(pool.geometry());
    opts.threshold_percent = 50;
    let mut processor = FrameProcessor::new(opts.clone()).expect("processor");
    let report = processor.process(&mut pool).expect("process");

    rp.compare_values(127.0, report.threshold() as f64, 0.0);
    rp.check(
        report.selection.mode == ThresholdMode::Manual(127),
        "mode is not manual",
    );

    // The 10-valued ring is foreground, the 200 block background
    let expected_threshold = Plane::from_rows(&[
        &[0xFF, 0xFF, 0xFF, 0xFF],
        &[0xFF, 0x00, 0x00, 0xFF],
        &[0xFF, 0x00, 0x00, 0xFF],
        &[0xFF, 0xFF, 0xFF, 0xFF],
    ])
    .expect("plane");
    rp.compare_planes(&expected_threshold, &pool.threshold);

    // Every interior window holds a background sample, so the cleared
    // ring leaves nothing behind
    rp.compare_values(0.0, pool.dilation.count_value(mask::FOREGROUND) as f64, 0.0);
    rp.compare_values(0.0, report.region_count as f64, 0.0);
    rp.compare_planes(&gray, &pool.grayscale);

    // -----------------------------------------------------------
    // Same frame with the outer ring copied through
    // -----------------------------------------------------------
    let mut pool = pool_from(&gray);
    opts.border = BorderMode::Copy;
    let mut processor = FrameProcessor::new(opts).expect("processor");
    let report = processor.process(&mut pool).expect("process");

    // Erosion: ring copied (all 0xFF), interior 0x00. Dilation: every
    // interior window touches the ring, so the whole plane is foreground.
    rp.compare_values(1.0, report.region_count as f64, 0.0);
    let r = processor.regions().as_slice()[0];
    rp.compare_boxes(&[Box::new(0, 0, 4, 4).expect("box")], &[r.bounds]);
    rp.compare_values(16.0, r.area as f64, 0.0);
    rp.compare_values(12.0, pool.grayscale.count_value(255) as f64, 0.0);
    rp.compare_values(4.0, pool.grayscale.count_value(200) as f64, 0.0);
    rp.compare_values(12.0, pool.dilation.count_value(128) as f64, 0.0);
    rp.compare_values(4.0, pool.dilation.count_value(mask::FOREGROUND) as f64, 0.0);

    assert!(rp.cleanup(), "pipeline_small_frame regression test failed");
}

#[test]
fn pipeline_idempotent_reg() {
    let mut rp = RegParams::new("pipeline_idempotent");

    // Listed in raster order of each blob's first pixel
    let blobs = [
        Box::new(70, 5, 6, 25).expect("box"),
        Box::new(10, 8, 20, 12).expect("box"),
        Box::new(50, 30, 9, 9).expect("box"),
    ];
    let mut gray = blob_frame(96, 48, 170, 40, &blobs).expect("frame");
    // Dark specks that the opening must remove
    sprinkle(&mut gray, 25, 40, 11);

    let geometry = FrameGeometry::new(96, 48).expect("geometry");
    let mut processor =
        FrameProcessor::new(PipelineOptions::for_geometry(geometry)).expect("processor");

    let mut first = FramePool::new(geometry).expect("pool");
    first.grayscale.copy_from(&gray).expect("copy");
    let r1 = processor.process(&mut first).expect("process");
    let regions1: Vec<Box> = processor.regions().boxes().copied().collect();

    let mut second = FramePool::new(geometry).expect("pool");
    second.grayscale.copy_from(&gray).expect("copy");
    let r2 = processor.process(&mut second).expect("process");
    let regions2: Vec<Box> = processor.regions().boxes().copied().collect();

    rp.check(r1 == r2, "reports differ between runs");
    rp.compare_boxes(&regions1, &regions2);
    rp.compare_planes(&first.grayscale, &second.grayscale);
    rp.compare_planes(&first.threshold, &second.threshold);
    rp.compare_planes(&first.erosion, &second.erosion);
    rp.compare_planes(&first.dilation, &second.dilation);

    // Reusing the same pool with a fresh copy of the input gives the same
    // planes again, whatever the other planes held before
    first.grayscale.copy_from(&gray).expect("copy");
    let r3 = processor.process(&mut first).expect("process");
    rp.check(r1 == r3, "report differs on a reused pool");
    rp.compare_planes(&second.dilation, &first.dilation);

    rp.compare_values(41.0, r1.threshold() as f64, 0.0);
    rp.compare_values(3.0, r1.region_count as f64, 0.0);
    rp.compare_boxes(&blobs, &regions1);

    assert!(rp.cleanup(), "pipeline_idempotent regression test failed");
}

#[test]
fn pipeline_overflow_reg() {
    let mut rp = RegParams::new("pipeline_overflow");

    // Six separate blobs in one row
    let blobs: Vec<Box> = (0..6)
        .map(|i| Box::new(2 + i * 8, 3, 5, 5).expect("box"))
        .collect();
    let gray = blob_frame(52, 12, 200, 20, &blobs).expect("frame");
    let mut pool = pool_from(&gray);
    let mut opts = PipelineOptions::for_geometry(pool.geometry());
    opts.region_capacity = 4;
    let mut processor = FrameProcessor::new(opts).expect("processor");

    // Overflow is reported, not returned as an error
    let report = processor.process(&mut pool).expect("process");
    rp.check(report.overflowed, "overflow not reported");
    rp.compare_values(6.0, report.region_count as f64, 0.0);
    rp.compare_values(4.0, report.regions_drawn as f64, 0.0);
    rp.compare_boxes(
        &blobs[..4],
        &processor.regions().boxes().copied().collect::<Vec<_>>(),
    );

    // Only the first four blobs carry outlines
    for (i, b) in blobs.iter().enumerate() {
        let corner = pool.grayscale.get(b.y as u32, b.x as u32);
        let expected = if i < 4 { 255 } else { 20 };
        rp.check(corner == Some(expected), "unexpected outline state");
    }

    assert!(rp.cleanup(), "pipeline_overflow regression test failed");
}

#[test]
fn pipeline_modes_reg() {
    let mut rp = RegParams::new("pipeline_modes");

    let blob = Box::new(6, 6, 10, 10).expect("box");
    let gray = blob_frame(32, 24, 150, 90, &[blob]).expect("frame");
    let geometry = FrameGeometry::new(32, 24).expect("geometry");
    let mut pool = FramePool::new(geometry).expect("pool");
    let mut processor =
        FrameProcessor::new(PipelineOptions::for_geometry(geometry)).expect("processor");

    // Automatic: cut between the two levels
    pool.grayscale.copy_from(&gray).expect("copy");
    let auto = processor.process(&mut pool).expect("process");
    rp.compare_values(91.0, auto.threshold() as f64, 0.0);
    rp.check(
        auto.selection.max_variance.is_some(),
        "no variance reported",
    );
    rp.compare_values(1.0, auto.region_count as f64, 0.0);

    // Manual 20% (51): both levels are background
    processor.set_threshold_percent(20).expect("percent");
    pool.grayscale.copy_from(&gray).expect("copy");
    let low = processor.process(&mut pool).expect("process");
    rp.compare_values(51.0, low.threshold() as f64, 0.0);
    rp.compare_values(0.0, low.region_count as f64, 0.0);
    rp.compare_values(
        0.0,
        pool.threshold.count_value(mask::FOREGROUND) as f64,
        0.0,
    );

    // Manual 100% (255): the whole frame is foreground
    processor.set_threshold_percent(100).expect("percent");
    pool.grayscale.copy_from(&gray).expect("copy");
    let high = processor.process(&mut pool).expect("process");
    rp.compare_values(255.0, high.threshold() as f64, 0.0);
    rp.compare_values(1.0, high.region_count as f64, 0.0);
    rp.compare_boxes(
        &[Box::new(1, 1, 30, 22).expect("box")],
        &[processor.regions().as_slice()[0].bounds],
    );

    // Back to automatic
    processor.set_threshold_percent(0).expect("percent");
    pool.grayscale.copy_from(&gray).expect("copy");
    let again = processor.process(&mut pool).expect("process");
    rp.check(again == auto, "automatic run changed after manual runs");

    // Out of range setting is refused and leaves the mode alone
    rp.check(
        processor.set_threshold_percent(101).is_err(),
        "101% accepted",
    );
    rp.check(
        processor.threshold_mode() == ThresholdMode::Automatic,
        "mode changed by rejected setting",
    );

    // Core error module is reachable through the umbrella crate
    rp.check(
        matches!(
            Plane::new(0, 4),
            Err(blobcam::error::Error::InvalidDimension { .. })
        ),
        "core error not re-exported",
    );

    // Geometry mismatch fails fast
    let other_geometry = FrameGeometry::new(16, 16).expect("geometry");
    let mut other = FramePool::new(other_geometry).expect("pool");
    rp.check(
        processor.process(&mut other).is_err(),
        "mismatched pool accepted",
    );

    assert!(rp.cleanup(), "pipeline_modes regression test failed");
}
