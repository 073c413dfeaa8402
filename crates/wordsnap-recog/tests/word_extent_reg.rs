//! Word extent regression test
//!
//! End-to-end detector runs on synthetic frames:
//!   (1) dark square on light background, default and reduced erosion,
//!       and the overshoot for each erosion radius
//!   (2) light square on dark background
//!   (3) a noisy word made of separated strokes
//!   (4) a flat frame, which must finish with both warnings set
//!   (5) region growing bounds on all-foreground / all-background buffers

use wordsnap_core::{GrayBuffer, Rect};
use wordsnap_filter::Polarity;
use wordsnap_recog::{DetectorConfig, FOREGROUND, WordExtentDetector, grow_region, seed_rect};
use wordsnap_test::RegParams;
use wordsnap_test::synth::{add_noise, block_frame, stroked_word};

fn compare_rect(rp: &mut RegParams, expected: Rect, actual: Rect, delta: f64) {
    rp.compare_values(expected.left as f64, actual.left as f64, delta);
    rp.compare_values(expected.top as f64, actual.top as f64, delta);
    rp.compare_values(expected.right as f64, actual.right as f64, delta);
    rp.compare_values(expected.bottom as f64, actual.bottom as f64, delta);
}

#[test]
fn word_extent_reg_dark_square() {
    let mut rp = RegParams::new("word_extent_dark_square");

    let square = Rect::new(45, 45, 55, 55).expect("rect");
    let frame = block_frame(100, 100, 255, 0, &square).expect("frame");

    let det = WordExtentDetector::new(DetectorConfig::default()).expect("detector");
    let ext = det.detect(&frame).expect("detect");

    // Binarization keeps exactly the square; two radius-2 erosions widen
    // it by 2 on each side.
    compare_rect(&mut rp, Rect::new_unchecked(43, 43, 57, 57), ext.rect, 0.0);
    rp.compare_values(1.0, (ext.polarity == Polarity::DarkOnLight) as u8 as f64, 0.0);
    rp.compare_values(8.0, ext.threshold_offset as f64, 0.0);
    rp.compare_values(1.0, (ext.passes <= 20) as u8 as f64, 0.0);
    rp.compare_values(0.0, ext.warnings.any() as u8 as f64, 0.0);

    let word = ext.crop().expect("crop");
    let expected = GrayBuffer::new_filled(14, 14, FOREGROUND).expect("buffer");
    rp.compare_buffers(&expected, &word);

    // Radius 1 erosion: within one pixel of the square
    let cfg = DetectorConfig {
        erosion_radius: 1,
        ..Default::default()
    };
    let det = WordExtentDetector::new(cfg).expect("detector");
    let ext = det.detect(&frame).expect("detect");
    compare_rect(&mut rp, square, ext.rect, 1.0);

    assert!(rp.cleanup(), "word_extent_dark_square regression test failed");
}

#[test]
fn word_extent_reg_erosion_overshoot() {
    let mut rp = RegParams::new("word_extent_erosion_overshoot");

    let square = Rect::new(45, 45, 55, 55).expect("rect");
    let frame = block_frame(100, 100, 255, 0, &square).expect("frame");

    // The extent grows past the ink by exactly erosion_radius per edge
    for r in 0..=3u32 {
        let cfg = DetectorConfig {
            erosion_radius: r,
            ..Default::default()
        };
        let det = WordExtentDetector::new(cfg).expect("detector");
        let ext = det.detect(&frame).expect("detect");
        let expected = Rect::new_unchecked(45 - r, 45 - r, 55 + r, 55 + r);
        compare_rect(&mut rp, expected, ext.rect, 0.0);
    }

    assert!(rp.cleanup(), "word_extent_erosion_overshoot regression test failed");
}

#[test]
fn word_extent_reg_light_square() {
    let mut rp = RegParams::new("word_extent_light_square");

    let square = Rect::new(45, 45, 55, 55).expect("rect");
    let frame = block_frame(100, 100, 0, 255, &square).expect("frame");

    let det = WordExtentDetector::new(DetectorConfig::default()).expect("detector");
    let ext = det.detect(&frame).expect("detect");

    rp.compare_values(1.0, (ext.polarity == Polarity::LightOnDark) as u8 as f64, 0.0);
    compare_rect(&mut rp, Rect::new_unchecked(43, 43, 57, 57), ext.rect, 1.0);

    assert!(rp.cleanup(), "word_extent_light_square regression test failed");
}

#[test]
fn word_extent_reg_stroked_word() {
    let mut rp = RegParams::new("word_extent_strokes");

    // 3-pixel strokes with 3-pixel gaps; the last stroke ends at x = 140
    let word = Rect::new(60, 40, 140, 60).expect("rect");
    let det = WordExtentDetector::new(DetectorConfig::default()).expect("detector");

    for seed in [3u64, 17, 29] {
        let mut frame = stroked_word(200, 100, 230, 30, &word, 3, 3).expect("frame");
        add_noise(&mut frame, seed, 6);

        let ext = det.detect(&frame).expect("detect");
        compare_rect(&mut rp, Rect::new_unchecked(58, 38, 142, 62), ext.rect, 1.0);
        rp.compare_values(0.0, ext.warnings.touches_border as u8 as f64, 0.0);

        if rp.display() {
            let _ = rp.write_buffer_and_check(&ext.binary);
        }
    }

    assert!(rp.cleanup(), "word_extent_strokes regression test failed");
}

/// A flat frame has zero variance, so every pixel fails the threshold test
/// and lands in the foreground: the extent fills the frame.
#[test]
fn word_extent_reg_flat_frame() {
    let mut rp = RegParams::new("word_extent_flat");

    let frame = GrayBuffer::new_filled(64, 48, 128).expect("frame");
    let det = WordExtentDetector::new(DetectorConfig::default()).expect("detector");
    let ext = det.detect(&frame).expect("detect");

    compare_rect(&mut rp, Rect::full(64, 48), ext.rect, 0.0);
    rp.compare_values(0.0, ext.threshold_offset as f64, 0.0);
    rp.compare_values(1.0, ext.warnings.touches_border as u8 as f64, 0.0);
    rp.compare_values(1.0, ext.warnings.low_contrast as u8 as f64, 0.0);

    assert!(rp.cleanup(), "word_extent_flat regression test failed");
}

#[test]
fn word_extent_reg_growth_bounds() {
    let mut rp = RegParams::new("word_extent_growth");

    for &(w, h) in &[(1u32, 1u32), (7, 3), (120, 80)] {
        let seed = seed_rect(w, h, 0.021, 0.033);

        let fg = GrayBuffer::new_filled(w, h, FOREGROUND).expect("buffer");
        let g = grow_region(&fg, seed).expect("grow");
        compare_rect(&mut rp, Rect::full(w, h), g.rect, 0.0);
        rp.compare_values(1.0, (g.passes <= w + h + 1) as u8 as f64, 0.0);

        let bg = GrayBuffer::new_filled(w, h, 255).expect("buffer");
        let g = grow_region(&bg, seed).expect("grow");
        compare_rect(&mut rp, seed, g.rect, 0.0);
        rp.compare_values(1.0, g.passes as f64, 0.0);
    }

    assert!(rp.cleanup(), "word_extent_growth regression test failed");
}
