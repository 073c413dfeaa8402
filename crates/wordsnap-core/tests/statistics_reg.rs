//! Region statistics regression test
//!
//! Cross-checks the direct scans against the histogram and against a
//! plain reference computation on random buffers:
//!   (1) histogram counts sum to the region area
//!   (2) a 1x1 region has variance 0 and mean equal to the pixel
//!   (3) histogram moments agree with the direct mean and variance
//!   (4) fused stats agree with the individual scans

use wordsnap_core::{GrayBuffer, Rect};
use wordsnap_test::RegParams;
use wordsnap_test::synth::random_buffer;

fn reference_mean_var(buf: &GrayBuffer, r: &Rect) -> (f64, f64) {
    let mut vals = Vec::new();
    for y in r.top..r.bottom {
        for x in r.left..r.right {
            vals.push(buf.get_pixel(x, y) as f64);
        }
    }
    let n = vals.len() as f64;
    let mean = vals.iter().sum::<f64>() / n;
    let var = vals.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var)
}

#[test]
fn statistics_reg() {
    let mut rp = RegParams::new("statistics");

    let regions = [
        Rect::new_unchecked(0, 0, 64, 48),
        Rect::new_unchecked(5, 7, 40, 31),
        Rect::new_unchecked(63, 0, 64, 48),
        Rect::new_unchecked(10, 20, 11, 21),
    ];

    for seed in [1u64, 2, 3] {
        let buf = random_buffer(seed, 64, 48).expect("random buffer");
        for r in &regions {
            let hist = buf.histogram(Some(r)).expect("histogram");
            rp.compare_values(r.area() as f64, hist.total() as f64, 0.0);

            let stats = buf.stats(Some(r)).expect("stats");
            let (mean, var) = reference_mean_var(&buf, r);
            rp.compare_values(mean, stats.mean as f64, 1e-3);
            rp.compare_values(var, stats.variance as f64, 1e-2);

            rp.compare_values(stats.mean as f64, hist.mean().unwrap_or(-1.0) as f64, 1e-4);
            rp.compare_values(stats.variance as f64, hist.variance().unwrap_or(-1.0) as f64, 1e-2);
            rp.compare_values(stats.min as f64, buf.min_value(Some(r)).expect("min") as f64, 0.0);
            rp.compare_values(stats.max as f64, buf.max_value(Some(r)).expect("max") as f64, 0.0);
            rp.compare_values(stats.min as f64, hist.min_value().unwrap_or(0) as f64, 0.0);
            rp.compare_values(stats.max as f64, hist.max_value().unwrap_or(0) as f64, 0.0);
        }
    }

    // 1x1 regions
    let buf = random_buffer(9, 16, 16).expect("random buffer");
    for (x, y) in [(0, 0), (15, 15), (7, 3)] {
        let r = Rect::from_size(x, y, 1, 1);
        let stats = buf.stats(Some(&r)).expect("stats");
        rp.compare_values(buf.get_pixel(x, y) as f64, stats.mean as f64, 0.0);
        rp.compare_values(0.0, stats.variance as f64, 0.0);
        rp.compare_values(0.0, stats.range() as f64, 0.0);
    }

    // Rejected regions
    let bad = [Rect::new_unchecked(3, 3, 3, 9), Rect::new_unchecked(10, 10, 17, 12)];
    for r in &bad {
        let rejected = buf.stats(Some(r)).is_err() && buf.histogram(Some(r)).is_err();
        rp.compare_values(1.0, rejected as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "statistics regression test failed");
}
