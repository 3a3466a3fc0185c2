//! Tone curve regression test
//!
//! Linear contrast and histogram equalization.

use pixlab_filter::{adjust_contrast, contrast_trc, equalize_histogram, trc_map};
use pixlab_test::{RegParams, flat_grid, gradient_grid, pattern_grid};

#[test]
fn enhance_reg() {
    let mut rp = RegParams::new("enhance");

    // --- Test 1: 4x4 of 100 with factor 2.0 becomes 72 everywhere ---
    let pixs = flat_grid(4, 4, 100).expect("flat_grid");
    let out = adjust_contrast(&pixs, 2.0);
    rp.compare_grids(&flat_grid(4, 4, 72).unwrap(), &out);

    // --- Test 2: Factor 1.0 is the identity ---
    let pixs = pattern_grid(19, 11, 4).unwrap();
    rp.compare_grids(&pixs, &adjust_contrast(&pixs, 1.0));

    // --- Test 3: Contrast is a table lookup ---
    let lut = contrast_trc(1.5);
    rp.compare_grids(&trc_map(&pixs, &lut), &adjust_contrast(&pixs, 1.5));

    // --- Test 4: Contrast is monotone for positive factors ---
    for factor in [0.25, 1.5, 3.0] {
        let lut = contrast_trc(factor);
        rp.check(lut.windows(2).all(|w| w[0] <= w[1]), "contrast lut monotone");
    }

    // --- Test 5: Flat image equalizes to all zeros ---
    let flat = flat_grid(6, 6, 180).unwrap();
    rp.compare_grids(&flat_grid(6, 6, 0).unwrap(), &equalize_histogram(&flat));

    // --- Test 6: Equalization stretches to the full range ---
    let ramp = gradient_grid(12, 9).unwrap();
    let eq = equalize_histogram(&ramp);
    rp.compare_values(ramp.width() as f64, eq.width() as f64, 0.0);
    rp.compare_values(ramp.height() as f64, eq.height() as f64, 0.0);
    let min = eq.data().iter().min().copied().unwrap_or(255);
    let max = eq.data().iter().max().copied().unwrap_or(0);
    rp.compare_values(0.0, min as f64, 0.0);
    rp.compare_values(255.0, max as f64, 0.0);

    // --- Test 7: Equalization preserves sample order ---
    let pixs = pattern_grid(15, 15, 8).unwrap();
    let eq = equalize_histogram(&pixs);
    let ordered = pixs
        .data()
        .iter()
        .zip(eq.data())
        .zip(pixs.data().iter().zip(eq.data()).skip(1))
        .all(|((&a, &ea), (&b, &eb))| (a < b) <= (ea <= eb));
    rp.check(ordered, "equalization is monotone");

    assert!(rp.cleanup(), "enhance regression test failed");
}
