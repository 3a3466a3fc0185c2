//! Grid construction, pixel access and conversion regression test

use pixlab_core::{Error, Grid, RgbaImage};
use pixlab_test::{RegParams, gradient_grid, pattern_grid};

#[test]
fn grid_access_reg() {
    let mut rp = RegParams::new("grid_access");

    let pixs = gradient_grid(9, 6).expect("gradient_grid");

    // --- Out-of-bounds reads are black ---
    for (x, y) in [(-1, 0), (0, -1), (9, 0), (0, 6), (100, 100)] {
        rp.compare_values(0.0, pixs.get_pixel(x, y) as f64, 0.0);
    }

    // --- Out-of-bounds writes are dropped ---
    let mut copy = pixs.clone();
    copy.set_pixel(-3, 2, 255.0);
    copy.set_pixel(9, 5, 255.0);
    rp.compare_grids(&pixs, &copy);

    // --- In-bounds writes are clamped and rounded ---
    copy.set_pixel(4, 4, 300.7);
    rp.compare_values(255.0, copy.get_pixel(4, 4) as f64, 0.0);
    copy.set_pixel(4, 4, -0.4);
    rp.compare_values(0.0, copy.get_pixel(4, 4) as f64, 0.0);
    copy.set_pixel(4, 4, 41.5);
    rp.compare_values(42.0, copy.get_pixel(4, 4) as f64, 0.0);

    // --- Region query agrees with get_pixel ---
    let region = pixs.region_values(7, 4, 4, 3);
    for (dy, row) in region.iter().enumerate() {
        for (dx, &v) in row.iter().enumerate() {
            let expected = pixs.get_pixel(7 + dx as i64, 4 + dy as i64);
            rp.compare_values(expected as f64, v as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "grid access regression test failed");
}

#[test]
fn rgba_boundary_reg() {
    let mut rp = RegParams::new("rgba_boundary");

    // --- Gray grid survives a trip through RGBA ---
    let pixs = pattern_grid(8, 3, 5).unwrap();
    let rgba = pixs.to_rgba();
    rp.compare_values(8.0 * 3.0 * 4.0, rgba.data().len() as f64, 0.0);
    rp.check(rgba.pixels().all(|p| p[3] == 255), "output is opaque");
    rp.compare_grids(&pixs, &Grid::from_rgba(&rgba));

    // --- Luma weighting ignores alpha ---
    let img = RgbaImage::from_vec(2, 1, vec![10, 20, 30, 0, 10, 20, 30, 255]).unwrap();
    let g = Grid::from_rgba(&img);
    // 0.299*10 + 0.587*20 + 0.114*30 = 18.15
    rp.compare_samples(&[18, 18], g.data());

    assert!(rp.cleanup(), "rgba boundary regression test failed");
}

#[test]
fn invalid_geometry_fails_fast() {
    assert!(matches!(
        Grid::new(0, 0),
        Err(Error::InvalidDimension { .. })
    ));
    assert!(matches!(
        Grid::from_vec(3, 3, vec![0; 8]),
        Err(Error::DataLengthMismatch {
            expected: 9,
            actual: 8
        })
    ));
    assert!(matches!(
        RgbaImage::from_vec(3, 3, vec![0; 9]),
        Err(Error::DataLengthMismatch {
            expected: 36,
            actual: 9
        })
    ));
}
