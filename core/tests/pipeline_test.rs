use terrain_core::{
    DEFAULT_THRESHOLDS, HashVariant, Multipliers, TerrainCategory, TerrainConfig, classify,
    gradient_at, sample_noise,
};

#[test]
fn gradients_are_reproducible_unit_vectors() {
    for ix in -16..16 {
        for iy in -16..16 {
            let a = gradient_at(ix, iy);
            let b = gradient_at(ix, iy);
            assert_eq!((a.gx.to_bits(), a.gy.to_bits()), (b.gx.to_bits(), b.gy.to_bits()));
            assert!((a.length() - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn lattice_points_sample_to_zero() {
    assert_eq!(sample_noise(0.0, 0.0), 0.0);
    for &(x, y) in &[(1, 1), (-3, 8), (1000, -1000), (-1, 0)] {
        assert_eq!(sample_noise(x as f64, y as f64), 0.0);
    }
}

#[test]
fn origin_with_unit_multipliers_is_mid_shaded_land() {
    assert_eq!(
        classify(0.0, 0.0, 1.0, 1.0, &DEFAULT_THRESHOLDS),
        TerrainCategory::Land { shade: 127 }
    );
}

#[test]
fn negative_cell_matches_hand_computed_blend() {
    let (x, y) = (-0.5, -0.5);
    let dot = |ix: i32, iy: i32| gradient_at(ix, iy).dot(x - ix as f64, y - iy as f64);
    let lerp = |a: f64, b: f64, w: f64| a + (b - a) * w;
    let expected = lerp(
        lerp(dot(-1, -1), dot(0, -1), 0.5),
        lerp(dot(-1, 0), dot(0, 0), 0.5),
        0.5,
    );
    assert!((sample_noise(x, y) - expected).abs() < 1e-12);
}

#[test]
fn classification_matches_sampled_value() {
    let (mx, my) = (0.043, 0.029);
    for y in 0..40 {
        for x in 0..40 {
            let (fx, fy) = (x as f64, y as f64);
            let v = sample_noise(fx * mx, fy * my);
            let water = DEFAULT_THRESHOLDS.iter().any(|&t| v < t);
            assert_eq!(classify(fx, fy, mx, my, &DEFAULT_THRESHOLDS).is_water(), water);
        }
    }
}

#[test]
fn some_water_appears_at_moderate_frequency() {
    let water = (0..128)
        .flat_map(|y| (0..128).map(move |x| (x as f64, y as f64)))
        .filter(|&(x, y)| classify(x, y, 0.05, 0.05, &DEFAULT_THRESHOLDS).is_water())
        .count();
    assert!(water > 0 && water < 128 * 128);
}

#[test]
fn config_renderer_matches_free_functions() {
    let config = TerrainConfig {
        width: 32,
        height: 24,
        multipliers: Multipliers::new(0.09, 0.06),
        ..TerrainConfig::default()
    };
    let renderer = config.renderer();
    let grid = renderer.classify_grid(
        config.width,
        config.height,
        config.multipliers,
        &config.thresholds,
    );
    for (i, category) in grid.iter().enumerate() {
        let x = (i % 32) as f64;
        let y = (i / 32) as f64;
        assert_eq!(*category, classify(x, y, 0.09, 0.06, &config.thresholds));
    }
}

#[test]
fn width_matched_hash_changes_the_map() {
    let legacy = TerrainConfig::default();
    let matched = TerrainConfig {
        hash: HashVariant::WidthMatched,
        ..TerrainConfig::default()
    };
    let m = Multipliers::new(0.05, 0.05);
    let a = legacy.renderer().render(64, 64, m, &DEFAULT_THRESHOLDS);
    let b = matched.renderer().render(64, 64, m, &DEFAULT_THRESHOLDS);
    assert_ne!(a, b);
}

#[test]
fn png_output_round_trips() {
    let config = TerrainConfig {
        width: 20,
        height: 10,
        ..TerrainConfig::default()
    };
    let raster = config.renderer().render(
        config.width,
        config.height,
        config.multipliers,
        &config.thresholds,
    );
    let path = std::env::temp_dir().join(format!("terrain_core_test_{}.png", std::process::id()));
    raster.save_png(&path).expect("save failed");

    let loaded = image::open(&path).expect("open failed").to_rgb8();
    assert_eq!(loaded.dimensions(), (20, 10));
    assert_eq!(loaded.as_raw().as_slice(), raster.as_bytes());

    std::fs::remove_file(&path).ok();
}

#[test]
fn far_scaled_coordinates_stay_in_range() {
    for &(x, y) in &[(1.0e10 + 0.5, 0.5), (3.0e9 + 0.5, 0.5), (-5.0e9 + 0.5, 0.5)] {
        let v = sample_noise(x, y);
        assert!(v.abs() <= 1.0 + 1e-9, "sample_noise({x}, {y}) = {v}");
    }
    // Huge multipliers push pixel coordinates past the i32 lattice range
    let category = classify(300.0, 200.0, 5.0e7, 5.0e7, &DEFAULT_THRESHOLDS);
    if let TerrainCategory::Land { shade } = category {
        assert!((0..=254).contains(&shade));
    }
}
