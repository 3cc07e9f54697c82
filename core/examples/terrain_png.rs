use terrain_core::TerrainConfig;

// Render the default terrain and a few multiplier variations to PNG
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TerrainConfig::default();
    let renderer = config.renderer();

    for (name, mx, my) in [
        ("terrain_default.png", config.multipliers.mx, config.multipliers.my),
        ("terrain_coarse.png", 0.008, 0.008),
        ("terrain_fine.png", 0.08, 0.08),
        ("terrain_collapsed_x.png", 0.0, 0.03),
    ] {
        let mut m = config.multipliers;
        m.mx = mx;
        m.my = my;
        let raster = renderer.render(config.width, config.height, m, &config.thresholds);
        raster.save_png(name)?;
        println!("Saved {} (mx = {}, my = {})", name, mx, my);
    }

    Ok(())
}
