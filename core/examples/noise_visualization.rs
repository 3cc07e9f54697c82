use image::GrayImage;
use std::path::Path;
use terrain_core::utils::{flatten2, sample_grid, to_grayscale};
use terrain_core::{HashVariant, Multipliers, NoiseGenerator, Perlin2D};

fn save_noise2d<N: NoiseGenerator>(generator: &N, size: usize, m: Multipliers, filename: &str) {
    let map = sample_grid(generator, size, size, m);
    let gray = to_grayscale(&flatten2(&map));
    let img = GrayImage::from_raw(size as u32, size as u32, gray).expect("buffer matches size");
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 256;
    let m = Multipliers::new(0.04, 0.04);

    // Legacy lattice hash: the field every terrain is built from
    save_noise2d(&Perlin2D::new(HashVariant::Legacy), size, m, "gradient_legacy.png");

    // Width-matched rotation, for comparison
    save_noise2d(
        &Perlin2D::new(HashVariant::WidthMatched),
        size,
        m,
        "gradient_width_matched.png",
    );

    // Unequal per-axis multipliers
    save_noise2d(
        &Perlin2D::default(),
        size,
        Multipliers::new(0.01, 0.08),
        "gradient_stretched.png",
    );
}
