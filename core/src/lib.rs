// Gradient-noise terrain: lattice hashing, noise sampling, water/land
// classification and the raster boundary that turns it into pixels.
pub mod classify;
pub mod config;
pub mod error;
pub mod gradient;
pub mod perlin2;
pub mod render;
pub mod utils;

pub use classify::{DEFAULT_THRESHOLDS, Multipliers, TerrainCategory, TerrainClassifier};
pub use config::TerrainConfig;
pub use error::TerrainError;
pub use gradient::{Gradient, GradientField, HashVariant};
pub use perlin2::Perlin2D;
pub use render::{Color, PixelSink, Raster, Renderer, TerrainPalette};
pub use utils::flatten2;

// Any scalar field that can be sampled at a 2D point
pub trait NoiseGenerator {
    fn get2(&self, x: f64, y: f64) -> f64;
}

impl<N: NoiseGenerator + ?Sized> NoiseGenerator for &N {
    fn get2(&self, x: f64, y: f64) -> f64 {
        (**self).get2(x, y)
    }
}

// Unit gradient at lattice corner (ix, iy), using the legacy hash
pub fn gradient_at(ix: i32, iy: i32) -> Gradient {
    GradientField::default().gradient_at(ix, iy)
}

// Noise value at (x, y); zero on every lattice point
pub fn sample_noise(x: f64, y: f64) -> f64 {
    Perlin2D::default().noise(x, y)
}

// Classify pixel (x, y) with multipliers (mx, my) against thresholds,
// checked in the order given
pub fn classify(x: f64, y: f64, mx: f64, my: f64, thresholds: &[f64]) -> TerrainCategory {
    TerrainClassifier::new(Perlin2D::default()).classify(
        x,
        y,
        Multipliers::new(mx, my),
        thresholds,
    )
}
