use serde::{Deserialize, Serialize};

use crate::NoiseGenerator;
use crate::perlin2::Perlin2D;

pub const DEFAULT_THRESHOLDS: [f64; 3] = [-0.3, -0.4, -0.5];

// Shade noise is sampled at this fixed scale, independent of the multipliers
pub const DEFAULT_SHADE_FREQUENCY: f64 = 0.01;

const SHADE_SCALE: f64 = 127.0;

// Per-axis frequency multipliers applied to pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub mx: f64,
    pub my: f64,
}

impl Multipliers {
    pub const fn new(mx: f64, my: f64) -> Self {
        Self { mx, my }
    }

    pub fn is_degenerate(&self) -> bool {
        self.mx == 0.0 || self.my == 0.0
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self { mx: 0.02, my: 0.02 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainCategory {
    Water,
    // `shade` is floor((n + 1) * 127) of the shade noise; not clamped
    Land { shade: i32 },
}

impl TerrainCategory {
    pub fn is_water(&self) -> bool {
        matches!(self, TerrainCategory::Water)
    }

    pub fn shade(&self) -> Option<i32> {
        match *self {
            TerrainCategory::Water => None,
            TerrainCategory::Land { shade } => Some(shade),
        }
    }
}

// Decides water or land for a pixel by testing one noise sample against an
// ordered threshold list. Any NoiseGenerator can drive it; the default is
// the hashed-lattice Perlin2D.
#[derive(Debug, Clone, Copy)]
pub struct TerrainClassifier<N = Perlin2D> {
    noise: N,
    shade_frequency: f64,
}

impl Default for TerrainClassifier<Perlin2D> {
    fn default() -> Self {
        Self::new(Perlin2D::default())
    }
}

impl<N: NoiseGenerator> TerrainClassifier<N> {
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            shade_frequency: DEFAULT_SHADE_FREQUENCY,
        }
    }

    pub fn with_shade_frequency(mut self, shade_frequency: f64) -> Self {
        self.shade_frequency = shade_frequency;
        self
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    // Thresholds are walked in the given order; the first one the sample falls
    // strictly below makes the pixel water. Every check would sample the same
    // coordinate, so the value is taken once.
    pub fn classify(
        &self,
        x: f64,
        y: f64,
        multipliers: Multipliers,
        thresholds: &[f64],
    ) -> TerrainCategory {
        if !thresholds.is_empty() {
            let value = self.noise.get2(x * multipliers.mx, y * multipliers.my);
            if thresholds.iter().any(|&t| value < t) {
                return TerrainCategory::Water;
            }
        }

        TerrainCategory::Land {
            shade: self.shade(x, y),
        }
    }

    // Second, independent sample at the fixed shade frequency
    pub fn shade(&self, x: f64, y: f64) -> i32 {
        let n = self
            .noise
            .get2(x * self.shade_frequency, y * self.shade_frequency);
        ((n + 1.0) * SHADE_SCALE).floor() as i32
    }
}
