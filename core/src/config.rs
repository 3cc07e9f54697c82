use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classify::{DEFAULT_SHADE_FREQUENCY, DEFAULT_THRESHOLDS, Multipliers, TerrainClassifier};
use crate::error::TerrainError;
use crate::gradient::HashVariant;
use crate::perlin2::Perlin2D;
use crate::render::{Renderer, TerrainPalette};

// Everything a host needs to produce one terrain raster.
// Missing fields in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub width: u32,
    pub height: u32,
    pub multipliers: Multipliers,
    // Tested in this order; never sorted
    pub thresholds: Vec<f64>,
    pub shade_frequency: f64,
    pub hash: HashVariant,
    pub palette: TerrainPalette,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            multipliers: Multipliers::default(),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            shade_frequency: DEFAULT_SHADE_FREQUENCY,
            hash: HashVariant::Legacy,
            palette: TerrainPalette::default(),
        }
    }
}

impl TerrainConfig {
    pub fn from_json(json: &str) -> Result<Self, TerrainError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TerrainError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TerrainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        info!(path = %path.display(), "loaded terrain config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, TerrainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // Degenerate multipliers are allowed (they collapse an axis) but logged
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width == 0 || self.height == 0 {
            return Err(TerrainError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        for (axis, value) in [("mx", self.multipliers.mx), ("my", self.multipliers.my)] {
            if !value.is_finite() {
                return Err(TerrainError::NonFiniteMultiplier { axis, value });
            }
        }
        if let Some((index, &value)) = self
            .thresholds
            .iter()
            .enumerate()
            .find(|(_, t)| !t.is_finite())
        {
            return Err(TerrainError::NonFiniteThreshold { index, value });
        }
        if !self.shade_frequency.is_finite() {
            return Err(TerrainError::NonFiniteShadeFrequency(self.shade_frequency));
        }
        if self.multipliers.is_degenerate() {
            warn!(
                mx = self.multipliers.mx,
                my = self.multipliers.my,
                "zero multiplier collapses one axis to a constant"
            );
        }
        Ok(())
    }

    pub fn renderer(&self) -> Renderer<Perlin2D> {
        let classifier = TerrainClassifier::new(Perlin2D::new(self.hash))
            .with_shade_frequency(self.shade_frequency);
        Renderer::new(classifier, self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::TerrainConfig;
    use crate::classify::Multipliers;
    use crate::error::TerrainError;
    use crate::gradient::HashVariant;

    #[test]
    fn defaults_round_trip_through_json() {
        let config = TerrainConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(TerrainConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = TerrainConfig::from_json(
            r#"{ "width": 64, "multipliers": { "mx": 0.5, "my": 0.25 }, "hash": "width_matched" }"#,
        )
        .unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 512);
        assert_eq!(config.multipliers, Multipliers::new(0.5, 0.25));
        assert_eq!(config.hash, HashVariant::WidthMatched);
        assert_eq!(config.thresholds, vec![-0.3, -0.4, -0.5]);
    }

    #[test]
    fn threshold_order_survives_loading() {
        let config = TerrainConfig::from_json(r#"{ "thresholds": [-0.5, 0.1, -0.3] }"#).unwrap();
        assert_eq!(config.thresholds, vec![-0.5, 0.1, -0.3]);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = TerrainConfig::from_json(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::InvalidDimensions {
                width: 512,
                height: 0
            }
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut config = TerrainConfig::default();
        config.multipliers.my = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(TerrainError::NonFiniteMultiplier { axis: "my", .. })
        ));

        let mut config = TerrainConfig::default();
        config.thresholds = vec![-0.3, f64::INFINITY];
        assert!(matches!(
            config.validate(),
            Err(TerrainError::NonFiniteThreshold { index: 1, .. })
        ));
    }

    #[test]
    fn non_finite_shade_frequency_is_rejected() {
        let mut config = TerrainConfig::default();
        config.shade_frequency = f64::NEG_INFINITY;
        assert!(matches!(
            config.validate(),
            Err(TerrainError::NonFiniteShadeFrequency(v)) if v == f64::NEG_INFINITY
        ));
    }

    #[test]
    fn degenerate_multipliers_are_valid() {
        let mut config = TerrainConfig::default();
        config.multipliers = Multipliers::new(0.0, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            TerrainConfig::from_json("{ width: "),
            Err(TerrainError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TerrainConfig::load("/definitely/not/here/terrain.json").unwrap_err();
        assert!(matches!(err, TerrainError::Io { .. }));
    }
}
