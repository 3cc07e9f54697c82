// Headless terrain renderer: classifies every pixel and writes the
// coloured raster to a PNG

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use terrain_core::{HashVariant, TerrainConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "render")]
#[command(about = "Render gradient-noise terrain to a PNG")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raster width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Raster height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Frequency multiplier along x
    #[arg(long, allow_negative_numbers = true)]
    mx: Option<f64>,

    /// Frequency multiplier along y
    #[arg(long, allow_negative_numbers = true)]
    my: Option<f64>,

    /// Water thresholds, tested in the order given
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    thresholds: Option<Vec<f64>>,

    /// Use the width-matched hash rotation instead of the legacy one
    #[arg(long)]
    width_matched: bool,

    /// Render on the calling thread instead of across rayon workers
    #[arg(long)]
    serial: bool,

    /// Output file path
    #[arg(long, default_value = "terrain.png")]
    output: PathBuf,
}

impl Args {
    fn into_config(self) -> Result<(TerrainConfig, PathBuf, bool), terrain_core::TerrainError> {
        let mut config = match &self.config {
            Some(path) => TerrainConfig::load(path)?,
            None => TerrainConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(mx) = self.mx {
            config.multipliers.mx = mx;
        }
        if let Some(my) = self.my {
            config.multipliers.my = my;
        }
        if let Some(thresholds) = self.thresholds {
            config.thresholds = thresholds;
        }
        if self.width_matched {
            config.hash = HashVariant::WidthMatched;
        }
        config.validate()?;
        Ok((config, self.output, self.serial))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (config, output, serial) = Args::parse().into_config()?;
    info!(
        width = config.width,
        height = config.height,
        mx = config.multipliers.mx,
        my = config.multipliers.my,
        thresholds = ?config.thresholds,
        hash = ?config.hash,
        "rendering terrain"
    );

    let start = Instant::now();
    let renderer = config.renderer();
    let raster = if serial {
        renderer.render_serial(
            config.width,
            config.height,
            config.multipliers,
            &config.thresholds,
        )
    } else {
        renderer.render(
            config.width,
            config.height,
            config.multipliers,
            &config.thresholds,
        )
    };
    raster.save_png(&output)?;

    info!(
        output = %output.display(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "saved terrain"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use terrain_core::{HashVariant, Multipliers};

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "render",
            "--width",
            "64",
            "--mx",
            "0.5",
            "--thresholds=-0.5,-0.2",
            "--width-matched",
        ]);
        let (config, output, serial) = args.into_config().unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 512);
        assert_eq!(config.multipliers, Multipliers::new(0.5, 0.02));
        assert_eq!(config.thresholds, vec![-0.5, -0.2]);
        assert_eq!(config.hash, HashVariant::WidthMatched);
        assert_eq!(output.to_str(), Some("terrain.png"));
        assert!(!serial);
    }

    #[test]
    fn zero_width_is_rejected() {
        let args = Args::parse_from(["render", "--width", "0"]);
        assert!(args.into_config().is_err());
    }
}
