use std::path::Path;
use std::time::Instant;

use image::{Rgb, RgbImage};
use palette::Srgb;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::NoiseGenerator;
use crate::classify::{Multipliers, TerrainCategory, TerrainClassifier};
use crate::error::TerrainError;
use crate::perlin2::Perlin2D;

pub type Color = Srgb<u8>;

// Water colour and the per-channel offsets added to a land shade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainPalette {
    pub water: [u8; 3],
    pub land_offsets: [i32; 3],
}

impl Default for TerrainPalette {
    fn default() -> Self {
        Self {
            water: [28, 84, 180],
            land_offsets: [50, 100, 50],
        }
    }
}

impl TerrainPalette {
    // Shade + offset can leave 0..=255 in either direction; clamp per channel here
    pub fn color_for(&self, category: TerrainCategory) -> Color {
        match category {
            TerrainCategory::Water => {
                let [r, g, b] = self.water;
                Srgb::new(r, g, b)
            }
            TerrainCategory::Land { shade } => {
                let [r, g, b] = self
                    .land_offsets
                    .map(|offset| clamp_channel(shade.saturating_add(offset)));
                Srgb::new(r, g, b)
            }
        }
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, u8::MAX as i32) as u8
}

// Anything that accepts one colour per coordinate
pub trait PixelSink {
    fn write_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl PixelSink for RgbImage {
    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, Rgb([color.red, color.green, color.blue]));
    }
}

// Row-major RGB8 buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    pub fn into_image(self) -> Option<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.pixels)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), TerrainError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}

impl PixelSink for Raster {
    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[i..i + 3].copy_from_slice(&[color.red, color.green, color.blue]);
    }
}

// Turns classifications into colours over a whole raster
#[derive(Debug, Clone, Copy)]
pub struct Renderer<N = Perlin2D> {
    classifier: TerrainClassifier<N>,
    palette: TerrainPalette,
}

impl Default for Renderer<Perlin2D> {
    fn default() -> Self {
        Self::new(TerrainClassifier::default(), TerrainPalette::default())
    }
}

impl<N: NoiseGenerator> Renderer<N> {
    pub fn new(classifier: TerrainClassifier<N>, palette: TerrainPalette) -> Self {
        Self {
            classifier,
            palette,
        }
    }

    pub fn classifier(&self) -> &TerrainClassifier<N> {
        &self.classifier
    }

    pub fn palette(&self) -> &TerrainPalette {
        &self.palette
    }

    pub fn color_at(&self, x: u32, y: u32, multipliers: Multipliers, thresholds: &[f64]) -> Color {
        let category = self
            .classifier
            .classify(x as f64, y as f64, multipliers, thresholds);
        self.palette.color_for(category)
    }

    // Row-major, one write per coordinate
    pub fn render_into<S: PixelSink>(
        &self,
        sink: &mut S,
        width: u32,
        height: u32,
        multipliers: Multipliers,
        thresholds: &[f64],
    ) {
        for y in 0..height {
            for x in 0..width {
                sink.write_pixel(x, y, self.color_at(x, y, multipliers, thresholds));
            }
        }
    }

    pub fn render_serial(
        &self,
        width: u32,
        height: u32,
        multipliers: Multipliers,
        thresholds: &[f64],
    ) -> Raster {
        let mut raster = Raster::new(width, height);
        self.render_into(&mut raster, width, height, multipliers, thresholds);
        raster
    }
}

impl<N: NoiseGenerator + Sync> Renderer<N> {
    // Rows are handed out to rayon workers; each worker owns its slice of the buffer
    pub fn render(
        &self,
        width: u32,
        height: u32,
        multipliers: Multipliers,
        thresholds: &[f64],
    ) -> Raster {
        let start = Instant::now();
        let mut raster = Raster::new(width, height);
        let stride = width as usize * 3;
        if stride > 0 {
            raster
                .pixels
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, px) in row.chunks_exact_mut(3).enumerate() {
                        let c = self.color_at(x as u32, y as u32, multipliers, thresholds);
                        px.copy_from_slice(&[c.red, c.green, c.blue]);
                    }
                });
        }
        debug!(
            width,
            height,
            mx = multipliers.mx,
            my = multipliers.my,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "rendered terrain raster"
        );
        raster
    }

    pub fn classify_grid(
        &self,
        width: u32,
        height: u32,
        multipliers: Multipliers,
        thresholds: &[f64],
    ) -> Vec<TerrainCategory> {
        (0..width as usize * height as usize)
            .into_par_iter()
            .map(|i| {
                let x = (i % width as usize) as f64;
                let y = (i / width as usize) as f64;
                self.classifier.classify(x, y, multipliers, thresholds)
            })
            .collect()
    }
}
