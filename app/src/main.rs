use std::time::Instant;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, Vec2};
use terrain_core::{HashVariant, Raster, TerrainConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

struct TerrainApp {
    // Everything the generator reads; sliders write straight into it
    config: TerrainConfig,

    // generated texture
    terrain_texture: Option<TextureHandle>,

    status_message: String,

    // Last rendered raster, kept for saving
    last_raster: Option<Raster>,
}

impl Default for TerrainApp {
    fn default() -> Self {
        Self {
            config: TerrainConfig::default(),
            terrain_texture: None,
            status_message: String::new(),
            last_raster: None,
        }
    }
}

impl TerrainApp {
    fn generate(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.config.validate() {
            self.status_message = format!("Invalid settings: {}", e);
            return;
        }

        let start = Instant::now();
        let (width, height) = (self.config.width, self.config.height);
        let multipliers = self.config.multipliers;
        let raster =
            self.config
                .renderer()
                .render(width, height, multipliers, &self.config.thresholds);

        let color_image =
            ColorImage::from_rgb([width as usize, height as usize], raster.as_bytes());
        self.terrain_texture =
            Some(ctx.load_texture("terrain", color_image, egui::TextureOptions::NEAREST));
        self.last_raster = Some(raster);

        let elapsed = start.elapsed().as_secs_f32() * 1000.0;
        self.status_message = format!(
            "Generated {}×{} in {:.2} ms (mx {:.4}, my {:.4})",
            width, height, elapsed, multipliers.mx, multipliers.my
        );
        info!(width, height, elapsed_ms = elapsed, "generated terrain");
        ctx.request_repaint();
    }

    fn save_png(&mut self) {
        let Some(raster) = &self.last_raster else {
            self.status_message = "Nothing to save yet".into();
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("terrain.png")
            .save_file()
        else {
            return;
        };
        self.status_message = match raster.save_png(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                error!(error = %e, "saving png failed");
                format!("Save failed: {}", e)
            }
        };
    }

    fn load_config(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON config", &["json"])
            .pick_file()
        else {
            return;
        };
        match TerrainConfig::load(&path) {
            Ok(config) => {
                self.config = config;
                self.terrain_texture = None;
                self.last_raster = None;
                self.status_message = format!("Loaded {}", path.display());
            }
            Err(e) => {
                error!(error = %e, "loading config failed");
                self.status_message = format!("Config error: {}", e);
            }
        }
    }
}

impl App for TerrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Terrain Generator");
            ui.separator();

            // Resolution
            ui.label("Width");
            ui.add(egui::Slider::new(&mut self.config.width, 16..=1024));
            ui.label("Height");
            ui.add(egui::Slider::new(&mut self.config.height, 16..=1024));

            // Per-axis frequency multipliers
            ui.label("X multiplier");
            ui.add(
                egui::Slider::new(&mut self.config.multipliers.mx, 0.0..=0.25)
                    .logarithmic(true)
                    .smallest_positive(1e-4),
            );
            ui.label("Y multiplier");
            ui.add(
                egui::Slider::new(&mut self.config.multipliers.my, 0.0..=0.25)
                    .logarithmic(true)
                    .smallest_positive(1e-4),
            );
            if self.config.multipliers.is_degenerate() {
                ui.label("A zero multiplier makes that axis constant");
            }

            let mut width_matched = self.config.hash == HashVariant::WidthMatched;
            if ui
                .checkbox(&mut width_matched, "Width-matched hash rotation")
                .changed()
            {
                self.config.hash = if width_matched {
                    HashVariant::WidthMatched
                } else {
                    HashVariant::Legacy
                };
            }

            ui.label(format!("Water thresholds: {:?}", self.config.thresholds));

            ui.separator();

            if ui.button("Render").clicked() {
                self.generate(ctx);
            }

            if ui.button("Save PNG…").clicked() {
                self.save_png();
            }

            if ui.button("Load config…").clicked() {
                self.load_config();
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.terrain_texture {
                let [w, h] = tex.size();
                let available = ui.available_size();
                let scale = (available.x / w as f32).min(available.y / h as f32);
                ui.image((tex.id(), Vec2::new(w as f32, h as f32) * scale));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Render” to start");
                });
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Terrain Generator",
        opts,
        Box::new(|_cc| Ok(Box::new(TerrainApp::default()))),
    )
}
