#![warn(clippy::all, rust_2018_idioms)]

use log::{info, warn};

use vecy::{Canvas, CanvasConfig, VecyApp};

const CONFIG_ENV: &str = "VECY_CONFIG";

fn load_config() -> CanvasConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return CanvasConfig::default();
    };
    match CanvasConfig::load(&path) {
        Ok(config) => {
            info!("loaded configuration from {path}");
            config
        }
        Err(err) => {
            warn!("could not load {path}: {err}; using defaults");
            CanvasConfig::default()
        }
    }
}

fn build_canvas(config: &CanvasConfig) -> Canvas {
    let mut canvas = Canvas::from_config(config).unwrap_or_else(|err| {
        warn!("invalid configuration: {err}; using defaults");
        Canvas::default()
    });
    if let Err(err) = canvas.seed_initial_scene() {
        warn!("could not seed initial scene: {err}");
    }
    canvas
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let canvas = build_canvas(&load_config());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("vecy")
            .with_inner_size([450.0, 340.0]),
        ..Default::default()
    };

    eframe::run_native(
        "vecy",
        native_options,
        Box::new(move |cc| Ok(Box::new(VecyApp::new(cc, canvas)))),
    )
}
