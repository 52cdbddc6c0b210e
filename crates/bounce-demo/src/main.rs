mod sim;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bounce_engine::config::SimConfig;
use bounce_engine::logging::{init_logging, LoggingConfig};
use bounce_engine::render::ShaderSource;
use bounce_engine::window::Runtime;

use sim::BounceApp;

/// Read when no path is given on the command line.
const DEFAULT_CONFIG: &str = "bounce.ini";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    let mapper = cfg.color_mapper().context("invalid color settings")?;
    let shader = ShaderSource::load_or_builtin(cfg.shader.as_deref());

    log::info!(
        "gravity {:?}, restitution {}, {} px half extent",
        cfg.gravity,
        cfg.restitution,
        cfg.half_extent_px
    );

    let app = BounceApp::new(
        cfg.title.clone(),
        cfg.initial_body(),
        cfg.body_params(),
        mapper,
        shader,
        cfg.clear_color,
    );

    Runtime::run(cfg.runtime_config(), cfg.gpu_init(), app)
}

/// An explicit path must load; the default file is optional.
fn load_config(path: Option<PathBuf>) -> Result<SimConfig> {
    if let Some(path) = path {
        let cfg = SimConfig::load(&path)?;
        log::info!("loaded {}", path.display());
        return Ok(cfg);
    }

    let default = Path::new(DEFAULT_CONFIG);
    if default.exists() {
        let cfg = SimConfig::load(default)?;
        log::info!("loaded {DEFAULT_CONFIG}");
        return Ok(cfg);
    }

    log::debug!("no {DEFAULT_CONFIG}; using defaults");
    Ok(SimConfig::default())
}
