//! Demo configuration.
//!
//! Every field has a default; an optional INI file overrides individual keys:
//!
//! ```ini
//! [window]
//! title = Fluid Sim
//! width = 640
//! height = 480
//!
//! [physics]
//! gravity = 0, -2.71, 0
//! restitution = 0.85
//! half_extent_px = 6
//! bounds = floor, ceiling, left, right
//! position = 0, 0, 0
//! velocity = 1.5, 0, 0
//!
//! [color]
//! max_speed = 6
//! stops = 0.0: 0,0,255; 0.6: 255,0,0; 0.8: 255,255,0; 1.0: 255,255,255
//!
//! [render]
//! clear_color = 0.25, 0.5, 0.75, 1
//! shader = shaders/particle.wgsl
//! vsync = true
//! ```

mod error;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;

use winit::dpi::LogicalSize;

use crate::color::{ColorRamp, ColorStop, SpeedColorMapper};
use crate::device::GpuInit;
use crate::math::{Rgba, Vec3};
use crate::physics::{Body, BodyParams, Bounds, Edge};
use crate::window::RuntimeConfig;

pub use error::ConfigError;

/// Everything the demo needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub width: u32,
    pub height: u32,

    pub gravity: Vec3,
    pub restitution: f32,
    pub half_extent_px: f32,
    pub bounds: Bounds,
    pub position: Vec3,
    pub velocity: Vec3,

    pub max_speed: f32,
    pub ramp: ColorRamp,

    pub clear_color: Rgba,
    /// WGSL file replacing the built-in shader.
    pub shader: Option<PathBuf>,
    pub vsync: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        let body = BodyParams::default();
        Self {
            title: "Fluid Sim".to_string(),
            width: 640,
            height: 480,

            gravity: body.gravity,
            restitution: body.restitution,
            half_extent_px: body.half_extent_px,
            bounds: body.bounds,
            position: Vec3::zero(),
            velocity: Vec3::new(1.5, 0.0, 0.0),

            max_speed: SpeedColorMapper::DEFAULT_MAX_SPEED,
            ramp: ColorRamp::heat(),

            clear_color: Rgba::new(0.25, 0.5, 0.75, 1.0),
            shader: None,
            vsync: true,
        }
    }
}

impl SimConfig {
    /// Reads an INI file. Relative `shader` paths resolve against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let mut cfg = Self::from_ini(&ini)?;
        if let (Some(shader), Some(dir)) = (cfg.shader.as_mut(), path.parent()) {
            if shader.is_relative() {
                *shader = dir.join(&*shader);
            }
        }
        Ok(cfg)
    }

    /// Parses INI text. Missing sections and keys keep their defaults.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(ConfigError::Parse)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let get = |section: &'static str, key: &'static str| {
            ini.get_from(Some(section), key).map(str::trim)
        };

        // ── window ────────────────────────────────────────────────────────
        if let Some(v) = get("window", "title") {
            cfg.title = v.to_string();
        }
        if let Some(v) = get("window", "width") {
            cfg.width = parse_positive_u32("window", "width", v)?;
        }
        if let Some(v) = get("window", "height") {
            cfg.height = parse_positive_u32("window", "height", v)?;
        }

        // ── physics ───────────────────────────────────────────────────────
        if let Some(v) = get("physics", "gravity") {
            cfg.gravity = parse_vec3("physics", "gravity", v)?;
        }
        if let Some(v) = get("physics", "restitution") {
            cfg.restitution = parse_non_negative("physics", "restitution", v)?;
            if cfg.restitution > 1.0 {
                log::warn!("restitution {} > 1 adds energy on every bounce", cfg.restitution);
            }
        }
        if let Some(v) = get("physics", "half_extent_px") {
            cfg.half_extent_px = parse_non_negative("physics", "half_extent_px", v)?;
        }
        if let Some(v) = get("physics", "bounds") {
            cfg.bounds = parse_bounds("physics", "bounds", v)?;
        }
        if let Some(v) = get("physics", "position") {
            cfg.position = parse_vec3("physics", "position", v)?;
        }
        if let Some(v) = get("physics", "velocity") {
            cfg.velocity = parse_vec3("physics", "velocity", v)?;
        }

        // ── color ─────────────────────────────────────────────────────────
        if let Some(v) = get("color", "max_speed") {
            cfg.max_speed = parse_num("color", "max_speed", v)?;
        }
        if let Some(v) = get("color", "stops") {
            cfg.ramp = ColorRamp::new(parse_stops("color", "stops", v)?)?;
        }

        // ── render ────────────────────────────────────────────────────────
        if let Some(v) = get("render", "clear_color") {
            cfg.clear_color = parse_rgba("render", "clear_color", v)?;
        }
        if let Some(v) = get("render", "shader") {
            cfg.shader = (!v.is_empty()).then(|| PathBuf::from(v));
        }
        if let Some(v) = get("render", "vsync") {
            cfg.vsync = parse_bool("render", "vsync", v)?;
        }

        // Reject a bad max speed at load time rather than at first frame.
        cfg.color_mapper()?;
        Ok(cfg)
    }

    pub fn body_params(&self) -> BodyParams {
        BodyParams {
            gravity: self.gravity,
            restitution: self.restitution,
            half_extent_px: self.half_extent_px,
            bounds: self.bounds,
        }
    }

    pub fn initial_body(&self) -> Body {
        Body::new(self.position, self.velocity)
    }

    pub fn color_mapper(&self) -> Result<SpeedColorMapper, ConfigError> {
        Ok(SpeedColorMapper::new(self.ramp.clone(), self.max_speed)?)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
            ..RuntimeConfig::default()
        }
    }

    /// Linear surface so ramp and clear colors show as written.
    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            prefer_srgb: false,
            present_mode: if self.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            ..GpuInit::default()
        }
    }
}

// ── value parsers ─────────────────────────────────────────────────────────

fn parse_num<T: FromStr>(section: &'static str, key: &'static str, v: &str) -> Result<T, ConfigError> {
    v.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(section, key, v, "not a number"))
}

fn parse_positive_u32(section: &'static str, key: &'static str, v: &str) -> Result<u32, ConfigError> {
    match parse_num::<u32>(section, key, v)? {
        0 => Err(ConfigError::invalid(section, key, v, "must be greater than zero")),
        n => Ok(n),
    }
}

fn parse_non_negative(section: &'static str, key: &'static str, v: &str) -> Result<f32, ConfigError> {
    let x: f32 = parse_num(section, key, v)?;
    if !x.is_finite() || x < 0.0 {
        return Err(ConfigError::invalid(section, key, v, "must be finite and not negative"));
    }
    Ok(x)
}

fn parse_floats<const N: usize>(
    section: &'static str,
    key: &'static str,
    v: &str,
) -> Result<[f32; N], ConfigError> {
    let parts: Vec<&str> = v.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ConfigError::invalid(
            section,
            key,
            v,
            format!("expected {N} comma-separated numbers, got {}", parts.len()),
        ));
    }

    let mut out = [0.0; N];
    for (slot, p) in out.iter_mut().zip(parts) {
        let x: f32 = parse_num(section, key, p)?;
        if !x.is_finite() {
            return Err(ConfigError::invalid(section, key, v, "values must be finite"));
        }
        *slot = x;
    }
    Ok(out)
}

fn parse_vec3(section: &'static str, key: &'static str, v: &str) -> Result<Vec3, ConfigError> {
    parse_floats::<3>(section, key, v).map(Vec3::from)
}

fn parse_rgba(section: &'static str, key: &'static str, v: &str) -> Result<Rgba, ConfigError> {
    let [r, g, b, a] = parse_floats::<4>(section, key, v)?;
    Ok(Rgba::new(r, g, b, a))
}

fn parse_bool(section: &'static str, key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::invalid(section, key, v, "expected true or false")),
    }
}

/// `floor, left` → those edges; `none` or empty → no walls.
fn parse_bounds(section: &'static str, key: &'static str, v: &str) -> Result<Bounds, ConfigError> {
    let v = v.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("none") {
        return Ok(Bounds::none());
    }
    if v.eq_ignore_ascii_case("all") {
        return Ok(Bounds::all());
    }

    v.split(',')
        .map(|name| {
            let name = name.trim().to_ascii_lowercase();
            Edge::from_name(&name)
                .ok_or_else(|| ConfigError::invalid(section, key, v, format!("unknown edge `{name}`")))
        })
        .collect()
}

/// `pos: r,g,b; pos: r,g,b` with 8-bit channels.
fn parse_stops(section: &'static str, key: &'static str, v: &str) -> Result<Vec<ColorStop>, ConfigError> {
    v.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|stop| {
            let (pos, rgb) = stop
                .split_once(':')
                .ok_or_else(|| ConfigError::invalid(section, key, stop, "expected `pos: r,g,b`"))?;
            let pos: f32 = parse_num(section, key, pos)?;

            let channels: Vec<u8> = rgb
                .split(',')
                .map(|c| parse_num::<u8>(section, key, c))
                .collect::<Result<_, _>>()
                .map_err(|_| ConfigError::invalid(section, key, stop, "channels must be 0-255"))?;
            let [r, g, b] = channels[..] else {
                return Err(ConfigError::invalid(section, key, stop, "expected three channels"));
            };

            Ok(ColorStop::from_u8(pos, r, g, b))
        })
        .collect()
}
