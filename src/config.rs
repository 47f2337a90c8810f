use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::ColorScheme;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Animation tick interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Radial bound shown while no points are stored
    #[serde(default = "default_bound")]
    pub default_bound: f64,
    /// Margin added above the largest radius
    #[serde(default = "default_padding")]
    pub padding: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Radius the sweep expands to before wrapping
    #[serde(default = "default_sweep_radius")]
    pub max_radius: f64,
    /// Animation steps per sweep cycle
    #[serde(default = "default_sweep_steps")]
    pub steps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Degrees of latitude/longitude per radius unit when projecting points
    /// onto the map. A visualization convenience, not a geodetic conversion.
    #[serde(default = "default_offset_scale")]
    pub offset_scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported maps (defaults to the working directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Initial zoom level of the exported map
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_tick_ms() -> u64 {
    50
}

fn default_bound() -> f64 {
    10.0
}

fn default_padding() -> f64 {
    1.0
}

fn default_sweep_radius() -> f64 {
    10.0
}

fn default_sweep_steps() -> u32 {
    100
}

fn default_offset_scale() -> f64 {
    0.01
}

fn default_zoom() -> u8 {
    12
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            color_scheme: ColorScheme::default(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            default_bound: default_bound(),
            padding: default_padding(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_radius: default_sweep_radius(),
            steps: default_sweep_steps(),
        }
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            offset_scale: default_offset_scale(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            zoom: default_zoom(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/polarscope/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("polarscope").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config at {}: {}\nUsing defaults.",
                        path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Build a config from the default path (or defaults) with CLI overrides
    pub fn default_with_args(args: &crate::Args) -> Self {
        let mut config = Self::load_from_default_path().unwrap_or_default();
        config.merge_args(args);
        config
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(ref colors) = args.colors {
            self.display.color_scheme = colors.parse().unwrap_or(self.display.color_scheme);
        }
        if let Some(tick_ms) = args.tick_ms {
            self.display.tick_ms = tick_ms.max(1);
        }
        if let Some(ref output) = args.output {
            self.export.directory = Some(output.clone());
        }
    }

    /// Write the chosen color scheme back to the config file, preserving
    /// comments and everything else in it. A missing file is not an error;
    /// the preference just lives for the session.
    pub fn persist_scheme(scheme: ColorScheme) -> Result<()> {
        let Some(path) = Self::default_path() else {
            return Ok(());
        };
        if !path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&path)?;
        let mut doc = content.parse::<toml_edit::DocumentMut>()?;
        if doc.get("display").is_none() {
            doc["display"] = toml_edit::table();
        }
        doc["display"]["color_scheme"] = toml_edit::value(scheme.name());
        std::fs::write(&path, doc.to_string())?;
        Ok(())
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write the config template
        let template = Self::generate_config_template();
        std::fs::write(&path, template)?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# Polarscope Configuration
# This file is auto-generated. Edit as needed.

[display]
# Animation tick interval in milliseconds
tick_ms = 50
# Color scheme: "phosphor", "amber", "ice", "monochrome"
color_scheme = "phosphor"

[plot]
# Radial bound shown while no points are stored
default_bound = 10.0
# Margin added above the largest plotted radius
padding = 1.0

[sweep]
# Radius the sweep expands to before wrapping
max_radius = 10.0
# Animation steps per sweep cycle
steps = 100

[geo]
# Degrees of latitude/longitude per radius unit when projecting points onto
# the map. This is a visualization convenience, not a geodetic conversion.
offset_scale = 0.01

[export]
# Directory for exported maps (omit for the current working directory)
# directory = "/home/me/maps"
# Initial zoom level of the exported map
zoom = 12
"#
        .to_string()
    }
}
