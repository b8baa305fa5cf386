use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use epicycles_core::SimulationConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 950.0,
            title: "Fourier Visualization".to_string(),
            fps: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: [u8; 3],
    pub epicycle: [u8; 3],
    pub wave: [u8; 3],
    pub line: [u8; 3],
    pub text: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [10, 10, 10],
            epicycle: [120, 120, 255],
            wave: [255, 80, 80],
            line: [180, 180, 180],
            text: [230, 230, 230],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Screen x where the trace starts scrolling right.
    pub wave_origin_x: f32,
    pub font_size: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            wave_origin_x: 750.0,
            font_size: 18.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub colors: ColorConfig,
    pub view: ViewConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Read `path`, writing the defaults there first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let defaults = serde_json::to_string_pretty(&Self::default())?;
            fs::write(path, defaults)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "created default config");
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let mut config: Self = serde_json::from_value(value.clone())
            .with_context(|| format!("failed to parse {}", path.display()))?;

        // Without an explicit width, the trace runs to the right window edge.
        let has_trace_width = value
            .pointer("/simulation/layout/trace_width")
            .is_some();
        if !has_trace_width {
            config.simulation.layout.trace_width =
                f64::from(config.window.width - config.view.wave_origin_x);
        }

        config
            .simulation
            .validate()
            .with_context(|| format!("invalid simulation settings in {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("epicycles-gui-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch_path("create");
        let _ = fs::remove_file(&path);

        let config = AppConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.window.fps, 60);
        assert_eq!(config.simulation.fourier.max_terms, 60);
        assert_eq!(config.simulation.layout.trace_width, 1250.0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn trace_width_follows_window_when_unset() {
        let path = scratch_path("derived");
        fs::write(&path, r#"{ "window": { "width": 1000.0 }, "view": { "wave_origin_x": 600.0 } }"#)
            .unwrap();

        let config = AppConfig::load_or_create(&path).unwrap();
        assert_eq!(config.simulation.layout.trace_width, 400.0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_simulation_settings_are_reported() {
        let path = scratch_path("invalid");
        fs::write(&path, r#"{ "simulation": { "fourier": { "scale": 0.0 } } }"#).unwrap();

        assert!(AppConfig::load_or_create(&path).is_err());

        fs::remove_file(&path).unwrap();
    }
}
