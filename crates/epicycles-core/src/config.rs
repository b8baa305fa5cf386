use serde::{Deserialize, Serialize};

use crate::chain::Point;
use crate::error::{ConfigError, Result};
use crate::series::WaveformKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierConfig {
    pub initial_terms: usize,
    pub max_terms: usize,
    pub waveform: WaveformKind,
    /// Pixels per unit of harmonic amplitude.
    pub scale: f64,
    /// Horizontal scroll of the trace per tick.
    pub wave_speed: f64,
    pub rotation_speed: f64,
    pub min_rotation_speed: f64,
    pub rotation_step: f64,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            initial_terms: 5,
            max_terms: 60,
            waveform: WaveformKind::Square,
            scale: 150.0,
            wave_speed: 1.6,
            rotation_speed: 0.22,
            min_rotation_speed: 0.05,
            rotation_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub time_step: f64,
    pub time_speed: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.0035,
            time_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Base of the first epicycle.
    pub anchor: [f64; 2],
    /// Distance a trace sample travels before it is evicted.
    pub trace_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor: [350.0, 600.0],
            trace_width: 1250.0,
        }
    }
}

impl LayoutConfig {
    pub fn anchor_point(&self) -> Point {
        Point::from(self.anchor)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub fourier: FourierConfig,
    pub animation: AnimationConfig,
    pub layout: LayoutConfig,
}

impl SimulationConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fourier = &self.fourier;
        let animation = &self.animation;
        let layout = &self.layout;

        for (field, value) in [
            ("fourier.scale", fourier.scale),
            ("fourier.wave_speed", fourier.wave_speed),
            ("fourier.rotation_speed", fourier.rotation_speed),
            ("fourier.min_rotation_speed", fourier.min_rotation_speed),
            ("fourier.rotation_step", fourier.rotation_step),
            ("animation.time_step", animation.time_step),
            ("animation.time_speed", animation.time_speed),
            ("layout.anchor.x", layout.anchor[0]),
            ("layout.anchor.y", layout.anchor[1]),
            ("layout.trace_width", layout.trace_width),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if fourier.max_terms == 0 {
            return Err(ConfigError::NoTerms);
        }
        if animation.time_step <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(animation.time_step));
        }
        if animation.time_speed <= 0.0 {
            return Err(ConfigError::NonPositiveTimeSpeed(animation.time_speed));
        }
        if fourier.scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(fourier.scale));
        }
        if fourier.wave_speed <= 0.0 {
            return Err(ConfigError::NonPositiveWaveSpeed(fourier.wave_speed));
        }
        if layout.trace_width <= 0.0 {
            return Err(ConfigError::NonPositiveTraceWidth(layout.trace_width));
        }
        if fourier.min_rotation_speed <= 0.0 {
            return Err(ConfigError::NonPositiveRotationFloor(
                fourier.min_rotation_speed,
            ));
        }
        if fourier.rotation_step < 0.0 {
            return Err(ConfigError::NegativeRotationStep(fourier.rotation_step));
        }
        Ok(())
    }
}
