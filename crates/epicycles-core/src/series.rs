use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Periodic waveform approximated by the epicycle chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformKind {
    Square,
    Sawtooth,
}

impl Default for WaveformKind {
    fn default() -> Self {
        Self::Square
    }
}

impl WaveformKind {
    pub fn toggled(self) -> Self {
        match self {
            Self::Square => Self::Sawtooth,
            Self::Sawtooth => Self::Square,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Square => "Square wave",
            Self::Sawtooth => "Sawtooth wave",
        }
    }

    /// The first `count` terms, lowest harmonic first.
    pub fn terms(self, count: usize) -> impl Iterator<Item = HarmonicTerm> {
        (0..count).map(move |index| term(self, index))
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => f.write_str("square"),
            Self::Sawtooth => f.write_str("sawtooth"),
        }
    }
}

impl FromStr for WaveformKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "sawtooth" | "saw" => Ok(Self::Sawtooth),
            _ => Err(ConfigError::UnknownWaveform(s.to_string())),
        }
    }
}

/// Spin direction of one epicycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    CounterClockwise,
    Clockwise,
}

impl Rotation {
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicTerm {
    /// Radius of the epicycle before geometric scaling.
    pub amplitude: f64,
    /// Harmonic number `n`; exact for every `usize` index.
    pub frequency: u128,
    pub direction: Rotation,
}

/// Closed-form Fourier coefficient for `kind` at `index`.
///
/// Square waves use only odd harmonics `n = 2i + 1` with amplitude `4 / (pi n)`.
/// Sawtooth waves use every harmonic `n = i + 1` with amplitude `2 / (pi n)`,
/// alternating direction so even harmonics spin clockwise.
pub fn term(kind: WaveformKind, index: usize) -> HarmonicTerm {
    match kind {
        WaveformKind::Square => {
            let n = 2 * index as u128 + 1;
            HarmonicTerm {
                amplitude: 4.0 / (PI * n as f64),
                frequency: n,
                direction: Rotation::CounterClockwise,
            }
        }
        WaveformKind::Sawtooth => {
            let n = index as u128 + 1;
            HarmonicTerm {
                amplitude: 2.0 / (PI * n as f64),
                frequency: n,
                direction: if n % 2 == 1 {
                    Rotation::CounterClockwise
                } else {
                    Rotation::Clockwise
                },
            }
        }
    }
}
