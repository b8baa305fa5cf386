pub mod chain;
pub mod config;
pub mod error;
pub mod series;
pub mod simulation;
pub mod trace;

pub use chain::{evaluate, evaluate_into, Chain, ChainParams, ChainSegment, Point};
pub use config::{AnimationConfig, FourierConfig, LayoutConfig, SimulationConfig};
pub use error::{ConfigError, Result};
pub use series::{term, HarmonicTerm, Rotation, WaveformKind};
pub use simulation::{DrawableState, Simulation};
pub use trace::{TracePoint, WaveTrace};
