use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::chain::{evaluate_into, Chain, ChainParams, ChainSegment, Point};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::series::WaveformKind;
use crate::trace::{TracePoint, WaveTrace};

/// Read-only view of one frame, handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct DrawableState<'a> {
    pub chain: &'a [ChainSegment],
    pub tip: Point,
    pub anchor: Point,
    pub trace: &'a VecDeque<TracePoint>,
    pub term_count: usize,
    pub rotation_speed: f64,
    pub waveform: &'static str,
    pub elapsed_time: f64,
    pub paused: bool,
}

/// Owns the animation state and advances it one frame per [`Simulation::update`].
#[derive(Debug, Clone)]
pub struct Simulation {
    waveform: WaveformKind,
    elapsed_time: f64,
    time_step: f64,
    time_speed: f64,
    term_count: usize,
    max_terms: usize,
    rotation_speed: f64,
    min_rotation_speed: f64,
    rotation_step: f64,
    scale: f64,
    anchor: Point,
    paused: bool,
    chain: Chain,
    trace: WaveTrace,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let fourier = &config.fourier;

        let term_count = fourier.initial_terms.clamp(1, fourier.max_terms);
        if term_count != fourier.initial_terms {
            warn!(
                requested = fourier.initial_terms,
                max_terms = fourier.max_terms,
                term_count,
                "initial_terms out of range, clamped"
            );
        }
        let rotation_speed = fourier.rotation_speed.max(fourier.min_rotation_speed);
        if rotation_speed != fourier.rotation_speed {
            warn!(
                requested = fourier.rotation_speed,
                floor = fourier.min_rotation_speed,
                "rotation_speed below floor, raised"
            );
        }

        let mut simulation = Self {
            waveform: fourier.waveform,
            elapsed_time: 0.0,
            time_step: config.animation.time_step,
            time_speed: config.animation.time_speed,
            term_count,
            max_terms: fourier.max_terms,
            rotation_speed,
            min_rotation_speed: fourier.min_rotation_speed,
            rotation_step: fourier.rotation_step,
            scale: fourier.scale,
            anchor: config.layout.anchor_point(),
            paused: false,
            chain: Chain::default(),
            trace: WaveTrace::new(config.layout.trace_width, fourier.wave_speed),
        };
        simulation.recompute_chain();

        info!(
            waveform = %simulation.waveform,
            term_count,
            max_terms = simulation.max_terms,
            rotation_speed,
            scale = simulation.scale,
            time_step = simulation.time_step,
            time_speed = simulation.time_speed,
            trace_width = simulation.trace.max_offset(),
            "simulation created"
        );
        Ok(simulation)
    }

    /// Add `delta` terms, keeping the count within `[1, max_terms]`.
    pub fn change_term_count(&mut self, delta: i64) {
        let step = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        let next = if delta >= 0 {
            self.term_count.saturating_add(step)
        } else {
            self.term_count.saturating_sub(step)
        };
        self.term_count = next.clamp(1, self.max_terms);
        debug!(delta, term_count = self.term_count, "term count changed");
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Switch waveform. Trace history belongs to the old waveform, so it is
    /// discarded along with elapsed time.
    pub fn toggle_waveform(&mut self) {
        self.waveform = self.waveform.toggled();
        self.restart();
        debug!(waveform = %self.waveform, "waveform toggled");
    }

    /// Rewind to time zero and clear the trace, keeping every other setting.
    pub fn reset(&mut self) {
        self.restart();
        debug!("simulation reset");
    }

    pub fn adjust_rotation_speed(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.rotation_speed = (self.rotation_speed + delta).max(self.min_rotation_speed);
        debug!(delta, rotation_speed = self.rotation_speed, "rotation speed adjusted");
    }

    pub fn speed_up(&mut self) {
        self.adjust_rotation_speed(self.rotation_step);
    }

    pub fn slow_down(&mut self) {
        self.adjust_rotation_speed(-self.rotation_step);
    }

    /// Advance one frame. Call at most once per rendered frame; a no-op while
    /// paused so the last frame stays on screen.
    pub fn update(&mut self) {
        if self.paused {
            return;
        }

        self.elapsed_time += self.time_step * self.time_speed;
        self.recompute_chain();
        self.trace.add(self.chain.tip.y);
        self.trace.advance();

        trace!(
            elapsed_time = self.elapsed_time,
            tip_x = self.chain.tip.x,
            tip_y = self.chain.tip.y,
            trace_len = self.trace.len(),
            "tick"
        );
    }

    pub fn drawable_state(&self) -> DrawableState<'_> {
        DrawableState {
            chain: &self.chain.segments,
            tip: self.chain.tip,
            anchor: self.anchor,
            trace: self.trace.points(),
            term_count: self.term_count,
            rotation_speed: self.rotation_speed,
            waveform: self.waveform.display_name(),
            elapsed_time: self.elapsed_time,
            paused: self.paused,
        }
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn min_rotation_speed(&self) -> f64 {
        self.min_rotation_speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn waveform(&self) -> WaveformKind {
        self.waveform
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn tip(&self) -> Point {
        self.chain.tip
    }

    pub fn trace(&self) -> &WaveTrace {
        &self.trace
    }

    fn restart(&mut self) {
        self.trace.reset();
        self.elapsed_time = 0.0;
        self.recompute_chain();
    }

    fn recompute_chain(&mut self) {
        let params = ChainParams {
            kind: self.waveform,
            term_count: self.term_count,
            elapsed_time: self.elapsed_time,
            rotation_speed: self.rotation_speed,
            scale: self.scale,
            anchor: self.anchor,
        };
        evaluate_into(&mut self.chain, &params);
    }
}
