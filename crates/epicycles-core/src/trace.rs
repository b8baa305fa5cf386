use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

const MAX_PREALLOCATED_POINTS: usize = 8192;

/// A sampled tip height, `offset` units to the right of the wave origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub offset: f64,
    pub y: f64,
}

/// Scrolling record of the chain tip's height. Newest sample first.
///
/// Each point moves right by `scroll_speed` per [`WaveTrace::advance`] and is
/// dropped once its offset reaches `max_offset`.
#[derive(Debug, Clone)]
pub struct WaveTrace {
    points: VecDeque<TracePoint>,
    max_offset: f64,
    scroll_speed: f64,
}

impl WaveTrace {
    pub fn new(max_offset: f64, scroll_speed: f64) -> Self {
        let mut trace = Self {
            points: VecDeque::new(),
            max_offset,
            scroll_speed,
        };
        trace.points.reserve(trace.capacity_bound().min(MAX_PREALLOCATED_POINTS));
        trace
    }

    /// Insert a sample at the origin, ahead of every existing point.
    pub fn add(&mut self, y: f64) {
        self.points.push_front(TracePoint { offset: 0.0, y });
    }

    /// Scroll every point right, then evict the ones past the width bound.
    pub fn advance(&mut self) {
        let speed = self.scroll_speed;
        for point in self.points.iter_mut() {
            point.offset += speed;
        }
        let max_offset = self.max_offset;
        self.points.retain(|point| point.offset < max_offset);
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &VecDeque<TracePoint> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Steady-state point count with one `add` per `advance`.
    pub fn capacity_bound(&self) -> usize {
        if self.scroll_speed <= 0.0 || !self.scroll_speed.is_finite() {
            return 0;
        }
        (self.max_offset / self.scroll_speed).ceil().max(0.0) as usize
    }
}
