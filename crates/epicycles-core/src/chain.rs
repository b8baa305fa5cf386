use std::f64::consts::TAU;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::series::{term, WaveformKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// One rotating vector of the chain, drawn as a circle of `radius` around
/// `start` with a spoke to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainSegment {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
}

/// Epicycle chain for a single instant. Segment `i` ends where segment `i + 1`
/// starts; the first segment starts at the anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    pub segments: Vec<ChainSegment>,
    pub tip: Point,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Inputs to one chain evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ChainParams {
    pub kind: WaveformKind,
    pub term_count: usize,
    pub elapsed_time: f64,
    pub rotation_speed: f64,
    pub scale: f64,
    pub anchor: Point,
}

/// Compose `term_count` harmonic vectors head to tail starting at `anchor`.
pub fn evaluate(
    kind: WaveformKind,
    term_count: usize,
    elapsed_time: f64,
    rotation_speed: f64,
    scale: f64,
    anchor: Point,
) -> Chain {
    let mut chain = Chain {
        segments: Vec::with_capacity(term_count),
        tip: anchor,
    };
    evaluate_into(
        &mut chain,
        &ChainParams {
            kind,
            term_count,
            elapsed_time,
            rotation_speed,
            scale,
            anchor,
        },
    );
    chain
}

/// Same as [`evaluate`] but rebuilds `chain` in place, reusing its allocation.
/// Every segment is recomputed from scratch.
pub fn evaluate_into(chain: &mut Chain, params: &ChainParams) {
    chain.segments.clear();
    let mut cursor = params.anchor;

    for index in 0..params.term_count {
        let term = term(params.kind, index);
        let angle = term.direction.sign()
            * term.frequency as f64
            * params.elapsed_time
            * TAU
            * params.rotation_speed;
        let length = params.scale * term.amplitude;
        let next = cursor + Point::new(length * angle.cos(), length * angle.sin());

        chain.segments.push(ChainSegment {
            start: cursor,
            end: next,
            radius: length.abs(),
        });
        cursor = next;
    }

    chain.tip = cursor;
}
