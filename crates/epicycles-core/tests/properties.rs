//! Property-based tests for the epicycle engine.

use proptest::prelude::*;
use epicycles_core::{evaluate, term, Point, Simulation, SimulationConfig, WaveTrace, WaveformKind};

fn waveform() -> impl Strategy<Value = WaveformKind> {
    prop_oneof![Just(WaveformKind::Square), Just(WaveformKind::Sawtooth)]
}

proptest! {
    #[test]
    fn square_harmonics_are_odd(index in 0usize..100_000) {
        let t = term(WaveformKind::Square, index);
        prop_assert_eq!(t.frequency % 2, 1);
        prop_assert!(t.amplitude > 0.0);
    }

    #[test]
    fn sawtooth_harmonic_follows_index(index in 0usize..100_000) {
        let t = term(WaveformKind::Sawtooth, index);
        prop_assert_eq!(t.frequency, index as u128 + 1);
        prop_assert_eq!(t.direction.sign() > 0.0, (index + 1) % 2 == 1);
    }

    #[test]
    fn harmonics_stay_exact_past_u32_range(index in (u32::MAX as usize)..=usize::MAX) {
        let square = term(WaveformKind::Square, index);
        prop_assert_eq!(square.frequency, 2 * index as u128 + 1);
        prop_assert_eq!(square.frequency % 2, 1);
        prop_assert!(square.amplitude > 0.0);

        let saw = term(WaveformKind::Sawtooth, index);
        prop_assert_eq!(saw.frequency, index as u128 + 1);
        prop_assert_eq!(saw.direction.sign() > 0.0, saw.frequency % 2 == 1);
    }

    #[test]
    fn chain_has_one_linked_segment_per_term(
        kind in waveform(),
        term_count in 1usize..80,
        time in 0.0f64..1_000.0,
        speed in 0.05f64..5.0,
        scale in 0.1f64..500.0,
        (x, y) in (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0),
    ) {
        let anchor = Point::new(x, y);
        let chain = evaluate(kind, term_count, time, speed, scale, anchor);

        prop_assert_eq!(chain.len(), term_count);
        prop_assert_eq!(chain.segments[0].start, anchor);
        for pair in chain.segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        prop_assert_eq!(chain.tip, chain.segments[term_count - 1].end);
        for segment in &chain.segments {
            prop_assert!(segment.radius >= 0.0);
        }
    }

    #[test]
    fn term_count_stays_in_bounds(deltas in prop::collection::vec(-200i64..200, 0..64)) {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        for delta in deltas {
            sim.change_term_count(delta);
            prop_assert!((1..=sim.max_terms()).contains(&sim.term_count()));
            sim.update();
            prop_assert_eq!(sim.chain().len(), sim.term_count());
        }
    }

    #[test]
    fn rotation_speed_respects_floor(deltas in prop::collection::vec(-5.0f64..5.0, 0..64)) {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        for delta in deltas {
            sim.adjust_rotation_speed(delta);
            prop_assert!(sim.rotation_speed() >= sim.min_rotation_speed());
        }
    }

    #[test]
    fn trace_length_is_bounded(
        max_offset in 1.0f64..2_000.0,
        scroll_speed in 0.5f64..20.0,
        ticks in 0usize..3_000,
    ) {
        let mut trace = WaveTrace::new(max_offset, scroll_speed);
        for i in 0..ticks {
            trace.add(i as f64);
            trace.advance();
            prop_assert!(trace.len() <= trace.capacity_bound());
        }
        let offsets: Vec<f64> = trace.points().iter().map(|p| p.offset).collect();
        for pair in offsets.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
