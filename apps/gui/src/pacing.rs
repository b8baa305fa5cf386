/// Fixed-rate tick schedule for the simulation, independent of how often
/// egui repaints.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: f64,
    next_tick: Option<f64>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: 1.0 / f64::from(fps.max(1)),
            next_tick: None,
        }
    }

    /// Returns true when a tick is due at `now` (seconds). The schedule
    /// advances by whole intervals; after a stall longer than one interval the
    /// missed ticks are dropped rather than replayed.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_tick {
            Some(next) if now < next => false,
            Some(next) => {
                let following = next + self.interval;
                self.next_tick = Some(if now >= following {
                    now + self.interval
                } else {
                    following
                });
                true
            }
            None => {
                self.next_tick = Some(now + self.interval);
                true
            }
        }
    }

    /// Seconds until the next scheduled tick.
    pub fn until_next(&self, now: f64) -> f64 {
        match self.next_tick {
            Some(next) => (next - now).max(0.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_once_per_interval() {
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(0.0));
        assert!(!pacer.poll(0.05));
        assert!(pacer.poll(0.1));
        assert!(!pacer.poll(0.1));
    }

    #[test]
    fn late_repaints_do_not_drift_the_schedule() {
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(0.0));
        let mut ticks = 1;
        // Every later repaint lands 30% of a frame late.
        for frame in 1..100 {
            if pacer.poll(frame as f64 * 0.1 + 0.03) {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 100);
    }

    #[test]
    fn early_repaint_waits_for_remaining_time() {
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(0.0));
        assert!(!pacer.poll(0.099));
        assert!((pacer.until_next(0.099) - 0.001).abs() < 1e-9);
        assert!(pacer.poll(0.1));
    }

    #[test]
    fn stall_drops_missed_ticks() {
        let mut pacer = FramePacer::new(10);
        assert!(pacer.poll(0.0));
        assert!(pacer.poll(1.0));
        assert!(!pacer.poll(1.05));
        assert!(pacer.poll(1.15));
    }
}
