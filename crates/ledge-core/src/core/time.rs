/// Fixed timestep accumulator, in whole milliseconds.
///
/// Movement integrates elapsed milliseconds, so the accumulator works in the
/// same unit: feed it variable frame deltas and it answers how many fixed
/// ticks to run. Ensures game logic advances at a consistent rate regardless
/// of frame time.
pub struct FixedTimestep {
    /// The fixed delta per tick, in milliseconds.
    dt_ms: u64,
    /// Accumulated time from variable frame deltas.
    accumulator_ms: u64,
}

impl FixedTimestep {
    pub fn new(dt_ms: u64) -> Self {
        Self {
            dt_ms,
            accumulator_ms: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed ticks
    /// to run.
    pub fn accumulate(&mut self, frame_ms: u64) -> u32 {
        self.accumulator_ms += frame_ms;
        // Cap to prevent spiral of death (max 10 ticks per frame)
        self.accumulator_ms = self.accumulator_ms.min(self.dt_ms * 10);
        let steps = self.accumulator_ms / self.dt_ms;
        self.accumulator_ms -= steps * self.dt_ms;
        steps as u32
    }

    /// The fixed delta per tick, in milliseconds.
    pub fn dt_ms(&self) -> u64 {
        self.dt_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(16);
        assert_eq!(ts.accumulate(16), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(16);
        assert_eq!(ts.accumulate(8), 0);
        assert_eq!(ts.accumulate(10), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(16);
        assert_eq!(ts.accumulate(1000), 10);
    }

    #[test]
    fn remainder_carries_over() {
        let mut ts = FixedTimestep::new(16);
        assert_eq!(ts.accumulate(20), 1);
        // 4 ms carried; 12 more completes the next tick.
        assert_eq!(ts.accumulate(12), 1);
    }
}
