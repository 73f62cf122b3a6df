/// Monotonic tick source, one tick per rendered frame.
#[derive(Debug, Default)]
pub struct TickCounter {
    next: u64,
}

impl TickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tick and moves on to the next one.
    pub fn advance(&mut self) -> u64 {
        let tick = self.next;
        self.next = self.next.wrapping_add(1);
        tick
    }
}

/// Whether a generation step is due on `tick` when stepping every
/// `ticks_per_generation` ticks.
pub fn is_generation_tick(tick: u64, ticks_per_generation: u64) -> bool {
    ticks_per_generation != 0 && tick % ticks_per_generation == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_increments() {
        let mut ticks = TickCounter::new();
        assert_eq!(ticks.advance(), 0);
        assert_eq!(ticks.advance(), 1);
        assert_eq!(ticks.advance(), 2);
    }

    #[test]
    fn every_nth_tick_is_a_generation() {
        let due: Vec<u64> = (0..100).filter(|tick| is_generation_tick(*tick, 30)).collect();
        assert_eq!(due, vec![0, 30, 60, 90]);
    }

    #[test]
    fn zero_interval_never_fires() {
        assert!(!is_generation_tick(0, 0));
    }
}
