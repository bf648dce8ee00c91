//! Fixed-rate tick driver fed by animation frame timestamps

use log::debug;

/// Converts display frame timestamps into a whole number of simulation ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    step_ms: f64,
    max_catch_up: u32,
    last_ms: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub const TICKS_PER_SECOND: f64 = 60.0;
    pub const MAX_CATCH_UP: u32 = 5; // Ticks per frame before dropping time

    /// # Panics
    ///
    /// Panics if `ticks_per_second <= 0.0`.
    pub fn new(ticks_per_second: f64) -> Self {
        assert!(
            ticks_per_second > 0.0,
            "Tick rate must be positive, got {}",
            ticks_per_second
        );
        Self {
            step_ms: 1000.0 / ticks_per_second,
            max_catch_up: Self::MAX_CATCH_UP,
            last_ms: None,
            accumulator: 0.0,
        }
    }

    /// Number of ticks to run for a frame at `now_ms`
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last_ms) = self.last_ms.replace(now_ms) else {
            return 1; // First frame
        };

        self.accumulator += (now_ms - last_ms).max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.step_ms && ticks < self.max_catch_up {
            self.accumulator -= self.step_ms;
            ticks += 1;
        }

        // Too far behind (tab was hidden); drop the backlog
        if self.accumulator >= self.step_ms {
            debug!("dropping {:.0}ms of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        ticks
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::TICKS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new(50.0);
        assert_eq!(clock.advance(1234.0), 1);
    }

    #[test]
    fn test_matching_refresh_rate_runs_one_tick_per_frame() {
        let mut clock = FrameClock::new(50.0); // 20ms step
        clock.advance(0.0);
        for i in 1..=10 {
            assert_eq!(clock.advance(i as f64 * 20.0), 1);
        }
    }

    #[test]
    fn test_fast_display_skips_ticks() {
        let mut clock = FrameClock::new(50.0);
        clock.advance(0.0);
        let ticks: Vec<u32> = [10.0, 20.0, 30.0, 40.0]
            .iter()
            .map(|t| clock.advance(*t))
            .collect();
        assert_eq!(ticks, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_long_pause_is_capped() {
        let mut clock = FrameClock::new(50.0);
        clock.advance(0.0);
        assert_eq!(clock.advance(10_000.0), FrameClock::MAX_CATCH_UP);
        // Backlog was dropped, normal pacing resumes
        assert_eq!(clock.advance(10_020.0), 1);
    }

    #[test]
    fn test_clock_going_backwards_runs_nothing() {
        let mut clock = FrameClock::new(50.0);
        clock.advance(100.0);
        assert_eq!(clock.advance(50.0), 0);
    }

    #[test]
    #[should_panic(expected = "Tick rate must be positive")]
    fn test_zero_rate_panics() {
        FrameClock::new(0.0);
    }
}
