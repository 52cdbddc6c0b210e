use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds. Always positive and finite.
    pub dt: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces the per-frame `dt` fed to the integrator.
///
/// The raw delta is clamped to `[dt_min, dt_max]`: the integrator does not
/// validate its step, and a stall (debugger, window drag, minimize) would
/// otherwise teleport the body through a wall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Creates a clock starting now, with the default clamps (0.1 ms, 250 ms).
    pub fn new() -> Self {
        Self::starting_at(Instant::now(), Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: start,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline so the next tick does not include the gap.
    ///
    /// Call after the window is restored or the surface was lost.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// `now` earlier than the previous tick counts as zero elapsed time (then
    /// clamped up to `dt_min`).
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw = now.saturating_duration_since(self.last);
        let dt = raw.clamp(self.dt_min, self.dt_max);

        if raw > self.dt_max {
            log::debug!(
                "frame {} took {:.1} ms, clamped to {:.1} ms",
                self.frame_index,
                raw.as_secs_f64() * 1000.0,
                dt.as_secs_f64() * 1000.0
            );
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(start: Instant) -> FrameClock {
        FrameClock::starting_at(start, FrameClock::DEFAULT_DT_MIN, FrameClock::DEFAULT_DT_MAX)
    }

    #[test]
    fn in_range_delta_passes_through() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(16));
        assert_eq!(ft.dt, Duration::from_millis(16).as_secs_f32());
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn long_stall_is_clamped_to_max() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        let ft = c.tick_at(t0 + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn zero_and_backwards_deltas_are_clamped_to_min() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut c = clock(t0);
        assert_eq!(c.tick_at(t0).dt, Duration::from_micros(100).as_secs_f32());
        assert_eq!(
            c.tick_at(t0 - Duration::from_millis(10)).dt,
            Duration::from_micros(100).as_secs_f32()
        );
    }

    #[test]
    fn frame_index_increments_per_tick() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        for i in 0..5u64 {
            let ft = c.tick_at(t0 + Duration::from_millis(10 * (i + 1)));
            assert_eq!(ft.frame_index, i);
            assert!(ft.dt > 0.0 && ft.dt.is_finite());
        }
        assert_eq!(c.frame_index(), 5);
    }

    #[test]
    fn custom_clamps_apply() {
        let t0 = Instant::now();
        let mut c = FrameClock::starting_at(t0, Duration::from_millis(5), Duration::from_millis(20));
        assert_eq!(c.tick_at(t0 + Duration::from_millis(1)).dt, 0.005);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(100)).dt, 0.02);
    }
}
