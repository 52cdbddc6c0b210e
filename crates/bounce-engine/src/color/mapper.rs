use crate::math::{Rgb, Rgba, Vec3};

use super::{ColorRamp, RampError};

/// Component-wise linear interpolation, `a + (b - a) * t`.
///
/// `t` is not clamped.
#[inline]
pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
    )
}

/// Maps a velocity to an opaque color by its speed.
///
/// Speed is normalized by `max_speed` and clamped to `[0, 1]`, then looked up in
/// the ramp. Anything at or above `max_speed` gets the last stop's color.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedColorMapper {
    ramp: ColorRamp,
    max_speed: f32,
}

impl SpeedColorMapper {
    pub const DEFAULT_MAX_SPEED: f32 = 6.0;

    pub fn new(ramp: ColorRamp, max_speed: f32) -> Result<Self, RampError> {
        if !(max_speed.is_finite() && max_speed > 0.0) {
            return Err(RampError::BadMaxSpeed { value: max_speed });
        }
        Ok(Self { ramp, max_speed })
    }

    /// Normalized speed in `[0, 1]`. NaN for non-finite velocities.
    #[inline]
    pub fn normalized_speed(&self, velocity: Vec3) -> f32 {
        (velocity.length() / self.max_speed).clamp(0.0, 1.0)
    }

    /// Color for `velocity`; opaque white if the ramp has no matching span.
    pub fn color_for(&self, velocity: Vec3) -> Rgba {
        self.try_color_for(velocity).unwrap_or(Rgba::white())
    }

    /// Like [`color_for`](Self::color_for) but reports the no-span case.
    ///
    /// A validated ramp covers every finite input, so `None` only shows up for
    /// NaN velocities.
    pub fn try_color_for(&self, velocity: Vec3) -> Option<Rgba> {
        let s = self.ramp.snap_to_stop(self.normalized_speed(velocity));
        let (lo, hi) = self.ramp.segment(s)?;

        let span = hi.pos - lo.pos;
        let t = if span > 0.0 { (s - lo.pos) / span } else { 0.0 };

        Some(lerp(lo.color, hi.color, t).with_alpha(1.0))
    }
}

impl Default for SpeedColorMapper {
    fn default() -> Self {
        Self {
            ramp: ColorRamp::heat(),
            max_speed: Self::DEFAULT_MAX_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorStop;

    const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    fn speed(v: f32) -> Vec3 {
        Vec3::new(v, 0.0, 0.0)
    }

    fn close(a: Rgba, b: Rgba) -> bool {
        let eps = 1e-5;
        (a.r - b.r).abs() < eps
            && (a.g - b.g).abs() < eps
            && (a.b - b.b).abs() < eps
            && (a.a - b.a).abs() < eps
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgb::new(0.0, 0.2, 1.0);
        let b = Rgb::new(1.0, 0.4, 0.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), Rgb::new(1.0, 0.4, 0.0));
        assert_eq!(lerp(a, b, 0.5), Rgb::new(0.5, 0.3, 0.5));
    }

    // ── stop colors ───────────────────────────────────────────────────────

    #[test]
    fn zero_speed_is_first_stop() {
        let m = SpeedColorMapper::default();
        assert_eq!(m.color_for(Vec3::zero()), BLUE);
    }

    #[test]
    fn max_speed_is_last_stop() {
        let m = SpeedColorMapper::default();
        assert_eq!(m.color_for(speed(6.0)), WHITE);
        assert_eq!(m.color_for(Vec3::new(0.0, -6.0, 0.0)), WHITE);
    }

    #[test]
    fn interior_stops_are_hit_exactly() {
        let m = SpeedColorMapper::default();
        assert_eq!(m.color_for(speed(0.6 * 6.0)), RED);
        assert_eq!(m.color_for(speed(0.8 * 6.0)), YELLOW);
        // 3.6 / 6.0 rounds to one ulp below 0.6 in f32.
        assert_eq!(m.color_for(speed(3.6)), RED);
        assert_eq!(m.color_for(speed(4.8)), YELLOW);
        assert_eq!(m.color_for(Vec3::new(0.0, -3.6, 0.0)), RED);
    }

    #[test]
    fn speeds_off_a_stop_still_blend() {
        let m = SpeedColorMapper::default();
        let c = m.color_for(speed(3.59));
        assert_ne!(c, RED);
        assert!(c.r < 1.0 && c.b > 0.0, "{c:?}");
    }

    #[test]
    fn speed_above_max_is_clamped() {
        let m = SpeedColorMapper::default();
        for v in [6.0, 6.5, 60.0, 1.0e30] {
            assert_eq!(m.color_for(speed(v)), WHITE, "speed {v}");
        }
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn blends_between_stops() {
        let m = SpeedColorMapper::default();
        // s = 0.3, halfway between blue (0.0) and red (0.6).
        let c = m.color_for(speed(1.8));
        assert!(close(c, Rgba::new(0.5, 0.0, 0.5, 1.0)), "{c:?}");

        // s = 0.7, halfway between red and yellow.
        let c = m.color_for(speed(4.2));
        assert!(close(c, Rgba::new(1.0, 0.5, 0.0, 1.0)), "{c:?}");
    }

    #[test]
    fn uses_full_vector_magnitude() {
        let m = SpeedColorMapper::default();
        assert_eq!(
            m.color_for(Vec3::new(3.0, 4.0, 0.0)),
            m.color_for(speed(5.0))
        );
    }

    #[test]
    fn output_is_opaque_and_in_range_across_sweep() {
        let m = SpeedColorMapper::default();
        for i in 0..=700 {
            let v = i as f32 * 0.01;
            let c = m.try_color_for(speed(v)).expect("validated ramp covers every speed");
            assert_eq!(c.a, 1.0);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&ch), "speed {v}: {c:?}");
            }
        }
    }

    #[test]
    fn zero_width_span_uses_lower_color() {
        let ramp = ColorRamp::new(vec![
            ColorStop::new(0.0, Rgb::new(0.0, 1.0, 0.0)),
            ColorStop::new(0.0, Rgb::new(1.0, 0.0, 0.0)),
            ColorStop::new(1.0, Rgb::new(0.0, 0.0, 1.0)),
        ])
        .unwrap();
        let m = SpeedColorMapper::new(ramp, 1.0).unwrap();
        assert_eq!(m.color_for(Vec3::zero()), Rgba::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn custom_max_speed() {
        let m = SpeedColorMapper::new(ColorRamp::heat(), 4.0).unwrap();
        assert_eq!(m.color_for(speed(4.0)), WHITE);
        assert_eq!(m.color_for(speed(0.6 * 4.0)), RED);
    }

    // ── fallback + validation ─────────────────────────────────────────────

    #[test]
    fn nan_velocity_falls_back_to_white() {
        let m = SpeedColorMapper::default();
        let v = Vec3::new(f32::NAN, 0.0, 0.0);
        assert_eq!(m.try_color_for(v), None);
        assert_eq!(m.color_for(v), WHITE);
    }

    #[test]
    fn rejects_bad_max_speed() {
        for v in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(SpeedColorMapper::new(ColorRamp::heat(), v).is_err(), "{v}");
        }
    }
}
