use std::fmt;

use crate::math::Rgb;

/// A single ramp stop.
///
/// `pos` is the normalized speed in `[0, 1]` at which `color` is reached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub pos: f32,
    pub color: Rgb,
}

impl ColorStop {
    #[inline]
    pub const fn new(pos: f32, color: Rgb) -> Self {
        Self { pos, color }
    }

    /// Stop with an 8-bit color.
    #[inline]
    pub fn from_u8(pos: f32, r: u8, g: u8, b: u8) -> Self {
        Self::new(pos, Rgb::from_u8(r, g, b))
    }
}

/// Reason a stop table was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// Fewer than two stops.
    TooFewStops { len: usize },
    /// Stop position or color is NaN or infinite.
    NonFinite { index: usize },
    /// Stop position is lower than the previous one.
    Unsorted { index: usize },
    /// First stop is not at `0.0`.
    BadStart { pos: f32 },
    /// Last stop is not at `1.0`.
    BadEnd { pos: f32 },
    /// Normalizing speed is not a positive finite number.
    BadMaxSpeed { value: f32 },
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampError::TooFewStops { len } => {
                write!(f, "color ramp needs at least 2 stops, got {len}")
            }
            RampError::NonFinite { index } => write!(f, "color stop {index} is not finite"),
            RampError::Unsorted { index } => {
                write!(f, "color stop {index} is positioned before the previous stop")
            }
            RampError::BadStart { pos } => write!(f, "first color stop must be at 0.0, got {pos}"),
            RampError::BadEnd { pos } => write!(f, "last color stop must be at 1.0, got {pos}"),
            RampError::BadMaxSpeed { value } => {
                write!(f, "max speed must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for RampError {}

/// Validated, immutable stop table spanning exactly `[0, 1]`.
///
/// Invariants (checked by [`ColorRamp::new`]):
/// - at least two stops, all finite
/// - positions non-decreasing
/// - first stop at `0.0`, last stop at `1.0`
///
/// Duplicate positions are allowed and produce a hard color edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, RampError> {
        if stops.len() < 2 {
            return Err(RampError::TooFewStops { len: stops.len() });
        }

        for (index, s) in stops.iter().enumerate() {
            if !s.pos.is_finite() || !s.color.is_finite() {
                return Err(RampError::NonFinite { index });
            }
        }

        if let Some(index) = stops.windows(2).position(|w| w[1].pos < w[0].pos) {
            return Err(RampError::Unsorted { index: index + 1 });
        }

        let first = stops[0].pos;
        if first != 0.0 {
            return Err(RampError::BadStart { pos: first });
        }
        let last = stops[stops.len() - 1].pos;
        if last != 1.0 {
            return Err(RampError::BadEnd { pos: last });
        }

        Ok(Self { stops })
    }

    /// Blue → red → yellow → white, the classic heat ramp.
    pub fn heat() -> Self {
        Self {
            stops: vec![
                ColorStop::from_u8(0.0, 0, 0, 255),
                ColorStop::from_u8(0.6, 255, 0, 0),
                ColorStop::from_u8(0.8, 255, 255, 0),
                ColorStop::from_u8(1.0, 255, 255, 255),
            ],
        }
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Moves `s` onto a stop position it is within one relative `f32::EPSILON` of.
    ///
    /// Keeps stop colors exact when a speed/max ratio rounds just past a stop.
    pub(super) fn snap_to_stop(&self, s: f32) -> f32 {
        self.stops
            .iter()
            .map(|stop| stop.pos)
            .find(|&pos| (s - pos).abs() <= f32::EPSILON * pos)
            .unwrap_or(s)
    }

    /// Returns the adjacent pair whose span contains `s`, lowest first.
    pub(super) fn segment(&self, s: f32) -> Option<(&ColorStop, &ColorStop)> {
        self.stops
            .windows(2)
            .find(|w| w[0].pos <= s && s <= w[1].pos)
            .map(|w| (&w[0], &w[1]))
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::heat()
    }
}
