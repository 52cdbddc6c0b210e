//! Speed-to-color mapping.
//!
//! A [`ColorRamp`] is validated once at startup and then owned by a
//! [`SpeedColorMapper`]; lookups never fail.

mod mapper;
mod ramp;

pub use mapper::{lerp, SpeedColorMapper};
pub use ramp::{ColorRamp, ColorStop, RampError};
