//! Motion integration for the single simulated body.
//!
//! Pure arithmetic: no allocation, no I/O, no failure modes. The frame loop
//! owns the [`Body`] and calls [`Body::advance`] once per frame with a clamped
//! `dt` and the [`Extents`] of the current framebuffer.

mod body;
mod bounds;

pub use body::{Body, BodyParams, Extents};
pub use bounds::{Bounds, Edge};
