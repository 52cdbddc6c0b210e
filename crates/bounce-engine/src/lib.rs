//! Bounce engine crate.
//!
//! A single particle falls under gravity, bounces off the viewport edges, and
//! is drawn as a quad whose color tracks its speed.
//!
//! - [`physics`], [`color`], [`math`] and [`config`] are pure and testable
//!   without a GPU.
//! - [`window`], [`device`], [`render`] and [`core`] own the platform side.

pub mod color;
pub mod config;
pub mod core;
pub mod device;
pub mod logging;
pub mod math;
pub mod physics;
pub mod render;
pub mod time;
pub mod window;
