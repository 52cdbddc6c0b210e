//! Contract between the window runtime and the application.
//!
//! The runtime owns the event loop, window and GPU; the app only sees a
//! [`FrameCtx`] once per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
