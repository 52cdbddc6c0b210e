//! GPU device + surface management.
//!
//! Creates the wgpu device/queue for a window, keeps the surface configured
//! across resizes, and hands out one [`GpuFrame`] per presented frame.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
