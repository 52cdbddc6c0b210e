//! GPU rendering.
//!
//! Convention:
//! - geometry is a unit quad in NDC (`[-1, 1]^2`), placed by a model matrix
//! - each renderer owns its pipeline and buffers and rebuilds them lazily

mod ctx;
mod particle;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use particle::ParticleRenderer;
pub use shader::ShaderSource;
