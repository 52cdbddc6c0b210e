//! Small value-type math used by the simulation and the renderer.
//!
//! Conventions:
//! - positions live in normalized device coordinates (NDC), `[-1, 1]` on both axes
//! - +X right, +Y up
//! - matrices are column-major (`index = col * 4 + row`), matching WGSL `mat4x4<f32>`

mod mat4;
mod rgba;
mod vec3;

pub use mat4::Mat4;
pub use rgba::{Rgb, Rgba};
pub use vec3::Vec3;
