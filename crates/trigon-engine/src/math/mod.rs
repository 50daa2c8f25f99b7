//! Matrix math for the transform uniform.
//!
//! Column-major `[f32; 16]` matrices matching WGSL `mat4x4<f32>`, so a matrix
//! can be uploaded verbatim as uniform data.

mod mat4;

pub use mat4::{approx_eq, multiply, translation_x, uniform_scale, Mat4, IDENTITY};
