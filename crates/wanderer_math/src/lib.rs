//! 3D Mathematics Library
//!
//! This crate provides the vector, matrix and ray types used by the
//! Wanderer character controller.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components (Y up)
//! - [`Mat4`] - column-major 4x4 affine matrix
//! - [`Ray3`] / [`Triangle`] - ray casting against triangle surfaces

mod vec3;
pub mod mat4;
pub mod ray;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use ray::{Ray3, Triangle};
