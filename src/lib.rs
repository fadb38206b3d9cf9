//! Wanderer - third-person character controller
//!
//! The binary wires these together with winit; the library exposes them so
//! the loading and configuration paths can be tested without a window.

pub mod assets;
pub mod config;
pub mod input;
pub mod systems;
