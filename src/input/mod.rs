//! Input handling module
//!
//! Maps window-level keys to application actions. Movement keys never reach
//! this layer.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
