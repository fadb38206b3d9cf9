//! Input Handling
//!
//! This crate merges keyboard and touch input into a single per-frame
//! movement intent for the character controller.
//!
//! Sources write atomic flags from event handlers; the [`InputAggregator`]
//! snapshots them once per frame on the simulation thread.

mod aggregator;
mod device;
mod intent;
mod keyboard;
mod source;
mod touch;

pub use aggregator::{InputAggregator, MountedInput};
pub use device::{DeviceClass, DeviceInfo};
pub use intent::{Intent, InputState};
pub use keyboard::{intent_for_key, KeyboardSource};
pub use source::SourceHandle;
pub use touch::{Anchor, ScreenRect, TouchButton, TouchLayout, TouchSource, Viewport};
