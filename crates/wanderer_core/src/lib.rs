//! Frame loop for the Wanderer character controller
//!
//! This crate ties input, locomotion and the camera together:
//!
//! - [`FrameDriver`] - Runs one simulation tick per display refresh
//! - [`CameraRig`] - Smoothed chase camera
//! - [`CharacterRig`] - Character handle produced by the asset loader
//! - [`FrameOutput`] - What gets presented each frame
//! - [`FrameSink`] - Consumer of frame output

mod camera_rig;
mod character;
mod frame_driver;
mod output;

pub use camera_rig::{CameraMode, CameraRig, CameraRigConfig};
pub use character::{CharacterRig, RigSource};
pub use frame_driver::FrameDriver;
pub use output::{CameraPose, FrameOutput, FrameSink, PlayerTransform, RecordingSink};

// Re-export the lower layers for convenient access through wanderer_core
pub use wanderer_input::{DeviceClass, DeviceInfo, InputAggregator, InputState, Intent, TouchLayout};
pub use wanderer_math::Vec3;
pub use wanderer_physics::{
    ColliderSlot, Locomotion, LocomotionConfig, LocomotionIntegrator, PlayerState, TerrainMesh,
    WorldCollider,
};
