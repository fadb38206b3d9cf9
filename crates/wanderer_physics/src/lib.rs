//! Character physics for Wanderer
//!
//! This crate provides:
//! - A static world collider (implicit plane or loaded terrain mesh)
//! - An atomically swappable collider slot for asynchronous terrain loads
//! - Kinematic player locomotion with gravity, jumping and ground snapping

pub mod collider;
pub mod player;
pub mod terrain;

// Re-export commonly used types
pub use collider::{
    ColliderError, ColliderSlot, GroundHit, WorldCollider, DEFAULT_GROUND_PROBE_LENGTH,
    DEFAULT_PLANE_HEIGHT,
};
pub use player::{Locomotion, LocomotionConfig, LocomotionIntegrator, PlayerState, Transition};
pub use terrain::{flat_quad, TerrainMesh};
