//! Character rig handle
//!
//! Produced by the asset loader when the character model is ready (or has
//! failed and been replaced by a fallback primitive).

use wanderer_math::Vec3;

/// Where the rig came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RigSource {
    /// Loaded model with this many meshes
    Model { meshes: usize },
    /// Placeholder box used when the model failed to load
    Fallback,
}

/// A character ready to be placed in the scene
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterRig {
    pub spawn: Vec3,
    pub source: RigSource,
}

impl CharacterRig {
    pub fn model(spawn: Vec3, meshes: usize) -> Self {
        Self {
            spawn,
            source: RigSource::Model { meshes },
        }
    }

    pub fn fallback(spawn: Vec3) -> Self {
        Self {
            spawn,
            source: RigSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RigSource::Fallback
    }
}
