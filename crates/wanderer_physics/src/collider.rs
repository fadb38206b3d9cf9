//! World collider
//!
//! The ground the character walks on is either an implicit flat plane or a
//! loaded terrain mesh. Both answer the same ground query, so the
//! integrator never has to check which one it is talking to.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use wanderer_math::Vec3;

use crate::terrain::TerrainMesh;

/// Default reach of the downward ground probe (world units)
pub const DEFAULT_GROUND_PROBE_LENGTH: f32 = 2.0;

/// Default height of the fallback ground plane
pub const DEFAULT_PLANE_HEIGHT: f32 = 0.0;

/// Result of a ground-height query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundHit {
    /// Surface height under the query point
    pub height: f32,
    /// Distance from the query point down to the surface
    pub distance: f32,
    /// Whether a surface was found within reach
    pub hit: bool,
}

impl GroundHit {
    /// No surface within reach
    pub const MISS: Self = Self {
        height: 0.0,
        distance: f32::INFINITY,
        hit: false,
    };
}

/// Static collidable world
#[derive(Clone, Debug)]
pub enum WorldCollider {
    /// Implicit infinite ground plane, used until terrain is available
    Plane { height: f32, probe_length: f32 },
    /// Loaded terrain surface
    Mesh {
        terrain: Arc<TerrainMesh>,
        probe_length: f32,
    },
}

impl Default for WorldCollider {
    fn default() -> Self {
        Self::plane(DEFAULT_PLANE_HEIGHT)
    }
}

impl WorldCollider {
    /// Plane-backed collider at the given height
    pub fn plane(height: f32) -> Self {
        WorldCollider::Plane {
            height,
            probe_length: DEFAULT_GROUND_PROBE_LENGTH,
        }
    }

    /// Mesh-backed collider
    pub fn mesh(terrain: Arc<TerrainMesh>) -> Self {
        WorldCollider::Mesh {
            terrain,
            probe_length: DEFAULT_GROUND_PROBE_LENGTH,
        }
    }

    /// Builder: set the ground probe reach
    pub fn with_probe_length(mut self, length: f32) -> Self {
        match &mut self {
            WorldCollider::Plane { probe_length, .. } | WorldCollider::Mesh { probe_length, .. } => {
                *probe_length = length;
            }
        }
        self
    }

    /// Reach of the ground probe
    ///
    /// A surface further below the query point than this does not support
    /// the character.
    pub fn probe_length(&self) -> f32 {
        match self {
            WorldCollider::Plane { probe_length, .. } | WorldCollider::Mesh { probe_length, .. } => {
                *probe_length
            }
        }
    }

    pub fn is_mesh_backed(&self) -> bool {
        matches!(self, WorldCollider::Mesh { .. })
    }

    /// Ground height under `position`
    ///
    /// The plane always reports a hit at its height with zero distance. The
    /// mesh casts a ray straight down and reports a hit only if a surface
    /// lies within the probe length.
    pub fn ground_height_at(&self, position: Vec3) -> GroundHit {
        match self {
            WorldCollider::Plane { height, .. } => GroundHit {
                height: *height,
                distance: 0.0,
                hit: true,
            },
            WorldCollider::Mesh {
                terrain,
                probe_length,
            } => match terrain.raycast_down(position, *probe_length) {
                Some(distance) => GroundHit {
                    height: position.y - distance,
                    distance,
                    hit: true,
                },
                None => GroundHit::MISS,
            },
        }
    }
}

/// Error publishing a collider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColliderError {
    /// Terrain was already published for this session
    AlreadyMeshBacked,
}

impl fmt::Display for ColliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColliderError::AlreadyMeshBacked => write!(f, "Collider is already mesh-backed"),
        }
    }
}

impl std::error::Error for ColliderError {}

/// Shared, atomically swappable collider
///
/// The asset loader publishes terrain from its own thread; the frame driver
/// loads a snapshot at the start of every frame. The swap is a single
/// pointer store, so a reader sees either the old plane or the complete
/// mesh collider.
#[derive(Debug)]
pub struct ColliderSlot {
    current: ArcSwap<WorldCollider>,
}

impl Default for ColliderSlot {
    fn default() -> Self {
        Self::new(WorldCollider::default())
    }
}

impl ColliderSlot {
    pub fn new(initial: WorldCollider) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Snapshot of the current collider
    pub fn current(&self) -> Arc<WorldCollider> {
        self.current.load_full()
    }

    pub fn is_mesh_backed(&self) -> bool {
        self.current.load().is_mesh_backed()
    }

    /// Swap the plane for a terrain mesh
    ///
    /// Keeps the current probe length. The collider moves from plane-backed
    /// to mesh-backed at most once; later publishes are rejected.
    pub fn publish_terrain(&self, terrain: TerrainMesh) -> Result<(), ColliderError> {
        let current = self.current.load_full();
        if current.is_mesh_backed() {
            return Err(ColliderError::AlreadyMeshBacked);
        }

        let next = Arc::new(
            WorldCollider::mesh(Arc::new(terrain)).with_probe_length(current.probe_length()),
        );
        let previous = self.current.compare_and_swap(&current, next);
        if Arc::ptr_eq(&previous, &current) {
            Ok(())
        } else {
            Err(ColliderError::AlreadyMeshBacked)
        }
    }
}
