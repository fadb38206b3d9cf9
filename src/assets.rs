//! Asset loading
//!
//! Terrain and character models are loaded off the frame thread. The results
//! reach the frame driver through the collider slot (terrain) and the
//! character channel (rig). Failures are logged and absorbed here: a missing
//! terrain leaves the ground plane in place, a missing character becomes the
//! fallback box.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use wanderer_core::CharacterRig;
use wanderer_math::{mat4, Mat4, Triangle, Vec3};
use wanderer_physics::{ColliderSlot, TerrainMesh};

/// Asset loading error
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a usable glTF document
    Gltf { path: PathBuf, message: String },
    /// The terrain has no triangles to collide with
    EmptyTerrain(PathBuf),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            AssetError::Gltf { path, message } => {
                write!(f, "Failed to load glTF '{}': {}", path.display(), message)
            }
            AssetError::EmptyTerrain(path) => {
                write!(f, "Terrain '{}' contains no triangles", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn import(path: &Path) -> Result<(gltf::Document, Vec<gltf::buffer::Data>), AssetError> {
    std::fs::metadata(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (document, buffers, _images) = gltf::import(path).map_err(|e| AssetError::Gltf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok((document, buffers))
}

/// Load a terrain model and flatten it into world-space triangles
pub fn load_terrain(path: &Path) -> Result<TerrainMesh, AssetError> {
    let (document, buffers) = import(path)?;
    let triangles = world_triangles(&document, &buffers);
    if triangles.is_empty() {
        return Err(AssetError::EmptyTerrain(path.to_path_buf()));
    }

    log::debug!(
        "Terrain '{}': {} triangles from {} meshes",
        path.display(),
        triangles.len(),
        document.meshes().count()
    );
    Ok(TerrainMesh::new(triangles))
}

/// Load a character model
pub fn load_character(path: &Path, spawn: Vec3) -> Result<CharacterRig, AssetError> {
    let (document, _buffers) = import(path)?;
    let meshes = document.meshes().count();
    log::debug!("Character '{}': {} meshes", path.display(), meshes);
    Ok(CharacterRig::model(spawn, meshes))
}

/// Every triangle of the default scene, transformed to world space
fn world_triangles(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    let scene = document.default_scene().or_else(|| document.scenes().next());

    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                collect_node(&node, mat4::IDENTITY, buffers, &mut triangles);
            }
        }
        None => log::warn!("glTF document has no scenes"),
    }
    triangles
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<Triangle>,
) {
    let world = mat4::mul(parent, node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("Skipping {:?} primitive in mesh {}", primitive.mode(), mesh.index());
                continue;
            }

            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data.0[..]));
            let positions: Vec<Vec3> = match reader.read_positions() {
                Some(iter) => iter
                    .map(|p| mat4::transform_point(&world, Vec3::from(p)))
                    .collect(),
                None => continue,
            };
            let indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };

            for tri in indices.chunks_exact(3) {
                let vertex = |i: u32| positions.get(i as usize).copied();
                if let (Some(a), Some(b), Some(c)) = (vertex(tri[0]), vertex(tri[1]), vertex(tri[2])) {
                    out.push(Triangle::new(a, b, c));
                }
            }
        }
    }

    for child in node.children() {
        collect_node(&child, world, buffers, out);
    }
}

/// Background loader for the terrain and the character
#[derive(Debug, Clone)]
pub struct AssetLoader {
    pub terrain_path: PathBuf,
    pub character_path: PathBuf,
    pub spawn: Vec3,
    pub fallback_spawn: Vec3,
}

impl AssetLoader {
    /// Start loading on a worker thread
    ///
    /// The character is loaded first so the player appears as early as
    /// possible. Exactly one rig is sent on `characters`.
    pub fn spawn(
        self,
        slot: Arc<ColliderSlot>,
        characters: Sender<CharacterRig>,
    ) -> Result<JoinHandle<()>, AssetError> {
        std::thread::Builder::new()
            .name("asset-loader".to_string())
            .spawn(move || self.run(&slot, &characters))
            .map_err(|source| AssetError::Io {
                path: PathBuf::new(),
                source,
            })
    }

    /// Load everything on the current thread
    pub fn run(&self, slot: &ColliderSlot, characters: &Sender<CharacterRig>) {
        let rig = match load_character(&self.character_path, self.spawn) {
            Ok(rig) => {
                log::info!("Character loaded from '{}'", self.character_path.display());
                rig
            }
            Err(e) => {
                log::warn!("{}; using fallback character", e);
                CharacterRig::fallback(self.fallback_spawn)
            }
        };
        if characters.send(rig).is_err() {
            log::debug!("Frame driver gone before the character was ready");
        }

        match load_terrain(&self.terrain_path) {
            Ok(terrain) => {
                let count = terrain.triangle_count();
                match slot.publish_terrain(terrain) {
                    Ok(()) => log::info!("Terrain collider ready ({} triangles)", count),
                    Err(e) => log::warn!("{}", e),
                }
            }
            Err(e) => log::warn!("{}; staying on the ground plane", e),
        }
    }
}
