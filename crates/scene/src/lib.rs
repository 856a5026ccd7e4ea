//! Scene data model and persistence for the view filtering tool.
//!
//! Views form an arena indexed by [`ViewId`]; neighbor edges reference other
//! views by index into that arena and carry an opaque pairwise score. Any
//! operation that changes the arena's layout must remap every edge index in
//! one atomic pass.

mod mesh;

pub use mesh::Mesh;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Version History:
/// 1: Initial scene file with header
pub const VERSION: u32 = 1;

static SCENE_MAGIC: &[u8; 8] = b"\x86VWFLT\x00\x00";

/// Index of a view in the scene's view list.
pub type ViewId = u32;

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct Neighbor {
    /// Index of the target view, valid under the scene's current numbering.
    pub view: ViewId,
    /// Pairwise stereo-usefulness score. Filtering never inspects it.
    pub score: f32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct View {
    pub name: String,
    pub neighbors: SmallVec<[Neighbor; 8]>,
}

impl View {
    pub fn new(name: impl Into<String>) -> View {
        View {
            name: name.into(),
            neighbors: SmallVec::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SceneLoadError {
    #[error("scene data deserialization error")]
    Deserialize(#[from] bincode::Error),

    #[error("invalid scene file header")]
    InvalidHeader,

    #[error("scene file version {0} too new to be loaded")]
    TooNew(u32),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum SceneSaveError {
    #[error("scene data serialization error")]
    Serialize(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Scene {
    pub views: Vec<View>,
    pub mesh: Mesh,
}

impl Scene {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Scene, SceneLoadError> {
        let mut file = File::open(path)?;

        let mut magic = [0; 8];
        file.read_exact(&mut magic)?;
        if &magic != SCENE_MAGIC {
            return Err(SceneLoadError::InvalidHeader);
        }

        let version = file.read_u32::<LittleEndian>()?;
        if version > VERSION {
            return Err(SceneLoadError::TooNew(version));
        }

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(bincode::deserialize(&buf)?)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SceneSaveError> {
        let mut file = File::create(path)?;

        file.write_all(SCENE_MAGIC)?;
        file.write_u32::<LittleEndian>(VERSION)?;
        let data = bincode::serialize(self)?;
        file.write_all(&data)?;
        Ok(())
    }
}
