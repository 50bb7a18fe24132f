//! # Graphics Module
//!
//! Everything downstream of parsing: mesh building and scene assembly.
//!
//! - **Geometry** ([`geometry`]) - fan triangulation into aligned vertex buffers
//! - **Scene** ([`scene`]) - per-group meshes tagged with a [`Category`](scene::Category)
//!
//! Rendering itself (materials, textures, lighting, camera, input) is the job
//! of whatever consumes the [`Scene`](scene::Scene).

pub mod geometry;
pub mod scene;

// Re-export commonly used types
pub use geometry::{Mesh, MeshBuilder, MeshError};
pub use scene::{Category, Scene, SceneObject};
