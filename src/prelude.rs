//! # objscan Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use objscan::prelude::*;
//!
//! let model = ObjParser::new(StrSource::new("o Wall_3\n")).parse().unwrap();
//! let scene = Scene::from_model(&model).unwrap();
//! assert_eq!(scene.objects()[0].category, Category::Wall);
//! ```

// Re-export parsing types
pub use crate::obj::{
    FileSource, LineSource, Model, ObjError, ObjParser, OrphanFacePolicy, ParseOptions, Stats,
    StrSource,
};

// Re-export geometry and scene types
pub use crate::gfx::geometry::{Mesh, MeshBuilder, MeshError};
pub use crate::gfx::scene::{classify, Category, Scene, SceneObject, Vertex3D};
pub use crate::load_scene;
