//! # Scene Assembly Module
//!
//! This module turns a parsed [`Model`](crate::obj::Model) into the objects the
//! renderer draws: one mesh per group, tagged with a [`Category`] derived from
//! the group name.
//!
//! ## Key Components
//!
//! - [`Scene`] - every group of a model as a [`SceneObject`]
//! - [`Category`] - roof / wall penetration / wall classification
//! - [`Vertex3D`] - interleaved vertex format for GPU upload
//!
//! ## Usage
//!
//! ```
//! use objscan::gfx::scene::{Category, Scene};
//! use objscan::obj::{ObjParser, StrSource};
//!
//! let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\no RoofSouth\nf 1 2 3\n";
//! let model = ObjParser::new(StrSource::new(text)).parse().unwrap();
//! let scene = Scene::from_model(&model).unwrap();
//!
//! assert_eq!(scene.objects_in(Category::Roof).count(), 1);
//! ```
//!
//! Materials, textures, lighting and cameras are left to the renderer.

pub mod category;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use category::{classify, Category};
pub use scene::{CategoryCounts, Scene, SceneObject};
pub use vertex::{Vertex3D, VertexAttribute};
