// src/lib.rs
//! objscan
//!
//! A Wavefront OBJ parser that assembles each named group into a render-ready,
//! category-tagged mesh.
//!
//! ```no_run
//! let scene = objscan::load_scene("building.obj")?;
//! for object in scene.objects() {
//!     let triangles = object.mesh.triangle_count();
//!     println!("{} ({}): {} triangles", object.name, object.category, triangles);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod gfx;
pub mod obj;
pub mod prelude;

// Re-export main types for convenience
pub use gfx::scene::Scene;

/// Loads an OBJ file into a [`Scene`] with default parse options
pub fn load_scene(path: impl AsRef<std::path::Path>) -> anyhow::Result<Scene> {
    Scene::load(path)
}
