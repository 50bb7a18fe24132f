//! # Mesh Geometry
//!
//! This module turns parsed OBJ groups into flat, render-ready buffers.
//!
//! ## Key Components
//!
//! - [`Mesh`] - positions, normals, texture coordinates and triangle indices
//! - [`MeshBuilder`] - fan-triangulates a [`Group`](crate::obj::Group)'s faces into a [`Mesh`]
//!
//! ## Usage
//!
//! ```rust
//! use objscan::gfx::geometry::MeshBuilder;
//! use objscan::obj::{ObjParser, StrSource};
//!
//! let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\no Wall_12\nf 1 2 3 4\n";
//! let model = ObjParser::new(StrSource::new(text)).parse().unwrap();
//!
//! let mesh = MeshBuilder::new(&model).build(&model.groups[0]).unwrap();
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

pub mod builder;

pub use builder::{face_normal, MeshBuilder, MeshError};

use crate::gfx::scene::vertex::Vertex3D;

/// Geometry for one group, ready for GPU upload.
///
/// `positions`, `normals` and `tex_coords` always have the same length;
/// every index in `indices` points into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z), one per position
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), one per position
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append one vertex to all three attribute buffers, returning its index
    pub fn push_vertex(
        &mut self,
        position: [f32; 3],
        normal: [f32; 3],
        tex_coord: [f32; 2],
    ) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Interleave the attribute buffers into the renderer's vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((&position, &normal), &tex_coords)| Vertex3D {
                position,
                normal,
                tex_coords,
            })
            .collect()
    }

    /// Interleaved [`Vertex3D`] buffer contents as raw bytes
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }

    /// Index buffer contents as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
