//! # Vertex Data Structures
//!
//! This module defines the interleaved vertex format handed to the renderer.

use std::mem;

/// A 3D vertex with position, normal and texture coordinate data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations.
///
/// # Examples
///
/// ```
/// use objscan::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coords: [0.0, 0.0],
/// };
/// assert_eq!(Vertex3D::as_bytes(&[vertex]).len(), Vertex3D::stride());
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
}

/// One attribute of [`Vertex3D`] as a shader sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub shader_location: u32,
    /// Byte offset from the start of the vertex
    pub offset: usize,
    /// Number of `f32` components
    pub components: usize,
}

impl Vertex3D {
    /// Size of one vertex in bytes
    pub fn stride() -> usize {
        mem::size_of::<Vertex3D>()
    }

    /// Describes the vertex layout:
    /// - Attribute 0: Position (3 x f32)
    /// - Attribute 1: Normal (3 x f32)
    /// - Attribute 2: Texture coordinates (2 x f32)
    pub fn attributes() -> [VertexAttribute; 3] {
        [
            VertexAttribute {
                shader_location: 0,
                offset: 0,
                components: 3,
            },
            VertexAttribute {
                shader_location: 1,
                offset: mem::size_of::<[f32; 3]>(),
                components: 3,
            },
            VertexAttribute {
                shader_location: 2,
                offset: mem::size_of::<[f32; 6]>(),
                components: 2,
            },
        ]
    }

    /// View a vertex slice as raw bytes for upload
    pub fn as_bytes(vertices: &[Vertex3D]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
