//! # Mesh Building
//!
//! Fan triangulation of parsed faces into a [`Mesh`].
//!
//! Every face corner becomes its own vertex; nothing is shared between faces.
//! A face of `N` corners adds `N` vertices and `N - 2` triangles
//! `(0, i, i + 1)`. Polygons are assumed convex and planar.
//!
//! Normals and texture coordinates are always filled in for every vertex so
//! the three attribute buffers stay the same length:
//!
//! - corners without a normal get the face normal, computed from the corner positions
//! - corners without a texture coordinate get `(0, 0)`
//!
//! Indices that do not name an element of the model are an error, never defaulted.

use cgmath::{InnerSpace, Vector3, Zero};
use log::{debug, warn};

use super::Mesh;
use crate::obj::{Channel, ChannelPresence, Face, FaceVertexRef, Group, Model};

/// Used when a face is too degenerate to have a normal
const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Why a group could not be turned into a mesh.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("group '{group}': {channel} index {index} is out of range, {available} available")]
    UnresolvedReference {
        group: String,
        channel: Channel,
        index: usize,
        available: usize,
    },

    #[error("group '{group}' needs more than u32::MAX vertices")]
    TooManyVertices { group: String },
}

/// Builds meshes from the groups of one [`Model`].
#[derive(Debug, Clone, Copy)]
pub struct MeshBuilder<'m> {
    model: &'m Model,
}

impl<'m> MeshBuilder<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Triangulate every face of `group`
    pub fn build(&self, group: &Group) -> Result<Mesh, MeshError> {
        let vertices = group.faces.iter().map(Face::len).sum();
        let mut mesh = Mesh::with_capacity(vertices, group.triangle_count() * 3);

        for face in &group.faces {
            self.append_face(face, &mut mesh).map_err(|kind| kind.in_group(&group.name))?;
        }

        debug!(
            "built mesh for '{}': {} vertices, {} triangles",
            group.name,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Build a mesh for each group of the model, in model order
    pub fn build_all(&self) -> impl Iterator<Item = (&'m Group, Result<Mesh, MeshError>)> + '_ {
        self.model
            .groups
            .iter()
            .map(move |group| (group, self.build(group)))
    }

    /// Append one face's vertices and fan triangles to `mesh`.
    ///
    /// Faces with fewer than 3 corners are skipped. On error `mesh` is left untouched.
    pub fn append_face(&self, face: &Face, mesh: &mut Mesh) -> Result<(), MeshError> {
        if face.len() < 3 {
            warn!("skipping face with {} vertices", face.len());
            return Ok(());
        }

        let base = index_base(mesh.vertex_count(), face.len())?;

        let positions = face
            .refs
            .iter()
            .map(|r| self.position(r))
            .collect::<Result<Vec<_>, _>>()?;

        let normals = face.normal_presence();
        if normals == ChannelPresence::Mixed
            || face.tex_coord_presence() == ChannelPresence::Mixed
        {
            warn!("face mixes corners with and without optional attributes, filling defaults");
        }
        let fallback = match normals {
            ChannelPresence::All => UP,
            ChannelPresence::Mixed | ChannelPresence::Absent => face_normal(&positions),
        };

        let mut attributes = Vec::with_capacity(face.len());
        for corner in &face.refs {
            let normal = match corner.normal {
                Some(i) => self.lookup(Channel::Normal, i, &self.model.normals)?.to_array(),
                None => fallback,
            };
            let tex_coord = match corner.tex_coord {
                Some(i) => self
                    .lookup(Channel::TexCoord, i, &self.model.tex_coords)?
                    .to_array(),
                None => [0.0, 0.0],
            };
            attributes.push((normal, tex_coord));
        }

        for (&position, (normal, tex_coord)) in positions.iter().zip(attributes) {
            mesh.push_vertex(position, normal, tex_coord);
        }
        for i in 1..face.len() as u32 - 1 {
            mesh.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
        Ok(())
    }

    fn position(&self, corner: &FaceVertexRef) -> Result<[f32; 3], MeshError> {
        self.lookup(Channel::Vertex, corner.vertex, &self.model.vertices)
            .map(|v| v.position())
    }

    fn lookup<'a, T>(
        &self,
        channel: Channel,
        index: usize,
        list: &'a [T],
    ) -> Result<&'a T, MeshError> {
        list.get(index).ok_or(MeshError::UnresolvedReference {
            group: String::new(),
            channel,
            index,
            available: list.len(),
        })
    }
}

impl MeshError {
    fn in_group(self, name: &str) -> Self {
        match self {
            MeshError::UnresolvedReference {
                channel,
                index,
                available,
                ..
            } => MeshError::UnresolvedReference {
                group: name.to_string(),
                channel,
                index,
                available,
            },
            MeshError::TooManyVertices { .. } => MeshError::TooManyVertices {
                group: name.to_string(),
            },
        }
    }
}

/// Unit normal of a polygon, counter-clockwise winding facing the viewer.
///
/// Uses the first two edges; if they are collinear, falls back to Newell's
/// method over all corners, and to `+Y` when the polygon has no area.
/// Index of the first corner of a face appended after `existing` vertices.
/// Every corner index has to fit in a `u32`.
fn index_base(existing: usize, corners: usize) -> Result<u32, MeshError> {
    let too_many = || MeshError::TooManyVertices {
        group: String::new(),
    };
    let end = existing.checked_add(corners).ok_or_else(too_many)?;
    u32::try_from(end).map_err(|_| too_many())?;
    u32::try_from(existing).map_err(|_| too_many())
}

pub fn face_normal(corners: &[[f32; 3]]) -> [f32; 3] {
    if corners.len() < 3 {
        return UP;
    }

    let p0 = Vector3::from(corners[0]);
    let p1 = Vector3::from(corners[1]);
    let p2 = Vector3::from(corners[2]);
    let normal = (p1 - p0).cross(p2 - p0);
    if normal.magnitude2() > f32::MIN_POSITIVE {
        return normal.normalize().into();
    }

    let mut newell: Vector3<f32> = Vector3::zero();
    for (i, a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        newell.x += (a[1] - b[1]) * (a[2] + b[2]);
        newell.y += (a[2] - b[2]) * (a[0] + b[0]);
        newell.z += (a[0] - b[0]) * (a[1] + b[1]);
    }
    if newell.magnitude2() > f32::MIN_POSITIVE {
        return newell.normalize().into();
    }

    UP
}
