//! # OBJ Data Model
//!
//! Plain data produced by [`ObjParser`](super::ObjParser). Nothing in here
//! owns rendering resources; meshes are derived separately by
//! [`MeshBuilder`](crate::gfx::geometry::MeshBuilder).

/// A geometric vertex `(x, y, z, w)`. `w` defaults to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vertex {
    /// Vertex with the default weight of `1.0`
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::with_w(x, y, z, 1.0)
    }

    pub fn with_w(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Position without the weight component
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// A vertex normal. Not necessarily unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Normal {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// A texture coordinate `(u, v)`; any `w` in the source is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexCoord {
    pub u: f32,
    pub v: f32,
}

impl TexCoord {
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    pub fn to_array(&self) -> [f32; 2] {
        [self.u, self.v]
    }
}

/// A parameter space vertex from a `vp` record, kept for bookkeeping only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamVertex {
    pub u: f64,
    pub v: Option<f64>,
    pub w: Option<f64>,
}

/// One corner of a face, with 0-based indices into the [`Model`] lists.
///
/// Indices are resolved while parsing, so they always name an element that
/// existed when the `f` record was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertexRef {
    pub vertex: usize,
    pub tex_coord: Option<usize>,
    pub normal: Option<usize>,
}

/// How many of a face's corners carry an optional channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPresence {
    All,
    Mixed,
    Absent,
}

impl ChannelPresence {
    fn of(present: usize, total: usize) -> Self {
        match present {
            0 => ChannelPresence::Absent,
            n if n == total => ChannelPresence::All,
            _ => ChannelPresence::Mixed,
        }
    }
}

/// A polygon, corners in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    pub refs: Vec<FaceVertexRef>,
}

impl Face {
    pub fn new(refs: Vec<FaceVertexRef>) -> Self {
        Self { refs }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Number of triangles a fan over this face produces
    pub fn triangle_count(&self) -> usize {
        self.refs.len().saturating_sub(2)
    }

    pub fn normal_presence(&self) -> ChannelPresence {
        let present = self.refs.iter().filter(|r| r.normal.is_some()).count();
        ChannelPresence::of(present, self.refs.len())
    }

    pub fn tex_coord_presence(&self) -> ChannelPresence {
        let present = self.refs.iter().filter(|r| r.tex_coord.is_some()).count();
        ChannelPresence::of(present, self.refs.len())
    }
}

/// A named run of faces, opened by an `o` record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub name: String,
    pub faces: Vec<Face>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(Face::triangle_count).sum()
    }
}

/// Per-record totals from a counting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub vertices: usize,
    pub tex_coords: usize,
    pub normals: usize,
    pub param_vertices: usize,
    pub faces: usize,
    pub groups: usize,
}

/// Everything a parse pass accumulated.
///
/// Attribute lists only ever grow while parsing. `groups` are in the order
/// their `o` records appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub vertices: Vec<Vertex>,
    pub normals: Vec<Normal>,
    pub tex_coords: Vec<TexCoord>,
    pub param_vertices: Vec<ParamVertex>,
    pub groups: Vec<Group>,
    /// Faces read while no group was open and dropped
    pub dropped_faces: usize,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty model with list capacity reserved from a counting pass
    pub fn with_capacity(stats: &Stats) -> Self {
        Self {
            vertices: Vec::with_capacity(stats.vertices),
            normals: Vec::with_capacity(stats.normals),
            tex_coords: Vec::with_capacity(stats.tex_coords),
            param_vertices: Vec::with_capacity(stats.param_vertices),
            groups: Vec::with_capacity(stats.groups),
            dropped_faces: 0,
        }
    }

    /// Faces kept in groups
    pub fn face_count(&self) -> usize {
        self.groups.iter().map(|g| g.faces.len()).sum()
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Totals as a counting pass over the same input would report them
    pub fn stats(&self) -> Stats {
        Stats {
            vertices: self.vertices.len(),
            tex_coords: self.tex_coords.len(),
            normals: self.normals.len(),
            param_vertices: self.param_vertices.len(),
            faces: self.face_count() + self.dropped_faces,
            groups: self.groups.len(),
        }
    }
}
