//! # Wavefront OBJ Parsing
//!
//! Streaming, line-oriented parsing of OBJ text into a [`Model`].
//!
//! ## Supported Records
//!
//! - `v x y z [w]` - geometric vertex, `w` defaults to `1.0`
//! - `vt u v [w]` - texture coordinate, `w` ignored
//! - `vn x y z` - vertex normal
//! - `vp u [v] [w]` - parameter space vertex (kept, otherwise unused)
//! - `f ref ref ref ...` - polygon, each `ref` one of `v`, `v/vt`, `v//vn`, `v/vt/vn`
//! - `o name` - starts a new named group
//! - `# ...` - comment
//!
//! Everything else is skipped. Face indices are positive, 1-based
//! back-references; relative (negative) and forward references are errors.
//!
//! ## Usage
//!
//! ```
//! use objscan::obj::{ObjParser, StrSource};
//!
//! let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\no WallPen_1\nf 1 2 3 4\n";
//! let model = ObjParser::new(StrSource::new(text)).parse()?;
//!
//! assert_eq!(model.groups[0].faces[0].len(), 4);
//! # Ok::<(), objscan::obj::ObjError>(())
//! ```

pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod record;
pub mod source;

pub use error::{Channel, ObjError, ParseErrorKind};
pub use model::{
    ChannelPresence, Face, FaceVertexRef, Group, Model, Normal, ParamVertex, Stats, TexCoord,
    Vertex,
};
pub use options::{OrphanFacePolicy, ParseOptions};
pub use parser::{ObjParser, ParseState};
pub use record::{RawRef, Record, RecordTag};
pub use source::{FileSource, LineSource, ReaderSource, StrSource};
