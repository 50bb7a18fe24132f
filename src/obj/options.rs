//! Parser configuration.

/// What to do with an `f` record that appears before any `o` record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanFacePolicy {
    /// Drop the face, count it in [`Model::dropped_faces`](super::Model::dropped_faces)
    /// and keep going
    #[default]
    Drop,
    /// Fail the parse with [`ParseErrorKind::OrphanFace`](super::ParseErrorKind::OrphanFace)
    Reject,
}

/// Options for [`ObjParser`](super::ObjParser).
///
/// # Examples
///
/// ```
/// use objscan::obj::{OrphanFacePolicy, ParseOptions};
///
/// let options = ParseOptions::default()
///     .with_orphan_faces(OrphanFacePolicy::Reject)
///     .with_presize(false);
/// assert_eq!(options.orphan_faces, OrphanFacePolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub orphan_faces: OrphanFacePolicy,
    /// Run a counting pass first and reserve list capacity from it
    pub presize: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            orphan_faces: OrphanFacePolicy::Drop,
            presize: true,
        }
    }
}

impl ParseOptions {
    pub fn with_orphan_faces(mut self, policy: OrphanFacePolicy) -> Self {
        self.orphan_faces = policy;
        self
    }

    pub fn with_presize(mut self, presize: bool) -> Self {
        self.presize = presize;
        self
    }

    /// Default options, but faces outside any group fail the parse
    pub fn strict() -> Self {
        Self::default().with_orphan_faces(OrphanFacePolicy::Reject)
    }
}
