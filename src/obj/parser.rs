//! # OBJ Parser
//!
//! [`ObjParser`] drives a [`LineSource`] through two kinds of pass:
//!
//! - [`count`](ObjParser::count) tallies lines per record tag without
//!   building anything
//! - [`parse`](ObjParser::parse) folds every line into a [`ParseState`] and
//!   returns the finished [`Model`]
//!
//! Both passes rewind the source first, so they can run in any order and as
//! often as needed.

use log::{debug, info, trace, warn};

use super::error::{Channel, ObjError, ParseErrorKind};
use super::model::{Face, FaceVertexRef, Group, Model, Stats};
use super::options::{OrphanFacePolicy, ParseOptions};
use super::record::{RawRef, Record, RecordTag};
use super::source::LineSource;

/// Parser over a [`LineSource`].
///
/// # Examples
///
/// ```
/// use objscan::obj::{ObjParser, StrSource};
///
/// let text = "o Roof\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let mut parser = ObjParser::new(StrSource::new(text));
///
/// let stats = parser.count().unwrap();
/// let model = parser.parse().unwrap();
/// assert_eq!(stats, model.stats());
/// assert_eq!(model.groups[0].name, "Roof");
/// ```
#[derive(Debug)]
pub struct ObjParser<S> {
    source: S,
    options: ParseOptions,
}

impl<S: LineSource> ObjParser<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: S, options: ParseOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Tally lines by record tag. Faces are not resolved, so malformed
    /// references never fail this pass; only read errors do.
    pub fn count(&mut self) -> Result<Stats, ObjError> {
        let mut stats = Stats::default();
        self.for_each_line(|_, line| {
            match RecordTag::of_line(line) {
                Some(RecordTag::Vertex) => stats.vertices += 1,
                Some(RecordTag::TexCoord) => stats.tex_coords += 1,
                Some(RecordTag::Normal) => stats.normals += 1,
                Some(RecordTag::ParamVertex) => stats.param_vertices += 1,
                Some(RecordTag::Face) => stats.faces += 1,
                Some(RecordTag::Object) => stats.groups += 1,
                Some(RecordTag::Comment) | None => {}
            }
            Ok(())
        })?;
        Ok(stats)
    }

    /// Parse the whole source into a [`Model`].
    pub fn parse(&mut self) -> Result<Model, ObjError> {
        let mut state = if self.options.presize {
            let stats = self.count()?;
            ParseState::with_capacity(&self.options, &stats)
        } else {
            ParseState::new(&self.options)
        };

        self.for_each_line(|number, line| {
            let record = Record::parse(line).map_err(|kind| ObjError::parse(number, line, kind))?;
            trace!("line {}: {:?}", number, record);
            state
                .apply(record)
                .map_err(|kind| ObjError::parse(number, line, kind))
        })?;

        let model = state.finish();
        info!(
            "parsed {} vertices, {} texture coordinates, {} normals, {} faces in {} groups",
            model.vertices.len(),
            model.tex_coords.len(),
            model.normals.len(),
            model.face_count(),
            model.groups.len()
        );
        Ok(model)
    }

    fn for_each_line<F>(&mut self, mut visit: F) -> Result<(), ObjError>
    where
        F: FnMut(usize, &str) -> Result<(), ObjError>,
    {
        self.source
            .rewind()
            .map_err(|source| ObjError::Io { line: 0, source })?;

        let mut number = 0;
        while let Some(line) = self.source.next_line() {
            number += 1;
            let line = line.map_err(|source| ObjError::Io {
                line: number,
                source,
            })?;
            visit(number, line)?;
        }
        Ok(())
    }
}

/// The parse fold: the growing [`Model`] plus the currently open group.
///
/// Each [`Record`] moves the state forward through [`apply`](Self::apply);
/// [`finish`](Self::finish) closes the last group.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    model: Model,
    current: Option<Group>,
    orphan_faces: OrphanFacePolicy,
}

impl ParseState {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            model: Model::new(),
            current: None,
            orphan_faces: options.orphan_faces,
        }
    }

    pub fn with_capacity(options: &ParseOptions, stats: &Stats) -> Self {
        Self {
            model: Model::with_capacity(stats),
            current: None,
            orphan_faces: options.orphan_faces,
        }
    }

    /// Everything accumulated so far, excluding the open group
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn current_group(&self) -> Option<&Group> {
        self.current.as_ref()
    }

    pub fn apply(&mut self, record: Record<'_>) -> Result<(), ParseErrorKind> {
        match record {
            Record::Vertex(vertex) => self.model.vertices.push(vertex),
            Record::TexCoord(tex_coord) => self.model.tex_coords.push(tex_coord),
            Record::Normal(normal) => self.model.normals.push(normal),
            Record::ParamVertex(param) => self.model.param_vertices.push(param),
            Record::Face(refs) => self.push_face(&refs)?,
            Record::Object(name) => self.open_group(name),
            Record::Comment | Record::Unknown => {}
        }
        Ok(())
    }

    pub fn finish(mut self) -> Model {
        self.close_group();
        self.model
    }

    fn open_group(&mut self, name: &str) {
        self.close_group();
        debug!("opening group '{}'", name);
        self.current = Some(Group::new(name));
    }

    fn close_group(&mut self) {
        if let Some(group) = self.current.take() {
            debug!("closing group '{}' with {} faces", group.name, group.faces.len());
            self.model.groups.push(group);
        }
    }

    fn push_face(&mut self, refs: &[RawRef]) -> Result<(), ParseErrorKind> {
        if refs.len() < 3 {
            return Err(ParseErrorKind::TooFewVertices { count: refs.len() });
        }

        let face = Face::new(
            refs.iter()
                .map(|raw| self.resolve(raw))
                .collect::<Result<Vec<_>, _>>()?,
        );

        match (&mut self.current, self.orphan_faces) {
            (Some(group), _) => group.faces.push(face),
            (None, OrphanFacePolicy::Drop) => {
                warn!("dropping face with {} vertices outside any group", face.len());
                self.model.dropped_faces += 1;
            }
            (None, OrphanFacePolicy::Reject) => return Err(ParseErrorKind::OrphanFace),
        }
        Ok(())
    }

    fn resolve(&self, raw: &RawRef) -> Result<FaceVertexRef, ParseErrorKind> {
        Ok(FaceVertexRef {
            vertex: resolve(Channel::Vertex, raw.vertex, self.model.vertices.len())?,
            tex_coord: raw
                .tex_coord
                .map(|i| resolve(Channel::TexCoord, i, self.model.tex_coords.len()))
                .transpose()?,
            normal: raw
                .normal
                .map(|i| resolve(Channel::Normal, i, self.model.normals.len()))
                .transpose()?,
        })
    }
}

/// Map a 1-based back-reference onto a 0-based index into a list of `available` items.
fn resolve(channel: Channel, index: i64, available: usize) -> Result<usize, ParseErrorKind> {
    match usize::try_from(index) {
        Ok(i) if i >= 1 && i <= available => Ok(i - 1),
        _ => Err(ParseErrorKind::UnresolvedReference {
            channel,
            index,
            available,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::model::Vertex;
    use crate::obj::source::StrSource;

    fn parse(text: &str) -> Result<Model, ObjError> {
        ObjParser::new(StrSource::new(text)).parse()
    }

    const HOUSE: &str = "\
# two groups
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vn 0 0 1
o RoofNorth
f 1/1/1 2/2/1 3/3/1
o Wall_1
f 1 2 3 4
f 1//1 3//1 4//1
vp 0.5
";

    #[test]
    fn test_vertex_w() {
        let model = parse("v 1.0 2.0 3.0 0.5\nv 1.0 2.0 3.0\n").unwrap();
        assert_eq!(model.vertices[0], Vertex::with_w(1.0, 2.0, 3.0, 0.5));
        assert_eq!(model.vertices[1], Vertex::with_w(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_groups_in_order() {
        let model = parse(HOUSE).unwrap();
        assert_eq!(model.groups.len(), 2);
        assert_eq!(model.groups[0].name, "RoofNorth");
        assert_eq!(model.groups[0].faces.len(), 1);
        assert_eq!(model.groups[1].name, "Wall_1");
        assert_eq!(model.groups[1].faces.len(), 2);
        assert_eq!(model.param_vertices.len(), 1);
    }

    #[test]
    fn test_references_are_zero_based() {
        let model = parse(HOUSE).unwrap();
        let face = &model.groups[0].faces[0];
        assert_eq!(
            face.refs[1],
            FaceVertexRef {
                vertex: 1,
                tex_coord: Some(1),
                normal: Some(0),
            }
        );

        let quad = &model.groups[1].faces[0];
        assert_eq!(quad.len(), 4);
        assert!(quad.refs.iter().all(|r| r.tex_coord.is_none() && r.normal.is_none()));
    }

    #[test]
    fn test_count_matches_parse() {
        let mut parser = ObjParser::new(StrSource::new(HOUSE));
        let stats = parser.count().unwrap();
        let model = parser.parse().unwrap();

        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.tex_coords, 3);
        assert_eq!(stats.normals, 1);
        assert_eq!(stats.param_vertices, 1);
        assert_eq!(stats.faces, 3);
        assert_eq!(stats.groups, 2);
        assert_eq!(stats, model.stats());
    }

    #[test]
    fn test_count_ignores_bad_references() {
        let text = "o A\nf 9 9 9\nf -1 0 x\n";
        let stats = ObjParser::new(StrSource::new(text)).count().unwrap();
        assert_eq!(stats.faces, 2);
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_zero_index_is_unresolved() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\no A\nf 0 1 2\n").unwrap_err();
        assert_eq!(err.line(), 5);
        assert_eq!(
            err.kind(),
            Some(&ParseErrorKind::UnresolvedReference {
                channel: Channel::Vertex,
                index: 0,
                available: 3,
            })
        );
    }

    #[test]
    fn test_forward_reference_is_unresolved() {
        let err = parse("o A\nv 0 0 0\nv 1 0 0\nf 1 2 3\nv 0 1 0\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            Some(ParseErrorKind::UnresolvedReference { index: 3, available: 2, .. })
        ));
        match err {
            ObjError::Parse { line, text, .. } => {
                assert_eq!(line, 4);
                assert_eq!(text, "f 1 2 3");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_normal_is_unresolved() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\no A\nf 1//1 2//1 3//1\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            Some(ParseErrorKind::UnresolvedReference {
                channel: Channel::Normal,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_tex_coord_is_unresolved() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\no A\nf 1/1 2/2 3/1\n").unwrap_err();
        assert_eq!(err.line(), 6);
        assert_eq!(
            err.kind(),
            Some(&ParseErrorKind::UnresolvedReference {
                channel: Channel::TexCoord,
                index: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn test_negative_index_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\no A\nf -3 -2 -1\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            Some(ParseErrorKind::UnsupportedReferenceForm { .. })
        ));
    }

    #[test]
    fn test_malformed_number_reports_tag() {
        let err = parse("v 1.0 two 3.0\n").unwrap_err();
        assert_eq!(err.line(), 1);
        assert_eq!(
            err.kind(),
            Some(&ParseErrorKind::MalformedNumber {
                tag: RecordTag::Vertex,
                token: "two".to_string(),
            })
        );
    }

    #[test]
    fn test_orphan_face_dropped_by_default() {
        let model = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no A\nf 3 2 1\n").unwrap();
        assert_eq!(model.dropped_faces, 1);
        assert_eq!(model.groups.len(), 1);
        assert_eq!(model.groups[0].faces.len(), 1);
    }

    #[test]
    fn test_orphan_face_rejected_when_strict() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let err = ObjParser::with_options(StrSource::new(text), ParseOptions::strict())
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), Some(&ParseErrorKind::OrphanFace));
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn test_unknown_records_skipped() {
        let model = parse("mtllib house.mtl\ng default\ns 1\nusemtl brick\n\n# done\n").unwrap();
        assert_eq!(model, Model::new());
    }

    #[test]
    fn test_empty_group_kept() {
        let model = parse("o Empty\no Wall\n").unwrap();
        assert_eq!(model.groups.len(), 2);
        assert!(model.groups[0].is_empty());
    }

    #[test]
    fn test_parse_twice_is_idempotent() {
        let mut parser = ObjParser::new(StrSource::new(HOUSE));
        let first = parser.parse().unwrap();
        let second = parser.parse().unwrap();
        assert_eq!(first, second);

        let unsized_parse = ObjParser::with_options(
            StrSource::new(HOUSE),
            ParseOptions::default().with_presize(false),
        )
        .parse()
        .unwrap();
        assert_eq!(first, unsized_parse);
    }

    #[test]
    fn test_state_fold_in_isolation() {
        let mut state = ParseState::new(&ParseOptions::default());
        for line in ["v 0 0 0", "v 1 0 0", "v 0 1 0", "o A", "f 1 2 3"] {
            state.apply(Record::parse(line).unwrap()).unwrap();
        }

        assert_eq!(state.current_group().map(|g| g.faces.len()), Some(1));
        assert!(state.model().groups.is_empty());

        state.apply(Record::Object("B")).unwrap();
        assert_eq!(state.model().groups.len(), 1);
        assert_eq!(state.current_group().map(|g| g.name.as_str()), Some("B"));

        let model = state.finish();
        assert_eq!(model.groups.len(), 2);
    }
}
