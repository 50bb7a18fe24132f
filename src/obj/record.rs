//! # Record Lexing
//!
//! Turns one line of OBJ text into a [`Record`]. Face references are lexed
//! here but resolved later by the parser, since resolution depends on how
//! many attributes have been accumulated so far.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use super::error::ParseErrorKind;
use super::model::{Normal, ParamVertex, TexCoord, Vertex};

/// The leading keyword of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordTag {
    Vertex,
    TexCoord,
    Normal,
    ParamVertex,
    Face,
    Object,
    Comment,
}

impl RecordTag {
    pub fn keyword(self) -> &'static str {
        match self {
            RecordTag::Vertex => "v",
            RecordTag::TexCoord => "vt",
            RecordTag::Normal => "vn",
            RecordTag::ParamVertex => "vp",
            RecordTag::Face => "f",
            RecordTag::Object => "o",
            RecordTag::Comment => "#",
        }
    }

    /// Classify a line by its first token. Leading whitespace is ignored.
    ///
    /// Returns `None` for blank lines and keywords this parser skips.
    pub fn of_line(line: &str) -> Option<RecordTag> {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') {
            return Some(RecordTag::Comment);
        }

        match trimmed.split_whitespace().next()? {
            "v" => Some(RecordTag::Vertex),
            "vt" => Some(RecordTag::TexCoord),
            "vn" => Some(RecordTag::Normal),
            "vp" => Some(RecordTag::ParamVertex),
            "f" => Some(RecordTag::Face),
            "o" => Some(RecordTag::Object),
            _ => None,
        }
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An unresolved face corner, 1-based as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRef {
    pub vertex: i64,
    pub tex_coord: Option<i64>,
    pub normal: Option<i64>,
}

impl RawRef {
    /// Lex one of `v`, `v/vt`, `v//vn` or `v/vt/vn`.
    pub fn parse(token: &str) -> Result<Self, ParseErrorKind> {
        let malformed = || ParseErrorKind::MalformedReference {
            token: token.to_string(),
        };

        let mut parts = token.split('/');
        let vertex = parts.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;
        let tex_coord = parts.next();
        let normal = parts.next();
        if parts.next().is_some() {
            return Err(malformed());
        }

        let tex_coord = match (tex_coord, normal) {
            // `v/` has nothing after the slash
            (Some(""), None) => return Err(malformed()),
            (Some(""), Some(_)) | (None, _) => None,
            (Some(t), _) => Some(t),
        };
        if normal == Some("") {
            return Err(malformed());
        }

        Ok(RawRef {
            vertex: index(token, vertex)?,
            tex_coord: tex_coord.map(|t| index(token, t)).transpose()?,
            normal: normal.map(|n| index(token, n)).transpose()?,
        })
    }
}

fn index(token: &str, part: &str) -> Result<i64, ParseErrorKind> {
    let value: i64 = part.parse().map_err(|_| ParseErrorKind::MalformedNumber {
        tag: RecordTag::Face,
        token: part.to_string(),
    })?;
    if value < 0 {
        return Err(ParseErrorKind::UnsupportedReferenceForm {
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// One lexed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    Vertex(Vertex),
    TexCoord(TexCoord),
    Normal(Normal),
    ParamVertex(ParamVertex),
    Face(Vec<RawRef>),
    Object(&'a str),
    Comment,
    /// Blank line or a keyword this parser skips
    Unknown,
}

impl<'a> Record<'a> {
    pub fn parse(line: &'a str) -> Result<Record<'a>, ParseErrorKind> {
        let tag = match RecordTag::of_line(line) {
            Some(tag) => tag,
            None => return Ok(Record::Unknown),
        };

        let trimmed = line.trim_start();
        let rest = trimmed.get(tag.keyword().len()..).unwrap_or("");
        let mut args = rest.split_whitespace();

        let record = match tag {
            RecordTag::Vertex => {
                let ([x, y, z, w], found) = components::<f32, 4>(tag, &mut args, 3, 1.0)?;
                let w = if found == 4 { w } else { 1.0 };
                Record::Vertex(Vertex::with_w(x, y, z, w))
            }
            RecordTag::TexCoord => {
                let ([u, v, _w], _) = components::<f32, 3>(tag, &mut args, 2, 0.0)?;
                Record::TexCoord(TexCoord::new(u, v))
            }
            RecordTag::Normal => {
                let ([x, y, z], _) = components::<f32, 3>(tag, &mut args, 3, 0.0)?;
                Record::Normal(Normal::new(x, y, z))
            }
            RecordTag::ParamVertex => {
                let ([u, v, w], found) = components::<f64, 3>(tag, &mut args, 1, 0.0)?;
                Record::ParamVertex(ParamVertex {
                    u,
                    v: (found > 1).then_some(v),
                    w: (found > 2).then_some(w),
                })
            }
            RecordTag::Face => {
                let refs = args.map(RawRef::parse).collect::<Result<Vec<_>, _>>()?;
                if refs.len() < 3 {
                    return Err(ParseErrorKind::TooFewVertices { count: refs.len() });
                }
                Record::Face(refs)
            }
            RecordTag::Object => Record::Object(
                rest.trim_start_matches([' ', '\t'])
                    .trim_end_matches(['\r', '\n']),
            ),
            RecordTag::Comment => Record::Comment,
        };

        Ok(record)
    }
}

/// Parse up to `N` numeric components, `required` of which must be present.
/// Tokens past `N` (e.g. trailing vertex colours) are ignored.
fn components<T, const N: usize>(
    tag: RecordTag,
    args: &mut SplitWhitespace<'_>,
    required: usize,
    fill: T,
) -> Result<([T; N], usize), ParseErrorKind>
where
    T: FromStr + Copy,
{
    let mut values = [fill; N];
    let mut found = 0;
    for (slot, token) in values.iter_mut().zip(args) {
        *slot = token.parse().map_err(|_| ParseErrorKind::MalformedNumber {
            tag,
            token: token.to_string(),
        })?;
        found += 1;
    }

    if found < required {
        return Err(ParseErrorKind::MissingField {
            tag,
            expected: required,
            found,
        });
    }
    Ok((values, found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_classification() {
        assert_eq!(RecordTag::of_line("v 1 2 3"), Some(RecordTag::Vertex));
        assert_eq!(RecordTag::of_line("  vt 0 1"), Some(RecordTag::TexCoord));
        assert_eq!(RecordTag::of_line("vn\t0 1 0"), Some(RecordTag::Normal));
        assert_eq!(RecordTag::of_line("#comment"), Some(RecordTag::Comment));
        assert_eq!(RecordTag::of_line("o Roof"), Some(RecordTag::Object));
        assert_eq!(RecordTag::of_line("usemtl brick"), None);
        assert_eq!(RecordTag::of_line("vertex 1 2 3"), None);
        assert_eq!(RecordTag::of_line(""), None);
    }

    #[test]
    fn test_vertex_weight() {
        assert_eq!(
            Record::parse("v 1.0 2.0 3.0 0.5"),
            Ok(Record::Vertex(Vertex::with_w(1.0, 2.0, 3.0, 0.5)))
        );
        assert_eq!(
            Record::parse("v 1.0 2.0 3.0"),
            Ok(Record::Vertex(Vertex::with_w(1.0, 2.0, 3.0, 1.0)))
        );
    }

    #[test]
    fn test_tex_coord_ignores_w() {
        assert_eq!(
            Record::parse("vt 0.5 1 0.25"),
            Ok(Record::TexCoord(TexCoord::new(0.5, 1.0)))
        );
    }

    #[test]
    fn test_param_vertex_optional_components() {
        assert_eq!(
            Record::parse("vp 0.31 3.21"),
            Ok(Record::ParamVertex(ParamVertex {
                u: 0.31,
                v: Some(3.21),
                w: None,
            }))
        );
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(
            Record::parse("vn 0.0 abc 1.0"),
            Err(ParseErrorKind::MalformedNumber {
                tag: RecordTag::Normal,
                token: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            Record::parse("v 1.0 2.0"),
            Err(ParseErrorKind::MissingField {
                tag: RecordTag::Vertex,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_face_reference_forms() {
        let refs = match Record::parse("f 1 2/3 4//5 6/7/8") {
            Ok(Record::Face(refs)) => refs,
            other => panic!("unexpected record {:?}", other),
        };

        assert_eq!(
            refs,
            vec![
                RawRef {
                    vertex: 1,
                    tex_coord: None,
                    normal: None,
                },
                RawRef {
                    vertex: 2,
                    tex_coord: Some(3),
                    normal: None,
                },
                RawRef {
                    vertex: 4,
                    tex_coord: None,
                    normal: Some(5),
                },
                RawRef {
                    vertex: 6,
                    tex_coord: Some(7),
                    normal: Some(8),
                },
            ]
        );
    }

    #[test]
    fn test_face_reference_errors() {
        assert!(matches!(
            RawRef::parse("1/"),
            Err(ParseErrorKind::MalformedReference { .. })
        ));
        assert!(matches!(
            RawRef::parse("1/2/3/4"),
            Err(ParseErrorKind::MalformedReference { .. })
        ));
        assert!(matches!(
            RawRef::parse("/2"),
            Err(ParseErrorKind::MalformedReference { .. })
        ));
        assert!(matches!(
            RawRef::parse("1//"),
            Err(ParseErrorKind::MalformedReference { .. })
        ));
        assert_eq!(
            RawRef::parse("-1"),
            Err(ParseErrorKind::UnsupportedReferenceForm {
                token: "-1".to_string()
            })
        );
        assert_eq!(
            RawRef::parse("1/x"),
            Err(ParseErrorKind::MalformedNumber {
                tag: RecordTag::Face,
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_face_needs_three_refs() {
        assert_eq!(
            Record::parse("f 1 2"),
            Err(ParseErrorKind::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn test_object_name() {
        assert_eq!(Record::parse("o RoofNorth\r"), Ok(Record::Object("RoofNorth")));
        assert_eq!(Record::parse("o Wall 12"), Ok(Record::Object("Wall 12")));
        assert_eq!(Record::parse("o"), Ok(Record::Object("")));
    }

    #[test]
    fn test_skipped_lines() {
        assert_eq!(Record::parse("# v 1 2 3"), Ok(Record::Comment));
        assert_eq!(Record::parse("s off"), Ok(Record::Unknown));
        assert_eq!(Record::parse("   "), Ok(Record::Unknown));
    }
}
