//! Line classifier for the `o`/`v`/`f` subset of Wavefront OBJ.
//!
//! Lines are classified by their leading token only; numeric fields are
//! parsed lazily so callers that skip a record kind never validate it.

use std::str::SplitWhitespace;

use corelib::{Vec3, vec3};

use crate::error::{ObjError, ObjResult};

const AXIS_FIELDS: [&str; 3] = ["x coordinate", "y coordinate", "z coordinate"];
const INDEX_FIELDS: [&str; 4] = ["first index", "second index", "third index", "fourth index"];

/// Record kind, taken from the leading token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// `o`: section boundary.
    Object,
    /// `v`: vertex position.
    Vertex,
    /// `f`: triangle or quad face.
    Face,
}

/// Raw 1-based face indices as written in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceIndices {
    Triangle([i64; 3]),
    Quad([i64; 4]),
}

/// Fully parsed record.
#[derive(Clone, Debug, PartialEq)]
pub enum Record<'a> {
    Object(&'a str),
    /// Position exactly as written (before axis remapping).
    Vertex([f32; 3]),
    Face(FaceIndices),
}

/// A recognised, not yet parsed, line of input.
#[derive(Clone, Debug)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    pub content: &'a str,
    pub kind: Kind,
    rest: &'a str,
}

/// Classify one line. Blank lines and unknown leading tokens yield `None`.
pub fn classify(number: usize, content: &str) -> Option<Line<'_>> {
    let trimmed = content.trim();
    let (tag, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let kind = match tag {
        "o" => Kind::Object,
        "v" => Kind::Vertex,
        "f" => Kind::Face,
        _ => return None,
    };
    Some(Line {
        number,
        content: trimmed,
        kind,
        rest: rest.trim_start(),
    })
}

/// All recognised lines of `text`, in order.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().enumerate().filter_map(|(i, raw)| {
        log::trace!("{:>6}: {}", i + 1, raw);
        classify(i + 1, raw)
    })
}

/// Fixed conversion from the file's Z-up convention to the Y-up target:
/// `(a, b, c) -> (a, c, -b)`.
#[inline]
pub fn remap_axes([a, b, c]: [f32; 3]) -> Vec3 {
    vec3(a, c, -b)
}

impl<'a> Line<'a> {
    /// Parse the line according to its kind.
    pub fn record(&self) -> ObjResult<Record<'a>> {
        Ok(match self.kind {
            Kind::Object => Record::Object(self.rest.trim_end()),
            Kind::Vertex => Record::Vertex(self.vertex()?),
            Kind::Face => Record::Face(self.face()?),
        })
    }

    /// The three coordinates of a `v` record, unmodified.
    ///
    /// Values that parse but are not finite (`nan`, `inf`, or a literal that
    /// overflows `f32` such as `1e39`) are reported as `MalformedNumericField`
    /// too.
    pub fn vertex(&self) -> ObjResult<[f32; 3]> {
        let count = self.fields().count();
        if count != 3 {
            return Err(self.arity("3", count));
        }
        let mut out = [0.0f32; 3];
        for ((slot, token), field) in out.iter_mut().zip(self.fields()).zip(AXIS_FIELDS) {
            *slot = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| self.numeric(field))?;
        }
        Ok(out)
    }

    /// Vertex position after axis remapping.
    pub fn position(&self) -> ObjResult<Vec3> {
        self.vertex().map(remap_axes)
    }

    /// The 1-based indices of an `f` record.
    pub fn face(&self) -> ObjResult<FaceIndices> {
        let count = self.fields().count();
        if !(3..=4).contains(&count) {
            return Err(self.arity("3 or 4", count));
        }
        let mut raw = [0i64; 4];
        for ((slot, token), field) in raw.iter_mut().zip(self.fields()).zip(INDEX_FIELDS) {
            *slot = token.parse::<i64>().map_err(|_| self.numeric(field))?;
        }
        Ok(match count {
            3 => FaceIndices::Triangle([raw[0], raw[1], raw[2]]),
            _ => FaceIndices::Quad(raw),
        })
    }

    fn fields(&self) -> SplitWhitespace<'a> {
        self.rest.split_whitespace()
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            Kind::Object => "o",
            Kind::Vertex => "v",
            Kind::Face => "f",
        }
    }

    fn numeric(&self, field: &'static str) -> ObjError {
        ObjError::MalformedNumericField {
            line: self.number,
            field,
            content: self.content.to_owned(),
        }
    }

    fn arity(&self, expected: &'static str, found: usize) -> ObjError {
        ObjError::MalformedRecordArity {
            line: self.number,
            kind: self.kind_name(),
            expected,
            found,
            content: self.content.to_owned(),
        }
    }
}
