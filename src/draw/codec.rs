//! Line-based text encoding for scene objects.
//!
//! One object per line, whitespace-separated integer fields: a type tag
//! (`RECT`/`SEG`/`CIRC`/`POLY`), the attribute fields (border RGBA, fill
//! flag, fill RGBA, thickness), then the geometry. The encoding round-trips:
//! decoding a serialized object reproduces identical attributes and geometry.

use super::attributes::DrawAttributes;
use super::color::Color;
use super::object::GeometricObject;
use crate::util::Point;
use std::fmt::Write as _;
use std::str::SplitWhitespace;
use thiserror::Error;

/// Errors produced while decoding a single scene line.
///
/// Unknown tags and blank lines are not errors; they decode to no object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectParseError {
    #[error("line ended before field '{0}'")]
    MissingField(&'static str),
    #[error("invalid integer '{token}' in field '{field}'")]
    InvalidNumber { field: &'static str, token: String },
}

/// Encodes an object as its canonical single-line form.
pub fn serialize(obj: &GeometricObject) -> String {
    let mut line = String::new();
    match obj {
        GeometricObject::Rect { attrs, p1, p2 } => {
            write_header(&mut line, "RECT", attrs);
            write_points(&mut line, &[*p1, *p2]);
        }
        GeometricObject::Segment { attrs, p1, p2 } => {
            write_header(&mut line, "SEG", attrs);
            write_points(&mut line, &[*p1, *p2]);
        }
        GeometricObject::Circle { attrs, p1, p2 } => {
            write_header(&mut line, "CIRC", attrs);
            write_points(&mut line, &[*p1, *p2]);
        }
        GeometricObject::Polyline { attrs, points } => {
            write_header(&mut line, "POLY", attrs);
            let _ = write!(line, " {}", points.len());
            write_points(&mut line, points);
        }
    }
    line
}

/// Decodes one line into an object.
///
/// Returns `Ok(None)` for an empty line or an unrecognized leading tag, and
/// an [`ObjectParseError`] when a recognized tag is followed by missing or
/// non-integer fields.
pub fn deserialize(line: &str) -> Result<Option<GeometricObject>, ObjectParseError> {
    let mut fields = Fields(line.split_whitespace());
    let Some(tag) = fields.0.next() else {
        return Ok(None);
    };

    match tag {
        "RECT" => {
            let attrs = read_attributes(&mut fields)?;
            let (p1, p2) = read_point_pair(&mut fields)?;
            Ok(Some(GeometricObject::Rect { attrs, p1, p2 }))
        }
        "SEG" => {
            let attrs = read_attributes(&mut fields)?;
            let (p1, p2) = read_point_pair(&mut fields)?;
            Ok(Some(GeometricObject::Segment { attrs, p1, p2 }))
        }
        "CIRC" => {
            let attrs = read_attributes(&mut fields)?;
            let (p1, p2) = read_point_pair(&mut fields)?;
            Ok(Some(GeometricObject::Circle { attrs, p1, p2 }))
        }
        "POLY" => {
            let attrs = read_attributes(&mut fields)?;
            let count = fields.int("point count")?;
            let count = usize::try_from(count).unwrap_or(0);
            let mut points = Vec::with_capacity(count);
            for _ in 0..count {
                points.push(Point::new(fields.int("x")?, fields.int("y")?));
            }
            Ok(Some(GeometricObject::Polyline { attrs, points }))
        }
        _ => Ok(None),
    }
}

struct Fields<'a>(SplitWhitespace<'a>);

impl Fields<'_> {
    fn int(&mut self, field: &'static str) -> Result<i32, ObjectParseError> {
        let token = self.0.next().ok_or(ObjectParseError::MissingField(field))?;
        token
            .parse()
            .map_err(|_| ObjectParseError::InvalidNumber {
                field,
                token: token.to_string(),
            })
    }

    fn channel(&mut self, field: &'static str) -> Result<u8, ObjectParseError> {
        let token = self.0.next().ok_or(ObjectParseError::MissingField(field))?;
        token
            .parse()
            .map_err(|_| ObjectParseError::InvalidNumber {
                field,
                token: token.to_string(),
            })
    }

    fn color(&mut self, field: &'static str) -> Result<Color, ObjectParseError> {
        Ok(Color::rgba(
            self.channel(field)?,
            self.channel(field)?,
            self.channel(field)?,
            self.channel(field)?,
        ))
    }
}

fn read_attributes(fields: &mut Fields) -> Result<DrawAttributes, ObjectParseError> {
    let border_color = fields.color("border color")?;
    let fill_enabled = fields.int("fill flag")? != 0;
    let fill_color = fields.color("fill color")?;
    let thickness = fields.int("thickness")?;
    Ok(DrawAttributes {
        border_color,
        fill_enabled,
        fill_color,
        thickness,
    })
}

fn read_point_pair(fields: &mut Fields) -> Result<(Point, Point), ObjectParseError> {
    let p1 = Point::new(fields.int("x1")?, fields.int("y1")?);
    let p2 = Point::new(fields.int("x2")?, fields.int("y2")?);
    Ok((p1, p2))
}

fn write_header(line: &mut String, tag: &str, attrs: &DrawAttributes) {
    let b = attrs.border_color;
    let f = attrs.fill_color;
    let _ = write!(
        line,
        "{} {} {} {} {} {} {} {} {} {} {}",
        tag,
        b.r,
        b.g,
        b.b,
        b.a,
        u8::from(attrs.fill_enabled),
        f.r,
        f.g,
        f.b,
        f.a,
        attrs.thickness,
    );
}

fn write_points(line: &mut String, points: &[Point]) {
    for p in points {
        let _ = write!(line, " {} {}", p.x, p.y);
    }
}
