//! Numeric vertex extraction from `( x y z )` groups.
use glam::DVec3;
use nom::{
    bytes::complete::{tag, take_till},
    combinator::all_consuming,
    number::complete::double,
    sequence::{delimited, preceded},
    IResult as _IResult,
};

use crate::error::VertexError;

type IResult<'a, T> = _IResult<&'a str, T>;

// Skips to the first `(` and returns everything up to the next `)`.
fn vertex_group(i: &str) -> IResult<&str> {
    preceded(
        take_till(|c| c == '('),
        delimited(tag("("), take_till(|c| c == ')'), tag(")")),
    )(i)
}

fn number(i: &str) -> IResult<f64> {
    all_consuming(double)(i)
}

/// Extracts the first `( x y z )` group of `fragment`.
///
/// Returns the point and the byte offset right after the closing `)`, so the
/// function can be called again on `&fragment[offset..]`.
pub fn extract_vertex(fragment: &str) -> Result<(DVec3, usize), VertexError> {
    let (rest, interior) = vertex_group(fragment).map_err(|_| VertexError::MissingGroup)?;
    let consumed = fragment.len() - rest.len();

    let fields: Vec<&str> = interior.split_whitespace().collect();

    if fields.len() != 3 {
        return Err(VertexError::FieldCount {
            found: fields.len(),
        });
    }

    let mut values = [0f64; 3];

    for (value, field) in values.iter_mut().zip(fields) {
        let bad_number = || VertexError::BadNumber {
            field: field.to_string(),
        };

        let (_, parsed) = number(field).map_err(|_| bad_number())?;

        // overflowing literals and `inf`/`nan` cannot be written back out
        if !parsed.is_finite() {
            return Err(bad_number());
        }

        *value = parsed;
    }

    Ok((DVec3::from_array(values), consumed))
}

/// Extracts the three plane points of a face line.
///
/// The returned offset points at the first byte of the texture fields.
pub fn extract_face_points(line: &str) -> Result<([DVec3; 3], usize), VertexError> {
    let mut points = [DVec3::ZERO; 3];
    let mut offset = 0;

    for point in points.iter_mut() {
        let (vertex, consumed) = extract_vertex(&line[offset..])?;

        *point = vertex;
        offset += consumed;
    }

    Ok((points, offset))
}
