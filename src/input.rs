//! Text input format.
//!
//! ```text
//! 16;8 0 8
//! 0 0 0;16 2 16
//! 4 2 4;8 8 8
//! ```
//!
//! The first non-blank line is the header `resolution;pivot_x pivot_y
//! pivot_z`. Every following non-blank line is one box, `px py pz;sx sy sz`.

use std::str::FromStr;

use crate::{ParseError, ParseErrorKind, VoxelBox};

use ilattice::glam::DVec3;

/// Parsed contents of one input file.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelModel {
    /// Input units per output unit.
    pub resolution: f64,
    /// Point mapped to the mesh origin.
    pub pivot: DVec3,
    pub boxes: Vec<VoxelBox>,
}

impl FromStr for VoxelModel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_model(s)
    }
}

pub fn parse_model(text: &str) -> Result<VoxelModel, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| ParseError::new(1, ParseErrorKind::Empty))?;
    let [resolution, pivot] = split_fields(header).map_err(|k| ParseError::new(header_line, k))?;

    let resolution = parse_number(resolution).map_err(|k| ParseError::new(header_line, k))?;
    if !(resolution.is_finite() && resolution > 0.0) {
        return Err(ParseError::new(header_line, ParseErrorKind::NonPositiveResolution));
    }
    let pivot = parse_vec3(pivot).map_err(|k| ParseError::new(header_line, k))?;

    let boxes = lines
        .map(|(line_number, line)| parse_box(line).map_err(|k| ParseError::new(line_number, k)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VoxelModel {
        resolution,
        pivot,
        boxes,
    })
}

fn parse_box(line: &str) -> Result<VoxelBox, ParseErrorKind> {
    let [position, size] = split_fields(line)?;
    let position = parse_vec3(position)?;
    let size = parse_vec3(size)?;
    if !size.cmpgt(DVec3::ZERO).all() {
        return Err(ParseErrorKind::NonPositiveSize);
    }
    Ok(VoxelBox::new(position, size))
}

/// Splits `a;b` into its two non-empty fields.
fn split_fields(line: &str) -> Result<[&str; 2], ParseErrorKind> {
    let fields: Vec<&str> = line
        .split(';')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();
    match fields[..] {
        [a, b] => Ok([a, b]),
        _ => Err(ParseErrorKind::FieldCount {
            expected: 2,
            found: fields.len(),
        }),
    }
}

fn parse_vec3(field: &str) -> Result<DVec3, ParseErrorKind> {
    let components = field
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    match components[..] {
        [x, y, z] => Ok(DVec3::new(x, y, z)),
        _ => Err(ParseErrorKind::ComponentCount {
            expected: 3,
            found: components.len(),
        }),
    }
}

fn parse_number(s: &str) -> Result<f64, ParseErrorKind> {
    let value = s
        .parse::<f64>()
        .map_err(|_| ParseErrorKind::Number(s.to_string()))?;
    if !value.is_finite() {
        return Err(ParseErrorKind::NonFinite(s.to_string()));
    }
    Ok(value)
}
