//! Decoding of one coordinate record from a coordinate-bearing node

use geo_types::Coord;
use roxmltree::Node;

use crate::error::{CadastralError, Result};
use crate::resolver;

/// One decoded survey coordinate with its point metadata
///
/// `x` and `y` are stored exactly as written in the extract. The source
/// coordinate system writes northing into `X` and easting into `Y`, so the
/// emitted 2D position swaps the axes — see [`Ordinate::position`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ordinate {
    /// Coordinate X as written in the source
    pub x: f64,
    /// Coordinate Y as written in the source
    pub y: f64,
    /// Point number to display, explicit or derived from position
    pub point_number: u32,
    /// Optional point prefix
    pub prefix: Option<char>,
    /// Circle radius; presence marks the record as circle-eligible
    pub radius: Option<f64>,
}

impl Ordinate {
    /// Decode one ordinate from `node`
    ///
    /// `fallback_number` is the 1-based position of this coordinate within
    /// its parent element, used when the node carries no explicit point
    /// number or the explicit label contains no digits at all.
    ///
    /// This is a pure parse: no partial record is ever produced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - X or Y is absent or non-numeric (`CadastralError::MissingCoordinate`)
    /// - the radius or a digit-bearing point number fails to parse
    ///   (`CadastralError::MalformedNumber`)
    pub fn decode(node: Node<'_, '_>, fallback_number: u32) -> Result<Self> {
        let x = coordinate_value(node, resolver::X_ATTRS)?;
        let y = coordinate_value(node, resolver::Y_ATTRS)?;

        let point_number = match resolver::attr(node, resolver::POINT_NUMBER_ATTRS) {
            Some(raw) => parse_point_number(&raw)?.unwrap_or(fallback_number),
            None => fallback_number,
        };

        let radius = match resolver::attr(node, resolver::RADIUS_ATTRS) {
            Some(raw) => Some(raw.trim().parse::<f64>().map_err(|_| {
                CadastralError::MalformedNumber {
                    attribute: "Radius".to_string(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let prefix = resolver::attr(node, resolver::PREFIX_ATTRS)
            .and_then(|value| value.chars().next());

        Ok(Self {
            x,
            y,
            point_number,
            prefix,
            radius,
        })
    }

    /// Display label for the point: prefix (if any) followed by the number
    #[must_use]
    pub fn label(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}{}", self.point_number),
            None => self.point_number.to_string(),
        }
    }

    /// Emitted 2D position with the axes swapped
    ///
    /// The swap is a convention of the source coordinate system and is
    /// preserved exactly in all output geometry.
    #[must_use]
    pub fn position(&self) -> Coord<f64> {
        Coord {
            x: self.y,
            y: self.x,
        }
    }
}

fn coordinate_value(node: Node<'_, '_>, aliases: &[&str]) -> Result<f64> {
    let raw = resolver::attr_or_child_text(node, aliases).ok_or_else(|| {
        CadastralError::MissingCoordinate(format!(
            "node <{}> has no {} value",
            node.tag_name().name(),
            aliases[0],
        ))
    })?;
    raw.trim().parse::<f64>().map_err(|_| {
        CadastralError::MissingCoordinate(format!(
            "node <{}> has a non-numeric {} value: {raw:?}",
            node.tag_name().name(),
            aliases[0],
        ))
    })
}

/// Parse an explicit point-number label, stripping decoration
///
/// Labels may carry non-digit decoration around the number. Returns
/// `Ok(None)` when the label contains no digits at all, which sends the
/// caller to its fallback numbering.
fn parse_point_number(raw: &str) -> Result<Option<u32>> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|_| CadastralError::MalformedNumber {
            attribute: "NumGeopoint".to_string(),
            value: raw.to_string(),
        })
}
