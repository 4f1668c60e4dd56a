//! Spatial element geometry assembly
//!
//! A spatial element is an ordered run of coordinate units. The shape of
//! the data decides what it denotes: a freestanding point, an open
//! polyline, a closed ring, or a circle given by center and radius.

use geo_types::{Coord, Geometry, LineString, Point, Polygon};
use geojson::Feature;

use crate::error::{CadastralError, Result};
use crate::ordinate::Ordinate;

/// Vertex count used to approximate a circle as a regular polygon
///
/// A caller-visible precision choice: emitted circles are regular
/// 40-gons, not exact circles.
pub const CIRCLE_VERTEX_COUNT: usize = 40;

/// Geometry kind denoted by one spatial element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Single freestanding survey point
    Point,
    /// Open polyline through two or more points
    Line,
    /// Closed polygon boundary, first vertex repeated as last
    Ring,
    /// Circle given by one center point with a radius
    Circle,
}

/// One coordinate unit inside a spatial element
///
/// Wraps one [`Ordinate`]; immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialElementUnit {
    ordinate: Ordinate,
}

impl SpatialElementUnit {
    /// Wrap a decoded ordinate
    #[must_use]
    pub fn new(ordinate: Ordinate) -> Self {
        Self { ordinate }
    }

    /// The wrapped coordinate record
    #[must_use]
    pub fn ordinate(&self) -> &Ordinate {
        &self.ordinate
    }

    /// Point geometry at this unit's position
    #[must_use]
    pub fn point(&self) -> Point<f64> {
        Point::from(self.ordinate.position())
    }

    /// Labeled point feature, for rendering vertex markers
    #[must_use]
    pub fn feature(&self) -> Feature {
        labeled_feature(geojson::Value::from(&self.point()), &self.ordinate.label())
    }
}

/// An ordered, non-empty sequence of coordinate units
///
/// Order defines line/ring vertex order and is never re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialElement {
    units: Vec<SpatialElementUnit>,
}

impl SpatialElement {
    /// Wrap a non-empty unit sequence
    ///
    /// # Errors
    ///
    /// Returns `CadastralError::MissingRequiredNodes` when `units` is empty.
    pub fn new(units: Vec<SpatialElementUnit>) -> Result<Self> {
        if units.is_empty() {
            return Err(CadastralError::MissingRequiredNodes(
                "spatial element has no coordinate units".to_string(),
            ));
        }
        Ok(Self { units })
    }

    /// The element's units, in source order
    #[must_use]
    pub fn units(&self) -> &[SpatialElementUnit] {
        &self.units
    }

    /// Classify the element; the first matching rule wins
    ///
    /// 1. `Circle` — exactly one unit with a radius set
    /// 2. `Ring` — first and last positions exactly equal (no tolerance)
    ///    and more than 3 units
    /// 3. `Line` — more than one unit
    /// 4. `Point` — exactly one unit
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        if self.units.len() == 1 {
            if self.units[0].ordinate().radius.is_some() {
                return GeometryKind::Circle;
            }
            return GeometryKind::Point;
        }

        let first = self.units[0].ordinate().position();
        let last = self.units[self.units.len() - 1].ordinate().position();

        if first == last && self.units.len() > 3 {
            return GeometryKind::Ring;
        }
        GeometryKind::Line
    }

    /// Materialize the geometry matching [`Self::kind`]
    ///
    /// # Errors
    ///
    /// Returns `CadastralError::InvalidGeometry` if the unit data escapes
    /// the four classification rules (defensive path).
    pub fn geometry(&self) -> Result<Geometry<f64>> {
        match self.kind() {
            GeometryKind::Point => match self.units.as_slice() {
                [unit] => Ok(Geometry::Point(unit.point())),
                _ => Err(invalid("point element must hold exactly one unit")),
            },
            GeometryKind::Line | GeometryKind::Ring => Ok(Geometry::LineString(self.path())),
            GeometryKind::Circle => match self.units.as_slice() {
                [unit] => match unit.ordinate().radius {
                    Some(radius) => Ok(Geometry::Polygon(circle_polygon(
                        unit.ordinate().position(),
                        radius,
                    ))),
                    None => Err(invalid("circle element without a radius")),
                },
                _ => Err(invalid("circle element must hold exactly one unit")),
            },
        }
    }

    /// Vertex path through all units, in order, exactly as given
    pub(crate) fn path(&self) -> LineString<f64> {
        LineString::new(
            self.units
                .iter()
                .map(|unit| unit.ordinate().position())
                .collect(),
        )
    }
}

/// Regular-polygon approximation of a circle
fn circle_polygon(center: Coord<f64>, radius: f64) -> Polygon<f64> {
    let vertices: Vec<Coord<f64>> = (0..CIRCLE_VERTEX_COUNT)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (CIRCLE_VERTEX_COUNT as f64);
            Coord {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect();
    Polygon::new(LineString::new(vertices), Vec::new())
}

/// Build a feature carrying the single scalar `label` property
pub(crate) fn labeled_feature(geometry: geojson::Value, label: &str) -> Feature {
    let mut properties = geojson::JsonObject::new();
    properties.insert(
        "label".to_string(),
        serde_json::Value::String(label.to_string()),
    );
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn invalid(message: &str) -> CadastralError {
    CadastralError::InvalidGeometry(message.to_string())
}
