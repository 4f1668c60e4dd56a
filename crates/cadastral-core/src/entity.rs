//! Entity composition
//!
//! An entity bundles the spatial elements that share one parent label. A
//! uniform run of rings composes into a single polygon with holes; any
//! other mix stays a heterogeneous geometry collection.

use geo_types::{Geometry, GeometryCollection, Polygon};
use geojson::{Feature, FeatureCollection};

use crate::element::{labeled_feature, GeometryKind, SpatialElement, SpatialElementUnit};
use crate::error::{CadastralError, Result};

/// Display label attached to entities whose source carries none
pub const DEFAULT_LABEL: &str = "Geometry";

/// One labeled cadastral object composed of one or more spatial elements
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    label: String,
    elements: Vec<SpatialElement>,
}

impl Entity {
    /// Bundle a non-empty element sequence under a display label
    ///
    /// # Errors
    ///
    /// Returns `CadastralError::MissingRequiredNodes` when `elements` is
    /// empty.
    pub fn new(label: impl Into<String>, elements: Vec<SpatialElement>) -> Result<Self> {
        if elements.is_empty() {
            return Err(CadastralError::MissingRequiredNodes(
                "entity has no spatial elements".to_string(),
            ));
        }
        Ok(Self {
            label: label.into(),
            elements,
        })
    }

    /// Display label (cadastral number or definition text)
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The entity's elements, in source order
    #[must_use]
    pub fn elements(&self) -> &[SpatialElement] {
        &self.elements
    }

    /// Composite geometry across all elements
    ///
    /// When every element is a ring, the first ring is the outer boundary
    /// and every subsequent ring a hole, in element order. Any other mix
    /// yields a geometry collection with one member per element; no
    /// polygon inference is attempted across heterogeneous kinds.
    ///
    /// # Errors
    ///
    /// Propagates assembly failures from the constituent elements.
    pub fn geometry(&self) -> Result<Geometry<f64>> {
        if self
            .elements
            .iter()
            .all(|element| element.kind() == GeometryKind::Ring)
        {
            let exterior = self.elements[0].path();
            let holes = self.elements[1..]
                .iter()
                .map(SpatialElement::path)
                .collect();
            return Ok(Geometry::Polygon(Polygon::new(exterior, holes)));
        }

        let members = self
            .elements
            .iter()
            .map(SpatialElement::geometry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Geometry::GeometryCollection(GeometryCollection(members)))
    }

    /// Composite feature carrying the entity label
    ///
    /// # Errors
    ///
    /// Propagates geometry composition failures.
    pub fn feature(&self) -> Result<Feature> {
        let geometry = self.geometry()?;
        Ok(labeled_feature(geojson::Value::from(&geometry), &self.label))
    }

    /// Feature collection for this entity
    ///
    /// The composite feature comes first, followed by every constituent
    /// point feature in element/unit order — the point features exist for
    /// caller convenience (vertex markers).
    ///
    /// # Errors
    ///
    /// Propagates geometry composition failures.
    pub fn feature_collection(&self) -> Result<FeatureCollection> {
        let point_count: usize = self.elements.iter().map(|e| e.units().len()).sum();
        let mut features = Vec::with_capacity(1 + point_count);
        features.push(self.feature()?);
        features.extend(
            self.elements
                .iter()
                .flat_map(|element| element.units().iter().map(SpatialElementUnit::feature)),
        );
        Ok(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }
}
