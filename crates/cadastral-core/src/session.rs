//! Session state and document ingestion
//!
//! One [`Session`] accumulates the converted entities of any number of
//! ingested documents, in discovery order. The list is append-only: a
//! failed document appends nothing, and pairs accumulated from earlier
//! documents are never rolled back.

use geojson::FeatureCollection;
use roxmltree::{Document, Node};
use serde::Serialize;

use crate::element::{SpatialElement, SpatialElementUnit};
use crate::entity::{Entity, DEFAULT_LABEL};
use crate::error::{CadastralError, Result};
use crate::ordinate::Ordinate;
use crate::resolver::{self, Role};

/// One converted entity, ready for the external serializer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledCollection {
    /// Display label of the source entity
    pub label: String,
    /// Composite feature plus constituent point features
    pub collection: FeatureCollection,
}

/// Accumulates converted entities across ingested documents
///
/// Documents are processed strictly sequentially; there is no internal
/// I/O, no timeouts and no retries. Document acquisition belongs to the
/// caller.
#[derive(Debug, Default)]
pub struct Session {
    collections: Vec<LabeledCollection>,
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert every entity in `document` and append the results
    ///
    /// Entities are appended in discovery order; repeated calls strictly
    /// append. A document without entities is not an error and appends
    /// zero pairs. Returns the number of pairs appended.
    ///
    /// # Errors
    ///
    /// Returns an extraction error (missing nodes, missing or malformed
    /// coordinate data, unclassifiable geometry) at the first point of
    /// failure. Nothing from the failing document is appended.
    pub fn ingest(&mut self, document: &Document<'_>) -> Result<usize> {
        let entities = extract_entities(document.root())?;

        let mut appended = Vec::with_capacity(entities.len());
        for entity in &entities {
            appended.push(LabeledCollection {
                label: entity.label().to_string(),
                collection: entity.feature_collection()?,
            });
        }

        let count = appended.len();
        log::debug!("document ingested: {count} entities");
        self.collections.extend(appended);
        Ok(count)
    }

    /// Parse `xml` as a document and ingest it
    ///
    /// Convenience wrapper over [`Session::ingest`] for callers holding
    /// the extract text.
    ///
    /// # Errors
    ///
    /// Returns `CadastralError::Xml` when the text is not well-formed
    /// XML, or any extraction error from [`Session::ingest`].
    pub fn ingest_str(&mut self, xml: &str) -> Result<usize> {
        let document = Document::parse(xml)?;
        self.ingest(&document)
    }

    /// Read-only view of the accumulated collections, in insertion order
    #[must_use]
    pub fn snapshot(&self) -> &[LabeledCollection] {
        &self.collections
    }

    /// Encode the accumulated collections as JSON text
    ///
    /// One `{label, collection}` record per entity, in insertion order.
    /// The encoding itself is delegated to `serde_json`.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` encoding failures.
    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.collections)
        } else {
            serde_json::to_string(&self.collections)
        }
    }
}

/// Resolve all entities beneath `root`, in discovery order
fn extract_entities(root: Node<'_, '_>) -> Result<Vec<Entity>> {
    let entity_nodes = resolver::find_descendants(root, Role::Entity);
    let mut entities = Vec::with_capacity(entity_nodes.len());
    for node in entity_nodes {
        entities.push(extract_entity(node)?);
    }
    Ok(entities)
}

fn extract_entity(node: Node<'_, '_>) -> Result<Entity> {
    // The label lives on the entity node's parent (the cadastral object),
    // not on the entity node.
    let label = node
        .parent()
        .and_then(|parent| resolver::attr(parent, resolver::LABEL_ATTRS))
        .unwrap_or_else(|| DEFAULT_LABEL.to_string());

    let element_nodes = resolver::find_descendants(node, Role::SpatialElement);
    if element_nodes.is_empty() {
        return Err(CadastralError::MissingRequiredNodes(format!(
            "entity <{}> has no spatial elements",
            node.tag_name().name(),
        )));
    }

    let mut elements = Vec::with_capacity(element_nodes.len());
    for element_node in element_nodes {
        elements.push(extract_element(element_node)?);
    }
    Entity::new(label, elements)
}

fn extract_element(node: Node<'_, '_>) -> Result<SpatialElement> {
    let unit_nodes = resolver::find_descendants(node, Role::CoordinateUnit);
    if unit_nodes.is_empty() {
        return Err(CadastralError::MissingRequiredNodes(format!(
            "spatial element <{}> has no coordinate units",
            node.tag_name().name(),
        )));
    }

    let mut units = Vec::with_capacity(unit_nodes.len());
    for (number, unit_node) in (1u32..).zip(unit_nodes) {
        let source = resolver::coordinate_source(unit_node);
        let ordinate = Ordinate::decode(source, number)?;
        units.push(SpatialElementUnit::new(ordinate));
    }
    SpatialElement::new(units)
}
