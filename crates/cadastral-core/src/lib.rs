//! # cadastral-core
//!
//! Conversion of land-survey ("cadastral") XML extracts into a normalized
//! vector-geometry model suitable for map rendering and GeoJSON export.
//!
//! Extracts come in several incompatible schema variants of the same
//! conceptual format. This crate locates the right nodes across variants
//! through a role-keyed alias table, decodes coordinate records
//! defensively, infers the geometry kind from the shape of the data, and
//! composes multi-ring entities (polygon with holes) or heterogeneous
//! collections.
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Node resolution | [`resolver`] | schema-variant node sets |
//! | Ordinate decoding | [`ordinate`] | one coordinate record per unit |
//! | Geometry assembly | [`element`] | point / line / ring / circle |
//! | Entity composition | [`entity`] | polygon-with-holes or collection |
//! | Accumulation | [`session`] | ordered labeled feature collections |
//!
//! ## Quick Start
//!
//! ```
//! use cadastral_core::Session;
//!
//! let xml = r#"<Extract>
//!   <Parcel CadastralNumber="47:14:1203001:543">
//!     <EntitySpatial>
//!       <SpatialElement>
//!         <SpelementUnit><Ordinate X="518754.05" Y="2150702.94"/></SpelementUnit>
//!       </SpatialElement>
//!     </EntitySpatial>
//!   </Parcel>
//! </Extract>"#;
//!
//! let mut session = Session::new();
//! session.ingest_str(xml)?;
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot[0].label, "47:14:1203001:543");
//! # Ok::<(), cadastral_core::CadastralError>(())
//! ```
//!
//! ## Coordinate Convention
//!
//! The source coordinate system writes northing into `X` and easting into
//! `Y`; emitted positions are `(Y, X)`. The swap is preserved exactly —
//! see [`ordinate::Ordinate::position`].
//!
//! ## Error Handling
//!
//! The core performs no local recovery: any failure aborts the current
//! document at the point of failure and propagates. Entities appended
//! from earlier documents stay in the session. Per-document failure
//! isolation (skip, surface, abort the batch) is the calling layer's
//! decision.

pub mod element;
pub mod entity;
pub mod error;
pub mod ordinate;
pub mod resolver;
pub mod session;

pub use element::{GeometryKind, SpatialElement, SpatialElementUnit, CIRCLE_VERTEX_COUNT};
pub use entity::{Entity, DEFAULT_LABEL};
pub use error::{CadastralError, Result};
pub use ordinate::Ordinate;
pub use session::{LabeledCollection, Session};
