//! Error types for cadastral extract processing

use thiserror::Error;

/// Errors that can occur while extracting geometry from a cadastral extract
#[derive(Debug, Error)]
pub enum CadastralError {
    /// A structurally required node search returned nothing
    #[error("Missing required nodes: {0}")]
    MissingRequiredNodes(String),

    /// A coordinate-bearing node lacks a usable X or Y value
    #[error("Missing coordinate: {0}")]
    MissingCoordinate(String),

    /// The geometry assembler reached an unclassifiable state
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A numeric attribute was present but not parseable as its type
    #[error("Malformed number in {attribute}: {value:?}")]
    MalformedNumber {
        /// Canonical name of the offending attribute
        attribute: String,
        /// Raw attribute text as found in the extract
        value: String,
    },

    /// XML well-formedness error
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Result type for cadastral operations
pub type Result<T> = std::result::Result<T, CadastralError>;
