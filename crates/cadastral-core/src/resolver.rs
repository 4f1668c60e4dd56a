//! Schema-variant node resolution
//!
//! Cadastral extracts come in several incompatible schema variants of the
//! same conceptual format. All lookups go through a declarative alias table
//! keyed by conceptual role, so supporting another variant is a table edit
//! rather than new branching logic. Tag matching ignores namespaces and
//! ASCII case.

use roxmltree::Node;

/// Conceptual role of a node in a cadastral extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// One labeled cadastral object (a parcel or building)
    Entity,
    /// One geometric ring/line/point/circle within an entity
    SpatialElement,
    /// One named survey point contributing one coordinate
    CoordinateUnit,
    /// The node carrying the coordinate values themselves
    CoordinatePoint,
}

impl Role {
    /// Tag-name alias tiers for this role, highest priority first
    ///
    /// A lookup walks the tiers in order and keeps the first tier that
    /// matches anything. Tiering keeps the bare `ordinate` variant from
    /// shadowing nested `Ordinate` point nodes in documents that wrap
    /// their coordinates in dedicated unit nodes.
    #[must_use]
    pub fn alias_tiers(self) -> &'static [&'static [&'static str]] {
        match self {
            Role::Entity => &[&["EntitySpatial", "Entity_Spatial"]],
            Role::SpatialElement => &[&["SpatialElement", "Spatial_Element"], &["spatials_elements"]],
            Role::CoordinateUnit => &[&["SpelementUnit", "Spelement_Unit"], &["ordinate"]],
            Role::CoordinatePoint => &[&["Ordinate", "NewOrdinate", "New_Ordinate"]],
        }
    }
}

/// Entity label attribute aliases, looked up on the entity node's parent
pub const LABEL_ATTRS: &[&str] = &["CadastralNumber", "Definition", "Cadastral_Number"];

/// X coordinate aliases
pub const X_ATTRS: &[&str] = &["X"];

/// Y coordinate aliases
pub const Y_ATTRS: &[&str] = &["Y"];

/// Explicit point-number attribute aliases
pub const POINT_NUMBER_ATTRS: &[&str] = &["NumGeopoint", "Num_Geopoint", "ord_nmb", "SuNmb"];

/// Circle radius attribute aliases
pub const RADIUS_ATTRS: &[&str] = &["Radius"];

/// Point prefix attribute aliases
pub const PREFIX_ATTRS: &[&str] = &["PointPref", "Point_Pref"];

/// Collect all descendants of `node` matching `role`, in document order
///
/// Searches recursively beneath `node`; `node` itself never matches. An
/// empty result is not an error here — callers decide whether emptiness
/// is fatal for the structure they are walking.
#[must_use]
pub fn find_descendants<'a, 'input>(node: Node<'a, 'input>, role: Role) -> Vec<Node<'a, 'input>> {
    for tier in role.alias_tiers() {
        let matched: Vec<Node<'a, 'input>> = node
            .descendants()
            .filter(|n| n.is_element() && *n != node && matches_tier(*n, tier))
            .collect();
        if !matched.is_empty() {
            return matched;
        }
    }
    Vec::new()
}

/// Coordinate source for one coordinate unit
///
/// The first `CoordinatePoint` descendant when the variant nests a
/// dedicated coordinate node, otherwise the unit node itself (variants
/// that inline the coordinate attributes directly on the unit).
#[must_use]
pub fn coordinate_source<'a, 'input>(unit: Node<'a, 'input>) -> Node<'a, 'input> {
    find_descendants(unit, Role::CoordinatePoint)
        .into_iter()
        .next()
        .unwrap_or(unit)
}

/// First present attribute value among `aliases`, in priority order
#[must_use]
pub fn attr(node: Node<'_, '_>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|alias| attr_value(node, alias))
}

/// First present value among `aliases`, from an attribute of `node` or
/// from the text of a direct child element of the same name
///
/// The attribute form is checked before the child-element form for each
/// alias. Child text is trimmed; whitespace-only text does not count as
/// present.
#[must_use]
pub fn attr_or_child_text(node: Node<'_, '_>, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        if let Some(value) = attr_value(node, alias) {
            return Some(value);
        }
        let child_text = node
            .children()
            .find(|c| c.is_element() && c.tag_name().name().eq_ignore_ascii_case(alias))
            .and_then(|c| c.text())
            .map(|t| t.trim().to_string());
        if let Some(text) = child_text {
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn matches_tier(node: Node<'_, '_>, aliases: &[&str]) -> bool {
    let name = node.tag_name().name();
    aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
}

fn attr_value(node: Node<'_, '_>, alias: &str) -> Option<String> {
    node.attributes()
        .find(|a| a.name().eq_ignore_ascii_case(alias))
        .map(|a| a.value().to_string())
}
