//! Marker attribute lookup.

use crate::model::Attributed;

/// Fully-qualified name of the marker attribute.
pub const MARKER_ATTRIBUTE: &str = "InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute";

/// Whether `symbol` carries the marker attribute.
///
/// An absent symbol (unresolved target, top-level code) has no marker.
/// Attributes the host could not bind never match.
pub fn has_marker<S: Attributed + ?Sized>(symbol: Option<&S>) -> bool {
    symbol.is_some_and(|symbol| {
        symbol
            .attributes()
            .iter()
            .any(|attribute| attribute.class.as_deref() == Some(MARKER_ATTRIBUTE))
    })
}
