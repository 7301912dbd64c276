//! Database ID type definition and parsing of IDs from URL path segments.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// Parse a database ID from a raw path segment.
///
/// Returns `None` for anything that is not a plain integer. Callers treat
/// `None` the same as an ID that matches no row, so a request for
/// `/api/medicamentos/abc` gets a 404 rather than a 400.
pub fn parse_id(raw_id: &str) -> Option<DatabaseId> {
    raw_id.trim().parse().ok()
}
