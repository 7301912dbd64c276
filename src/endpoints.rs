//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/categorias/{category_id}', use [format_endpoint].

/// The home page.
pub const ROOT: &str = "/";
/// The page for listing medications. Form submissions for new medications are also posted here.
pub const MEDICATIONS_VIEW: &str = "/medicamentos";
/// The page for creating a new medication.
pub const NEW_MEDICATION_VIEW: &str = "/medicamentos/new";
/// The page for editing an existing medication.
pub const EDIT_MEDICATION_VIEW: &str = "/medicamentos/{medication_id}/edit";
/// The form endpoint for updating or deleting a medication.
pub const MEDICATION: &str = "/medicamentos/{medication_id}";
/// The page for listing categories. Form submissions for new categories are also posted here.
pub const CATEGORIES_VIEW: &str = "/categorias";
/// The page for creating a new category.
pub const NEW_CATEGORY_VIEW: &str = "/categorias/new";
/// The page for editing an existing category.
pub const EDIT_CATEGORY_VIEW: &str = "/categorias/{category_id}/edit";
/// The form endpoint for updating or deleting a category.
pub const CATEGORY: &str = "/categorias/{category_id}";

/// The JSON route for listing and creating categories.
pub const CATEGORIES_API: &str = "/api/categorias";
/// The JSON route for a single category.
pub const CATEGORY_API: &str = "/api/categorias/{category_id}";
/// The JSON route for listing and creating medications.
pub const MEDICATIONS_API: &str = "/api/medicamentos";
/// The JSON route for a single medication.
pub const MEDICATION_API: &str = "/api/medicamentos/{medication_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is the first span that starts with a left brace and ends
/// with the next right brace, e.g. '{category_id}' in '/categorias/{category_id}/edit'.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "{uri} is not a valid URI");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::MEDICATIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_MEDICATION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_MEDICATION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::MEDICATION);
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_CATEGORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_CATEGORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY);

        assert_endpoint_is_valid_uri(endpoints::CATEGORIES_API);
        assert_endpoint_is_valid_uri(endpoints::CATEGORY_API);
        assert_endpoint_is_valid_uri(endpoints::MEDICATIONS_API);
        assert_endpoint_is_valid_uri(endpoints::MEDICATION_API);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::EDIT_MEDICATION_VIEW, 7);

        assert_eq!(formatted_path, "/medicamentos/7/edit");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
