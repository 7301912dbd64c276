//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    alert::ErrorAlert,
    category::{CategoryState, delete_category},
    database_id::parse_id,
    db::lock_connection,
};

/// A route handler for deleting a category.
///
/// On success the page is refreshed so the list is fetched again.
pub async fn delete_category_endpoint(
    Path(raw_category_id): Path<String>,
    State(state): State<CategoryState>,
) -> Response {
    let Some(category_id) = parse_id(&raw_category_id) else {
        return Error::DeleteMissingCategory.into_alert_response();
    };

    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match delete_category(category_id, &connection) {
        Ok(_) => (HxRefresh(true), StatusCode::OK).into_response(),
        Err(Error::DeleteMissingCategory) => Error::DeleteMissingCategory.into_alert_response(),
        Err(Error::ConstraintViolation(_)) => (
            StatusCode::CONFLICT,
            ErrorAlert::new(
                "No se puede eliminar la categoría",
                "Hay medicamentos que pertenecen a esta categoría. \
                Reasígnalos o elimínalos primero.",
            ),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not delete category {category_id}: {error}");
            error.into_alert_response()
        }
    }
}
