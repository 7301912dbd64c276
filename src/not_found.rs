//! The page shown for routes and records that do not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::html::error_view;

fn not_found_view(description: &str) -> Markup {
    error_view(
        "No encontrado",
        "404",
        description,
        "Revisa la dirección o vuelve a la página de inicio.",
    )
}

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        not_found_view("La página que buscas no existe."),
    )
        .into_response()
}

/// A 404 page for a record that could not be found, e.g. "Medicamento no encontrado".
pub fn record_not_found_response(description: &str) -> Response {
    (StatusCode::NOT_FOUND, not_found_view(description)).into_response()
}
