//! Farmacia is a web app for managing a pharmacy's inventory of medications
//! and the categories they are filed under.
//!
//! This library provides a JSON REST API under `/api` and a set of HTML
//! pages, rendered on the server, that list, search, create, edit and delete
//! both entities.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod category;
mod database_id;
mod db;
mod endpoints;
mod home;
mod html;
mod internal_server_error;
mod logging;
mod medication;
mod name;
mod navigation;
mod not_found;
mod routing;
mod search;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_SIZE_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    alert::ErrorAlert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// SQLite extended result code for a failed FOREIGN KEY constraint.
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;
/// SQLite extended result code for a failed CHECK constraint.
const SQLITE_CONSTRAINT_CHECK: i32 = 275;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used as a category or medication name.
    #[error("name cannot be empty")]
    EmptyName,

    /// A price of zero, a negative price, or a price that is not a finite
    /// number was given for a medication.
    #[error("price must be greater than zero, got {0}")]
    NonPositivePrice(f64),

    /// A negative stock count was given for a medication.
    #[error("stock cannot be negative, got {0}")]
    NegativeStock(i64),

    /// The JSON request body could not be parsed against the expected schema.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A write was rejected by a database constraint, e.g., a medication
    /// referring to a category that does not exist, or deleting a category
    /// that medications still refer to.
    #[error("a database constraint was violated: {0}")]
    ConstraintViolation(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// Tried to update a medication that does not exist
    #[error("tried to update a medication that is not in the database")]
    UpdateMissingMedication,

    /// Tried to delete a medication that does not exist
    #[error("tried to delete a medication that is not in the database")]
    DeleteMissingMedication,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(sql_error, description)
                if sql_error.extended_code == SQLITE_CONSTRAINT_FOREIGNKEY
                    || sql_error.extended_code == SQLITE_CONSTRAINT_CHECK =>
            {
                Error::ConstraintViolation(description.unwrap_or_else(|| sql_error.to_string()))
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    /// Whether the error was caused by invalid input from the client.
    fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyName
                | Error::NonPositivePrice(_)
                | Error::NegativeStock(_)
                | Error::InvalidRequestBody(_)
        )
    }

    /// A message that is safe to show to the client.
    ///
    /// Errors that expose internal details (SQL errors, lock errors) are
    /// replaced with a generic message.
    fn user_message(&self) -> String {
        match self {
            Error::EmptyName => "El nombre es requerido".to_owned(),
            Error::NonPositivePrice(_) => "El precio debe ser mayor a 0".to_owned(),
            Error::NegativeStock(_) => "El stock no puede ser negativo".to_owned(),
            Error::InvalidRequestBody(reason) => format!("Solicitud no válida: {reason}"),
            Error::NotFound => "No encontrado".to_owned(),
            Error::UpdateMissingCategory | Error::DeleteMissingCategory => {
                "Categoría no encontrada".to_owned()
            }
            Error::UpdateMissingMedication | Error::DeleteMissingMedication => {
                "Medicamento no encontrado".to_owned()
            }
            Error::ConstraintViolation(reason) => {
                format!("La operación viola una restricción de la base de datos: {reason}")
            }
            Error::SqlError(_) | Error::DatabaseLockError => {
                "Ocurrió un error inesperado, revisa los registros del servidor".to_owned()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let message = self.user_message();

        match self {
            Error::UpdateMissingCategory => (
                StatusCode::NOT_FOUND,
                ErrorAlert::new(
                    "No se pudo actualizar la categoría",
                    "La categoría no existe.",
                ),
            )
                .into_response(),
            Error::DeleteMissingCategory => (
                StatusCode::NOT_FOUND,
                ErrorAlert::new(
                    "No se pudo eliminar la categoría",
                    "La categoría no existe. \
                    Recarga la página para ver si ya fue eliminada.",
                ),
            )
                .into_response(),
            Error::UpdateMissingMedication => (
                StatusCode::NOT_FOUND,
                ErrorAlert::new(
                    "No se pudo actualizar el medicamento",
                    "El medicamento no existe.",
                ),
            )
                .into_response(),
            Error::DeleteMissingMedication => (
                StatusCode::NOT_FOUND,
                ErrorAlert::new(
                    "No se pudo eliminar el medicamento",
                    "El medicamento no existe. \
                    Recarga la página para ver si ya fue eliminado.",
                ),
            )
                .into_response(),
            Error::ConstraintViolation(_) => (
                StatusCode::CONFLICT,
                ErrorAlert::new("No se pudo guardar", &message),
            )
                .into_response(),
            ref error if error.is_validation_error() => (
                StatusCode::BAD_REQUEST,
                ErrorAlert::new("Datos no válidos", &message),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorAlert::new(
                        "Algo salió mal",
                        "Ocurrió un error inesperado, revisa los registros del servidor.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
