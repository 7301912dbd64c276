//! Medication deletion endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRefresh;

use crate::{
    Error,
    database_id::parse_id,
    db::lock_connection,
    medication::{MedicationState, delete_medication},
};

/// A route handler for deleting a medication.
///
/// On success the page is refreshed so the list is fetched again.
pub async fn delete_medication_endpoint(
    Path(raw_medication_id): Path<String>,
    State(state): State<MedicationState>,
) -> Response {
    let Some(medication_id) = parse_id(&raw_medication_id) else {
        return Error::DeleteMissingMedication.into_alert_response();
    };

    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match delete_medication(medication_id, &connection) {
        Ok(_) => (HxRefresh(true), StatusCode::OK).into_response(),
        Err(Error::DeleteMissingMedication) => Error::DeleteMissingMedication.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete medication {medication_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_medication_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        Error,
        category::{NewCategory, create_category, get_category},
        medication::{
            MedicationState, NewMedication, Price, Stock, create_medication,
            delete_medication_endpoint, get_medication,
        },
        name::Name,
        test_utils::{assert_hx_refresh, get_test_connection},
    };

    fn get_medication_state() -> MedicationState {
        let connection = get_test_connection();
        create_category(
            NewCategory {
                name: Name::new_unchecked("Analgésicos"),
            },
            &connection,
        )
        .unwrap();
        create_medication(
            NewMedication {
                name: Name::new_unchecked("Paracetamol 500mg"),
                price: Price::new(5.5).unwrap(),
                stock: Stock::new(100).unwrap(),
                category_id: 1,
            },
            &connection,
        )
        .unwrap();

        MedicationState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn deletes_medication_and_refreshes() {
        let state = get_medication_state();

        let response =
            delete_medication_endpoint(Path("1".to_owned()), State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_hx_refresh(&response);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_medication(1, &connection), Err(Error::NotFound));
        assert!(get_category(1, &connection).is_ok());
    }

    #[tokio::test]
    async fn missing_medication_responds_with_not_found() {
        let state = get_medication_state();

        let response = delete_medication_endpoint(Path("42".to_owned()), State(state)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_responds_with_not_found() {
        let state = get_medication_state();

        let response = delete_medication_endpoint(Path("abc".to_owned()), State(state)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
