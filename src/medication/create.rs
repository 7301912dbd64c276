//! Medication creation page and form endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    Error,
    category::{Category, get_all_categories},
    db::lock_connection,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    medication::{
        MedicationState, create_medication,
        form::{MedicationFormAction, MedicationFormData, MedicationFormErrors, medication_form_view},
    },
    navigation::NavBar,
};

fn new_medication_view(categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_MEDICATION_VIEW).into_html();
    let form = medication_form_view(
        &MedicationFormAction::Create,
        &MedicationFormData::default(),
        &MedicationFormErrors::default(),
        categories,
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Nuevo medicamento" }
            (form)
        }
    };

    base("Nuevo medicamento", &content)
}

/// Render the page for creating a medication, with the categories to choose from.
pub async fn get_new_medication_page(
    State(state): State<MedicationState>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(new_medication_view(&categories).into_response())
}

/// Handle medication creation form submission.
///
/// Invalid fields are reported by re-rendering the form, and nothing is written.
pub async fn create_medication_endpoint(
    State(state): State<MedicationState>,
    Form(form_data): Form<MedicationFormData>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    let categories = match get_all_categories(&connection) {
        Ok(categories) => categories,
        Err(error) => {
            tracing::error!("Failed to retrieve categories: {error}");
            return error.into_alert_response();
        }
    };

    let new_medication = match form_data.validate(&categories) {
        Ok(new_medication) => new_medication,
        Err(errors) => {
            return medication_form_view(
                &MedicationFormAction::Create,
                &form_data,
                &errors,
                &categories,
            )
            .into_response();
        }
    };

    match create_medication(new_medication, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::MEDICATIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a medication: {error}");

            error.into_alert_response()
        }
    }
}
