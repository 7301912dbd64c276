//! Medication editing page and form endpoint.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    Error,
    category::{Category, get_all_categories},
    database_id::parse_id,
    db::lock_connection,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    medication::{
        MedicationPatch, MedicationState,
        form::{MedicationFormAction, MedicationFormData, MedicationFormErrors, medication_form_view},
        get_medication, update_medication,
    },
    navigation::NavBar,
    not_found::record_not_found_response,
};

const MEDICATION_NOT_FOUND: &str = "Medicamento no encontrado";

fn edit_medication_view(
    update_endpoint: &str,
    form_data: &MedicationFormData,
    categories: &[Category],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_MEDICATION_VIEW).into_html();
    let form = medication_form_view(
        &MedicationFormAction::Update(update_endpoint),
        form_data,
        &MedicationFormErrors::default(),
        categories,
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Editar medicamento" }
            (form)
        }
    };

    base("Editar medicamento", &content)
}

/// Route handler for the edit medication page.
pub async fn get_edit_medication_page(
    Path(raw_medication_id): Path<String>,
    State(state): State<MedicationState>,
) -> Result<Response, Error> {
    let Some(medication_id) = parse_id(&raw_medication_id) else {
        return Ok(record_not_found_response(MEDICATION_NOT_FOUND));
    };

    let connection = lock_connection(&state.db_connection)?;

    let medication = match get_medication(medication_id, &connection) {
        Ok(item) => item.medication,
        Err(Error::NotFound) => return Ok(record_not_found_response(MEDICATION_NOT_FOUND)),
        Err(error) => {
            tracing::error!("Failed to retrieve medication {medication_id}: {error}");
            return Err(error);
        }
    };

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    let update_endpoint = endpoints::format_endpoint(endpoints::MEDICATION, medication_id);
    let form_data = MedicationFormData::from_medication(&medication);

    Ok(edit_medication_view(&update_endpoint, &form_data, &categories).into_response())
}

/// A route handler for updating a medication.
pub async fn update_medication_endpoint(
    Path(raw_medication_id): Path<String>,
    State(state): State<MedicationState>,
    Form(form_data): Form<MedicationFormData>,
) -> Response {
    let Some(medication_id) = parse_id(&raw_medication_id) else {
        return Error::UpdateMissingMedication.into_alert_response();
    };

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

    let update_endpoint = endpoints::format_endpoint(endpoints::MEDICATION, medication_id);

    let new_medication = match form_data.validate(&categories) {
        Ok(new_medication) => new_medication,
        Err(errors) => {
            return medication_form_view(
                &MedicationFormAction::Update(&update_endpoint),
                &form_data,
                &errors,
                &categories,
            )
            .into_response();
        }
    };

    match update_medication(
        medication_id,
        MedicationPatch::from(new_medication),
        &connection,
    ) {
        Ok(_) => (
            HxRedirect(endpoints::MEDICATIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(Error::UpdateMissingMedication) => {
            Error::UpdateMissingMedication.into_alert_response()
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating medication {medication_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
