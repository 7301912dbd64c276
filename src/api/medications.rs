//! REST handlers for medications.

use axum::extract::{Path, State};
use serde::Deserialize;

use crate::{
    Error,
    api::json::{ApiError, ApiJson, ApiResult},
    category::CategoryId,
    database_id::parse_id,
    db::lock_connection,
    medication::{
        Medication, MedicationPatch, MedicationState, MedicationWithCategory, NewMedication,
        Price, Stock, create_medication, delete_medication, get_all_medications, get_medication,
        update_medication,
    },
    name::Name,
};

const MEDICATION_NOT_FOUND: &str = "Medicamento no encontrado";
/// The 404 message for `GET /api/medicamentos/{id}`.
const NOT_FOUND: &str = "No encontrado";

/// The body of `POST /api/medicamentos`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateMedicationRequest {
    nombre: String,
    precio: f64,
    stock: i64,
    categoria_id: CategoryId,
}

impl TryFrom<CreateMedicationRequest> for NewMedication {
    type Error = Error;

    fn try_from(request: CreateMedicationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: Name::new(&request.nombre)?,
            price: Price::new(request.precio)?,
            stock: Stock::new(request.stock)?,
            category_id: request.categoria_id,
        })
    }
}

/// The body of `PUT /api/medicamentos/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateMedicationRequest {
    #[serde(default)]
    nombre: Option<String>,
    #[serde(default)]
    precio: Option<f64>,
    #[serde(default)]
    stock: Option<i64>,
    #[serde(default)]
    categoria_id: Option<CategoryId>,
}

impl TryFrom<UpdateMedicationRequest> for MedicationPatch {
    type Error = Error;

    fn try_from(request: UpdateMedicationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: request.nombre.as_deref().map(Name::new).transpose()?,
            price: request.precio.map(Price::new).transpose()?,
            stock: request.stock.map(Stock::new).transpose()?,
            category_id: request.categoria_id,
        })
    }
}

/// `GET /api/medicamentos`
pub async fn get_medications_api(
    State(state): State<MedicationState>,
) -> ApiResult<Vec<MedicationWithCategory>> {
    let connection = lock_connection(&state.db_connection)?;

    let medications = get_all_medications(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve medications: {error}"))?;

    Ok(ApiJson(medications))
}

/// `GET /api/medicamentos/{id}`
pub async fn get_medication_api(
    Path(raw_medication_id): Path<String>,
    State(state): State<MedicationState>,
) -> ApiResult<MedicationWithCategory> {
    let medication_id =
        parse_id(&raw_medication_id).ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    let connection = lock_connection(&state.db_connection)?;

    match get_medication(medication_id, &connection) {
        Ok(medication) => Ok(ApiJson(medication)),
        Err(Error::NotFound) => Err(ApiError::not_found(NOT_FOUND)),
        Err(error) => Err(error.into()),
    }
}

/// `POST /api/medicamentos`
///
/// A `categoriaId` that matches no category is rejected by the store.
pub async fn create_medication_api(
    State(state): State<MedicationState>,
    ApiJson(request): ApiJson<CreateMedicationRequest>,
) -> ApiResult<Medication> {
    let new_medication = NewMedication::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;

    let medication = create_medication(new_medication, &connection)?;

    Ok(ApiJson(medication))
}

/// `PUT /api/medicamentos/{id}`
pub async fn update_medication_api(
    Path(raw_medication_id): Path<String>,
    State(state): State<MedicationState>,
    ApiJson(request): ApiJson<UpdateMedicationRequest>,
) -> ApiResult<Medication> {
    let medication_id =
        parse_id(&raw_medication_id).ok_or_else(|| ApiError::not_found(MEDICATION_NOT_FOUND))?;
    let patch = MedicationPatch::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;

    let medication = update_medication(medication_id, patch, &connection)?;

    Ok(ApiJson(medication))
}

/// `DELETE /api/medicamentos/{id}`
pub async fn delete_medication_api(
    Path(raw_medication_id): Path<String>,
    State(state): State<MedicationState>,
) -> ApiResult<Medication> {
    let medication_id =
        parse_id(&raw_medication_id).ok_or_else(|| ApiError::not_found(MEDICATION_NOT_FOUND))?;

    let connection = lock_connection(&state.db_connection)?;

    let medication = delete_medication(medication_id, &connection)?;

    Ok(ApiJson(medication))
}
