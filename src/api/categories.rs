//! REST handlers for categories.

use axum::extract::{Path, State};
use serde::Deserialize;

use crate::{
    Error,
    api::json::{ApiError, ApiJson, ApiResult},
    category::{
        Category, CategoryPatch, CategoryState, NewCategory, create_category, delete_category,
        get_all_categories, get_category, update_category,
    },
    database_id::parse_id,
    db::lock_connection,
    name::Name,
};

const CATEGORY_NOT_FOUND: &str = "Categoría no encontrada";

/// The body of `POST /api/categorias`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    nombre: String,
}

impl TryFrom<CreateCategoryRequest> for NewCategory {
    type Error = Error;

    fn try_from(request: CreateCategoryRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: Name::new(&request.nombre)?,
        })
    }
}

/// The body of `PUT /api/categorias/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    nombre: Option<String>,
}

impl TryFrom<UpdateCategoryRequest> for CategoryPatch {
    type Error = Error;

    fn try_from(request: UpdateCategoryRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: request.nombre.as_deref().map(Name::new).transpose()?,
        })
    }
}

/// `GET /api/categorias`
pub async fn get_categories_api(State(state): State<CategoryState>) -> ApiResult<Vec<Category>> {
    let connection = lock_connection(&state.db_connection)?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    Ok(ApiJson(categories))
}

/// `GET /api/categorias/{id}`
pub async fn get_category_api(
    Path(raw_category_id): Path<String>,
    State(state): State<CategoryState>,
) -> ApiResult<Category> {
    let category_id =
        parse_id(&raw_category_id).ok_or_else(|| ApiError::not_found(CATEGORY_NOT_FOUND))?;

    let connection = lock_connection(&state.db_connection)?;

    match get_category(category_id, &connection) {
        Ok(category) => Ok(ApiJson(category)),
        Err(Error::NotFound) => Err(ApiError::not_found(CATEGORY_NOT_FOUND)),
        Err(error) => Err(error.into()),
    }
}

/// `POST /api/categorias`
pub async fn create_category_api(
    State(state): State<CategoryState>,
    ApiJson(request): ApiJson<CreateCategoryRequest>,
) -> ApiResult<Category> {
    let new_category = NewCategory::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;

    let category = create_category(new_category, &connection)?;

    Ok(ApiJson(category))
}

/// `PUT /api/categorias/{id}`
pub async fn update_category_api(
    Path(raw_category_id): Path<String>,
    State(state): State<CategoryState>,
    ApiJson(request): ApiJson<UpdateCategoryRequest>,
) -> ApiResult<Category> {
    let category_id =
        parse_id(&raw_category_id).ok_or_else(|| ApiError::not_found(CATEGORY_NOT_FOUND))?;
    let patch = CategoryPatch::try_from(request)?;

    let connection = lock_connection(&state.db_connection)?;

    let category = update_category(category_id, patch, &connection)?;

    Ok(ApiJson(category))
}

/// `DELETE /api/categorias/{id}`
///
/// A category that medications still refer to cannot be deleted.
pub async fn delete_category_api(
    Path(raw_category_id): Path<String>,
    State(state): State<CategoryState>,
) -> ApiResult<Category> {
    let category_id =
        parse_id(&raw_category_id).ok_or_else(|| ApiError::not_found(CATEGORY_NOT_FOUND))?;

    let connection = lock_connection(&state.db_connection)?;

    let category = delete_category(category_id, &connection)?;

    Ok(ApiJson(category))
}
