//! Category editing page and form endpoint.

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
    category::{
        CategoryPatch, CategoryState,
        domain::CategoryFormData,
        form::{CategoryFormAction, category_form_view},
        get_category, update_category,
    },
    database_id::parse_id,
    db::lock_connection,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    name::Name,
    navigation::NavBar,
    not_found::record_not_found_response,
};

const CATEGORY_NOT_FOUND: &str = "Categoría no encontrada";

fn edit_category_view(update_endpoint: &str, nombre: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_CATEGORY_VIEW).into_html();
    let form = category_form_view(&CategoryFormAction::Update(update_endpoint), nombre, None);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Editar categoría" }
            (form)
        }
    };

    base("Editar categoría", &content)
}

/// Route handler for the edit category page.
pub async fn get_edit_category_page(
    Path(raw_category_id): Path<String>,
    State(state): State<CategoryState>,
) -> Result<Response, Error> {
    let Some(category_id) = parse_id(&raw_category_id) else {
        return Ok(record_not_found_response(CATEGORY_NOT_FOUND));
    };

    let connection = lock_connection(&state.db_connection)?;

    match get_category(category_id, &connection) {
        Ok(category) => {
            let update_endpoint = endpoints::format_endpoint(endpoints::CATEGORY, category_id);

            Ok(edit_category_view(&update_endpoint, category.name.as_ref()).into_response())
        }
        Err(Error::NotFound) => Ok(record_not_found_response(CATEGORY_NOT_FOUND)),
        Err(error) => {
            tracing::error!("Failed to retrieve category {category_id}: {error}");
            Err(error)
        }
    }
}

/// A route handler for updating a category.
pub async fn update_category_endpoint(
    Path(raw_category_id): Path<String>,
    State(state): State<CategoryState>,
    Form(form_data): Form<CategoryFormData>,
) -> Response {
    let Some(category_id) = parse_id(&raw_category_id) else {
        return Error::UpdateMissingCategory.into_alert_response();
    };

    let update_endpoint = endpoints::format_endpoint(endpoints::CATEGORY, category_id);

    let name = match Name::new(&form_data.nombre) {
        Ok(name) => name,
        Err(error) => {
            return category_form_view(
                &CategoryFormAction::Update(&update_endpoint),
                &form_data.nombre,
                Some(&error.user_message()),
            )
            .into_response();
        }
    };

    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match update_category(category_id, CategoryPatch { name: Some(name) }, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::CATEGORIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(Error::UpdateMissingCategory) => Error::UpdateMissingCategory.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating category {category_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod edit_category_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        category::{CategoryState, NewCategory, create_category, get_edit_category_page},
        endpoints,
        name::Name,
        test_utils::{
            assert_form_input_with_value, assert_hx_endpoint, assert_valid_html,
            get_test_connection, must_get_form, must_get_text, parse_html_document,
        },
    };

    fn get_category_state() -> CategoryState {
        let connection = get_test_connection();
        create_category(
            NewCategory {
                name: Name::new_unchecked("Analgésicos"),
            },
            &connection,
        )
        .unwrap();

        CategoryState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn render_page_with_stored_values() {
        let state = get_category_state();

        let response = get_edit_category_page(Path("1".to_owned()), State(state))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &endpoints::format_endpoint(endpoints::CATEGORY, 1),
            "hx-put",
        );
        assert_form_input_with_value(&form, "nombre", "text", "Analgésicos");
    }

    #[tokio::test]
    async fn missing_category_shows_not_found() {
        let state = get_category_state();

        let response = get_edit_category_page(Path("42".to_owned()), State(state))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        assert!(must_get_text(&html, "section").contains("Categoría no encontrada"));
    }

    #[tokio::test]
    async fn non_numeric_id_shows_not_found() {
        let state = get_category_state();

        let response = get_edit_category_page(Path("abc".to_owned()), State(state))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
