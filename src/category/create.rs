//! Category creation page and form endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    category::{
        CategoryState, NewCategory, create_category,
        domain::CategoryFormData,
        form::{CategoryFormAction, category_form_view},
    },
    db::lock_connection,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    name::Name,
    navigation::NavBar,
};

fn new_category_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_CATEGORY_VIEW).into_html();
    let form = category_form_view(&CategoryFormAction::Create, "", None);

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Nueva categoría" }
            (form)
        }
    };

    base("Nueva categoría", &content)
}

pub async fn get_new_category_page() -> Response {
    new_category_view().into_response()
}

/// Handle category creation form submission.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    Form(form_data): Form<CategoryFormData>,
) -> Response {
    let name = match Name::new(&form_data.nombre) {
        Ok(name) => name,
        Err(error) => {
            return category_form_view(
                &CategoryFormAction::Create,
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

    match create_category(NewCategory { name }, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::CATEGORIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a category: {error}");

            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod new_category_page_tests {
    use axum::http::StatusCode;

    use crate::{
        category::get_new_category_page,
        endpoints,
        test_utils::{
            assert_content_type, assert_form_input, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn render_page() {
        let response = get_new_category_page().await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::CATEGORIES_VIEW, "hx-post");
        assert_hx_endpoint(&form, "#alert-container", "hx-target-error");
        assert_hx_endpoint(&form, "#submit-button", "hx-disabled-elt");
        assert_form_input(&form, "nombre", "text");
        assert_form_submit_button_with_text(&form, "Crear categoría");
    }
}
