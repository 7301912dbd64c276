//! Application router configuration for the HTML pages and the JSON API.

use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    AppState,
    api::{
        create_category_api, create_medication_api, delete_category_api, delete_medication_api,
        get_categories_api, get_category_api, get_medication_api, get_medications_api,
        update_category_api, update_medication_api,
    },
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_page,
        get_edit_category_page, get_new_category_page, update_category_endpoint,
    },
    endpoints,
    home::get_home_page,
    medication::{
        create_medication_endpoint, delete_medication_endpoint, get_edit_medication_page,
        get_medications_page, get_new_medication_page, update_medication_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(
            endpoints::MEDICATIONS_VIEW,
            get(get_medications_page).post(create_medication_endpoint),
        )
        .route(endpoints::NEW_MEDICATION_VIEW, get(get_new_medication_page))
        .route(
            endpoints::EDIT_MEDICATION_VIEW,
            get(get_edit_medication_page),
        )
        .route(
            endpoints::MEDICATION,
            put(update_medication_endpoint).delete(delete_medication_endpoint),
        )
        .route(
            endpoints::CATEGORIES_VIEW,
            get(get_categories_page).post(create_category_endpoint),
        )
        .route(endpoints::NEW_CATEGORY_VIEW, get(get_new_category_page))
        .route(endpoints::EDIT_CATEGORY_VIEW, get(get_edit_category_page))
        .route(
            endpoints::CATEGORY,
            put(update_category_endpoint).delete(delete_category_endpoint),
        );

    let api_routes = Router::new()
        .route(
            endpoints::CATEGORIES_API,
            get(get_categories_api).post(create_category_api),
        )
        .route(
            endpoints::CATEGORY_API,
            get(get_category_api)
                .put(update_category_api)
                .delete(delete_category_api),
        )
        .route(
            endpoints::MEDICATIONS_API,
            get(get_medications_api).post(create_medication_api),
        )
        .route(
            endpoints::MEDICATION_API,
            get(get_medication_api)
                .put(update_medication_api)
                .delete(delete_medication_api),
        );

    view_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
