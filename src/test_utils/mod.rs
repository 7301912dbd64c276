#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{
    assert_field_error_message, assert_form_input, assert_form_input_with_value,
    assert_form_submit_button_with_text, assert_hx_endpoint, assert_input_attribute,
    assert_no_field_error_message, get_select_options, get_selected_option, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, get_table_rows, must_get_text, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{
    assert_content_type, assert_hx_redirect, assert_hx_refresh, get_header,
};

use axum::middleware;
use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, build_router, initialize_db, logging_middleware};

/// An in-memory database with the schema in place.
pub(crate) fn get_test_connection() -> Connection {
    let connection = Connection::open_in_memory().unwrap();
    initialize_db(&connection).unwrap();

    connection
}

/// A test server for the whole router, backed by a fresh in-memory database.
pub(crate) fn get_test_server() -> TestServer {
    let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// Like [get_test_server], with [logging_middleware] attached as in the server binary.
pub(crate) fn get_logged_test_server() -> TestServer {
    let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
    let app = build_router(state).layer(middleware::from_fn(logging_middleware));

    TestServer::try_new(app).expect("Could not create test server.")
}
