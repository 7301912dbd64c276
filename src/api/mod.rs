//! The JSON REST API, mounted under `/api`.
//!
//! Handlers validate request bodies before calling the store and answer
//! every failure with `{"error": "<message>"}`.

mod categories;
mod json;
mod medications;

pub use categories::{
    create_category_api, delete_category_api, get_categories_api, get_category_api,
    update_category_api,
};
pub use medications::{
    create_medication_api, delete_medication_api, get_medication_api, get_medications_api,
    update_medication_api,
};
