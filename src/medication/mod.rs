//! Medications held in stock, each filed under one category.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod form;
mod list;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use create::{create_medication_endpoint, get_new_medication_page};
pub use db::{
    create_medication, create_medication_table, delete_medication, get_all_medications,
    get_medication, update_medication,
};
pub use delete::delete_medication_endpoint;
pub use domain::{
    Medication, MedicationId, MedicationPatch, MedicationWithCategory, NewMedication, Price, Stock,
};
pub use edit::{get_edit_medication_page, update_medication_endpoint};
pub use list::get_medications_page;

/// The state needed by the medication pages and endpoints.
#[derive(Debug, Clone)]
pub struct MedicationState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MedicationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
