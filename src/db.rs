//! The store adapter: schema set-up and access to the shared SQLite connection.

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{Error, category::create_category_table, medication::create_medication_table};

/// Prepare a connection for use by the application.
///
/// Turns on foreign key enforcement, which SQLite leaves off by default and
/// only applies per connection, then creates the tables for the domain models
/// if they do not exist yet.
///
/// # Errors
/// Returns an error if the pragma cannot be set or a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;

    let transaction = connection.unchecked_transaction()?;

    create_category_table(&transaction)?;
    create_medication_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Lock the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
pub fn lock_connection(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        assert_eq!(initialize(&connection), Ok(()));
        assert_eq!(initialize(&connection), Ok(()));
    }

    #[test]
    fn enables_foreign_keys() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        let enabled: bool = connection
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();

        assert!(enabled);
    }
}
