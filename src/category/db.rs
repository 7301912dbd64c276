//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryPatch, NewCategory},
    name::Name,
};

/// Create a category in the database.
///
/// # Errors
/// This function will return an error if there is an SQL error.
pub fn create_category(category: NewCategory, connection: &Connection) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO categoria (nombre) VALUES (?1);",
        (category.name.as_ref(),),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name: category.name,
    })
}

/// Retrieve the category with `category_id`.
///
/// # Errors
/// This function will return an [Error::NotFound] if the category does not exist,
/// or an error if there is an SQL error.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, nombre FROM categoria WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories in the order they were created.
///
/// # Errors
/// This function will return an error if there is an SQL error.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, nombre FROM categoria ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Apply `patch` to the category with `category_id` and return the stored result.
///
/// # Errors
/// This function will return an [Error::UpdateMissingCategory] if the category
/// does not exist, or an error if there is an SQL error.
pub fn update_category(
    category_id: CategoryId,
    patch: CategoryPatch,
    connection: &Connection,
) -> Result<Category, Error> {
    let name: Option<&str> = patch.name.as_ref().map(AsRef::as_ref);

    let rows_affected = connection.execute(
        "UPDATE categoria SET nombre = COALESCE(?1, nombre) WHERE id = ?2",
        (name, category_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingCategory);
    }

    get_category(category_id, connection)
}

/// Delete a category and return it as it was before deletion.
///
/// Medications are never touched. Deleting a category that medications still
/// refer to is rejected by the foreign key.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingCategory] if the category does not exist,
/// - [Error::ConstraintViolation] if a medication refers to the category,
/// - or an error if there is some other SQL error.
pub fn delete_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    let category = get_category(category_id, connection).map_err(|error| match error {
        Error::NotFound => Error::DeleteMissingCategory,
        error => error,
    })?;

    let rows_affected = connection.execute("DELETE FROM categoria WHERE id = ?1", [category_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingCategory);
    }

    Ok(category)
}

pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS categoria (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL
        );",
    )
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = Name::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
