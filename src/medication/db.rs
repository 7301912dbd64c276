//! Database operations for medications.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::Category,
    medication::{
        Medication, MedicationId, MedicationPatch, MedicationWithCategory, NewMedication, Price,
        Stock,
    },
    name::Name,
};

const SELECT_WITH_CATEGORY: &str = "SELECT m.id, m.nombre, m.precio, m.stock, m.categoria_id, c.nombre
    FROM medicamento m
    INNER JOIN categoria c ON c.id = m.categoria_id";

/// Create a medication in the database.
///
/// # Errors
/// This function will return an [Error::ConstraintViolation] if the category
/// does not exist, or an error if there is some other SQL error.
pub fn create_medication(
    medication: NewMedication,
    connection: &Connection,
) -> Result<Medication, Error> {
    connection.execute(
        "INSERT INTO medicamento (nombre, precio, stock, categoria_id) VALUES (?1, ?2, ?3, ?4);",
        (
            medication.name.as_ref(),
            medication.price.value(),
            medication.stock.value(),
            medication.category_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Medication {
        id,
        name: medication.name,
        price: medication.price,
        stock: medication.stock,
        category_id: medication.category_id,
    })
}

/// Retrieve the medication with `medication_id` and its category.
///
/// # Errors
/// This function will return an [Error::NotFound] if the medication does not exist,
/// or an error if there is an SQL error.
pub fn get_medication(
    medication_id: MedicationId,
    connection: &Connection,
) -> Result<MedicationWithCategory, Error> {
    connection
        .prepare(&format!("{SELECT_WITH_CATEGORY} WHERE m.id = :id;"))?
        .query_row(&[(":id", &medication_id)], map_row_with_category)
        .map_err(|error| error.into())
}

/// Retrieve all medications and their categories in the order they were created.
///
/// # Errors
/// This function will return an error if there is an SQL error.
pub fn get_all_medications(connection: &Connection) -> Result<Vec<MedicationWithCategory>, Error> {
    connection
        .prepare(&format!("{SELECT_WITH_CATEGORY} ORDER BY m.id ASC;"))?
        .query_map([], map_row_with_category)?
        .map(|maybe_medication| maybe_medication.map_err(|error| error.into()))
        .collect()
}

/// Apply `patch` to the medication with `medication_id` and return the stored result.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingMedication] if the medication does not exist,
/// - [Error::ConstraintViolation] if the new category does not exist,
/// - or an error if there is some other SQL error.
pub fn update_medication(
    medication_id: MedicationId,
    patch: MedicationPatch,
    connection: &Connection,
) -> Result<Medication, Error> {
    let name: Option<&str> = patch.name.as_ref().map(AsRef::as_ref);

    let rows_affected = connection.execute(
        "UPDATE medicamento SET
            nombre = COALESCE(?1, nombre),
            precio = COALESCE(?2, precio),
            stock = COALESCE(?3, stock),
            categoria_id = COALESCE(?4, categoria_id)
        WHERE id = ?5",
        (
            name,
            patch.price.map(Price::value),
            patch.stock.map(Stock::value),
            patch.category_id,
            medication_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingMedication);
    }

    get_medication_record(medication_id, connection)
}

/// Delete a medication and return it as it was before deletion.
///
/// # Errors
/// This function will return an [Error::DeleteMissingMedication] if the
/// medication does not exist, or an error if there is an SQL error.
pub fn delete_medication(
    medication_id: MedicationId,
    connection: &Connection,
) -> Result<Medication, Error> {
    let medication =
        get_medication_record(medication_id, connection).map_err(|error| match error {
            Error::NotFound => Error::DeleteMissingMedication,
            error => error,
        })?;

    let rows_affected =
        connection.execute("DELETE FROM medicamento WHERE id = ?1", [medication_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingMedication);
    }

    Ok(medication)
}

fn get_medication_record(
    medication_id: MedicationId,
    connection: &Connection,
) -> Result<Medication, Error> {
    connection
        .prepare(
            "SELECT id, nombre, precio, stock, categoria_id FROM medicamento WHERE id = :id;",
        )?
        .query_row(&[(":id", &medication_id)], map_row)
        .map_err(|error| error.into())
}

pub fn create_medication_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS medicamento (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            precio REAL NOT NULL CHECK (precio > 0),
            stock INTEGER NOT NULL CHECK (stock >= 0),
            categoria_id INTEGER NOT NULL REFERENCES categoria(id)
        );

        CREATE INDEX IF NOT EXISTS idx_medicamento_categoria_id ON medicamento(categoria_id);",
    )
}

fn map_row(row: &Row) -> Result<Medication, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let price = row.get(2)?;
    let stock = row.get(3)?;
    let category_id = row.get(4)?;

    Ok(Medication {
        id,
        name: Name::new_unchecked(&raw_name),
        price: Price::new_unchecked(price),
        stock: Stock::new_unchecked(stock),
        category_id,
    })
}

fn map_row_with_category(row: &Row) -> Result<MedicationWithCategory, rusqlite::Error> {
    let medication = map_row(row)?;
    let raw_category_name: String = row.get(5)?;

    Ok(MedicationWithCategory {
        category: Category {
            id: medication.category_id,
            name: Name::new_unchecked(&raw_category_name),
        },
        medication,
    })
}
