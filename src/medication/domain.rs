//! Core medication domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, CategoryId},
    database_id::DatabaseId,
    name::Name,
};

/// Database identifier for a medication.
pub type MedicationId = DatabaseId;

/// The unit price of a medication. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a price.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NonPositivePrice] if `value` is
    /// zero, negative, infinite or NaN.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::NonPositivePrice(value))
        }
    }

    /// Create a price without validation.
    ///
    /// The caller should ensure that `value` is finite and positive, e.g. because
    /// it was read back from the database where a `CHECK` constraint holds.
    pub fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// The number of units in stock. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Stock(i64);

impl Stock {
    /// Create a stock count.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NegativeStock] if `value` is below zero.
    pub fn new(value: i64) -> Result<Self, Error> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(Error::NegativeStock(value))
        }
    }

    /// Create a stock count without validation.
    pub fn new_unchecked(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Stock {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Stock::new(value)
    }
}

impl From<Stock> for i64 {
    fn from(stock: Stock) -> Self {
        stock.0
    }
}

impl Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A medication as stored, referencing its category by ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: MedicationId,
    #[serde(rename = "nombre")]
    pub name: Name,
    #[serde(rename = "precio")]
    pub price: Price,
    pub stock: Stock,
    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,
}

/// A medication together with the current state of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationWithCategory {
    #[serde(flatten)]
    pub medication: Medication,
    #[serde(rename = "categoria")]
    pub category: Category,
}

/// A validated medication that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedication {
    pub name: Name,
    pub price: Price,
    pub stock: Stock,
    pub category_id: CategoryId,
}

/// The fields to change on an existing medication. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationPatch {
    pub name: Option<Name>,
    pub price: Option<Price>,
    pub stock: Option<Stock>,
    pub category_id: Option<CategoryId>,
}

impl From<NewMedication> for MedicationPatch {
    fn from(medication: NewMedication) -> Self {
        Self {
            name: Some(medication.name),
            price: Some(medication.price),
            stock: Some(medication.stock),
            category_id: Some(medication.category_id),
        }
    }
}



#[cfg(test)]
mod medication_json_tests {
    use serde_json::json;

    use crate::{category::Category, name::Name};

    use super::{Medication, MedicationWithCategory, Price, Stock};

    fn paracetamol() -> Medication {
        Medication {
            id: 1,
            name: Name::new_unchecked("Paracetamol 500mg"),
            price: Price::new_unchecked(5.5),
            stock: Stock::new_unchecked(100),
            category_id: 2,
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        assert_eq!(
            serde_json::to_value(paracetamol()).unwrap(),
            json!({
                "id": 1,
                "nombre": "Paracetamol 500mg",
                "precio": 5.5,
                "stock": 100,
                "categoriaId": 2,
            })
        );
    }

    #[test]
    fn embeds_category() {
        let medication = MedicationWithCategory {
            medication: paracetamol(),
            category: Category {
                id: 2,
                name: Name::new_unchecked("Analgésicos"),
            },
        };

        assert_eq!(
            serde_json::to_value(medication).unwrap(),
            json!({
                "id": 1,
                "nombre": "Paracetamol 500mg",
                "precio": 5.5,
                "stock": 100,
                "categoriaId": 2,
                "categoria": {"id": 2, "nombre": "Analgésicos"},
            })
        );
    }
}
