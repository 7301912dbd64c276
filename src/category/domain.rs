//! Core category domain types.

use serde::{Deserialize, Serialize};

use crate::{database_id::DatabaseId, name::Name};

/// Database identifier for a category.
pub type CategoryId = DatabaseId;

/// A category for grouping medications, e.g. 'Analgésicos', 'Antibióticos'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "nombre")]
    pub name: Name,
}

/// A validated category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: Name,
}

/// The fields to change on an existing category. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<Name>,
}

/// Form data for category creation and editing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryFormData {
    #[serde(default)]
    pub nombre: String,
}

#[cfg(test)]
mod category_json_tests {
    use serde_json::json;

    use crate::name::Name;

    use super::Category;

    #[test]
    fn serializes_with_wire_names() {
        let category = Category {
            id: 3,
            name: Name::new_unchecked("Analgésicos"),
        };

        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            json!({"id": 3, "nombre": "Analgésicos"})
        );
    }
}
