//! The medication form: its raw field values, their validation, and the
//! markup shared by the create and edit pages.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    database_id::parse_id,
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, FORM_CARD_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_ERROR_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, required_marker,
        submit_button,
    },
    medication::{Medication, NewMedication, Price, Stock},
    name::Name,
};

/// The raw values submitted by the medication form.
///
/// Every field is kept as text so that invalid input can be shown back to
/// the user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationFormData {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub precio: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub categoria_id: String,
}

/// One message per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationFormErrors {
    pub nombre: Option<&'static str>,
    pub precio: Option<&'static str>,
    pub stock: Option<&'static str>,
    pub categoria_id: Option<&'static str>,
}

impl MedicationFormData {
    /// The form filled in with a stored medication.
    pub fn from_medication(medication: &Medication) -> Self {
        Self {
            nombre: medication.name.to_string(),
            precio: medication.price.value().to_string(),
            stock: medication.stock.to_string(),
            categoria_id: medication.category_id.to_string(),
        }
    }

    /// Check every field and build a [NewMedication].
    ///
    /// The category must be one of `categories`, the list the form was
    /// rendered with.
    ///
    /// # Errors
    /// Returns the message for each invalid field if any field is invalid.
    pub fn validate(&self, categories: &[Category]) -> Result<NewMedication, MedicationFormErrors> {
        let name = Name::new(&self.nombre).map_err(|_| "El nombre es requerido");
        let price = parse_price(&self.precio);
        let stock = parse_stock(&self.stock);
        let category_id = parse_id(&self.categoria_id)
            .filter(|id| categories.iter().any(|category| category.id == *id))
            .ok_or("Debe seleccionar una categoría");

        match (name, price, stock, category_id) {
            (Ok(name), Ok(price), Ok(stock), Ok(category_id)) => Ok(NewMedication {
                name,
                price,
                stock,
                category_id,
            }),
            (name, price, stock, category_id) => Err(MedicationFormErrors {
                nombre: name.err(),
                precio: price.err(),
                stock: stock.err(),
                categoria_id: category_id.err(),
            }),
        }
    }
}

fn parse_price(raw_price: &str) -> Result<Price, &'static str> {
    let raw_price = raw_price.trim();

    if raw_price.is_empty() {
        return Err("El precio es requerido");
    }

    let value: f64 = raw_price
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or("El precio debe ser un número")?;

    Price::new(value).map_err(|_| "El precio debe ser mayor a 0")
}

fn parse_stock(raw_stock: &str) -> Result<Stock, &'static str> {
    let raw_stock = raw_stock.trim();

    if raw_stock.is_empty() {
        return Err("El stock es requerido");
    }

    let value: i64 = raw_stock
        .parse()
        .map_err(|_| "El stock debe ser un número entero")?;

    Stock::new(value).map_err(|_| "El stock no puede ser negativo")
}

/// Where a medication form is submitted.
pub(super) enum MedicationFormAction<'a> {
    Create,
    Update(&'a str),
}

fn input_style(error: Option<&str>) -> &'static str {
    if error.is_some() {
        FORM_TEXT_INPUT_ERROR_STYLE
    } else {
        FORM_TEXT_INPUT_STYLE
    }
}

fn field_error(name: &str, error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p id={(name) "-error"} class=(FORM_ERROR_STYLE) { (error) }
        }
    }
}

pub(super) fn medication_form_view(
    action: &MedicationFormAction,
    form_data: &MedicationFormData,
    errors: &MedicationFormErrors,
    categories: &[Category],
) -> Markup {
    let (hx_post, hx_put, submit_label) = match action {
        MedicationFormAction::Create => {
            (Some(endpoints::MEDICATIONS_VIEW), None, "Crear medicamento")
        }
        MedicationFormAction::Update(url) => (None, Some(*url), "Guardar cambios"),
    };

    html! {
        form
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class={(FORM_CARD_STYLE) " space-y-6"}
        {
            div
            {
                label for="nombre" class=(FORM_LABEL_STYLE)
                {
                    "Nombre" (required_marker())
                }

                input
                    id="nombre"
                    type="text"
                    name="nombre"
                    value=(form_data.nombre)
                    placeholder="Ej: Paracetamol 500mg"
                    required
                    autofocus
                    class=(input_style(errors.nombre));

                (field_error("nombre", errors.nombre))
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-6"
            {
                div
                {
                    label for="precio" class=(FORM_LABEL_STYLE)
                    {
                        "Precio (S/)" (required_marker())
                    }

                    input
                        id="precio"
                        type="number"
                        name="precio"
                        value=(form_data.precio)
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        required
                        class=(input_style(errors.precio));

                    (field_error("precio", errors.precio))
                }

                div
                {
                    label for="stock" class=(FORM_LABEL_STYLE)
                    {
                        "Stock" (required_marker())
                    }

                    input
                        id="stock"
                        type="number"
                        name="stock"
                        value=(form_data.stock)
                        placeholder="0"
                        step="1"
                        min="0"
                        required
                        class=(input_style(errors.stock));

                    (field_error("stock", errors.stock))
                }
            }

            div
            {
                label for="categoria_id" class=(FORM_LABEL_STYLE)
                {
                    "Categoría" (required_marker())
                }

                select
                    id="categoria_id"
                    name="categoria_id"
                    required
                    class=(input_style(errors.categoria_id))
                {
                    option value="" { "Seleccione una categoría" }

                    @for category in categories {
                        @let value = category.id.to_string();
                        option
                            value=(value)
                            selected[value == form_data.categoria_id.trim()]
                        {
                            (category.name)
                        }
                    }
                }

                (field_error("categoria_id", errors.categoria_id))

                @if categories.is_empty() {
                    p class="mt-1 text-sm text-gray-500 dark:text-gray-400"
                    {
                        "No hay categorías registradas. "
                        a href=(endpoints::NEW_CATEGORY_VIEW) class=(LINK_STYLE)
                        {
                            "Crea una categoría primero."
                        }
                    }
                }
            }

            div class="flex justify-end gap-4"
            {
                a href=(endpoints::MEDICATIONS_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Cancelar" }

                (submit_button(submit_label))
            }
        }
    }
}

#[cfg(test)]
mod validate_tests {
    use crate::{
        category::Category,
        medication::{NewMedication, Price, Stock},
        name::Name,
    };

    use super::{MedicationFormData, MedicationFormErrors};

    fn categories() -> Vec<Category> {
        vec![Category {
            id: 1,
            name: Name::new_unchecked("Analgésicos"),
        }]
    }

    fn valid_form() -> MedicationFormData {
        MedicationFormData {
            nombre: "Paracetamol 500mg".to_owned(),
            precio: "5.50".to_owned(),
            stock: "100".to_owned(),
            categoria_id: "1".to_owned(),
        }
    }

    #[test]
    fn valid_form_builds_medication() {
        let got = valid_form().validate(&categories());

        assert_eq!(
            got,
            Ok(NewMedication {
                name: Name::new_unchecked("Paracetamol 500mg"),
                price: Price::new_unchecked(5.5),
                stock: Stock::new_unchecked(100),
                category_id: 1,
            })
        );
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let got = MedicationFormData::default().validate(&categories());

        assert_eq!(
            got,
            Err(MedicationFormErrors {
                nombre: Some("El nombre es requerido"),
                precio: Some("El precio es requerido"),
                stock: Some("El stock es requerido"),
                categoria_id: Some("Debe seleccionar una categoría"),
            })
        );
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let form = MedicationFormData {
            precio: "cinco".to_owned(),
            stock: "1.5".to_owned(),
            ..valid_form()
        };

        let errors = form.validate(&categories()).unwrap_err();

        assert_eq!(errors.precio, Some("El precio debe ser un número"));
        assert_eq!(errors.stock, Some("El stock debe ser un número entero"));
        assert_eq!(errors.nombre, None);
        assert_eq!(errors.categoria_id, None);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let form = MedicationFormData {
            precio: "0".to_owned(),
            stock: "-1".to_owned(),
            ..valid_form()
        };

        let errors = form.validate(&categories()).unwrap_err();

        assert_eq!(errors.precio, Some("El precio debe ser mayor a 0"));
        assert_eq!(errors.stock, Some("El stock no puede ser negativo"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let form = MedicationFormData {
            categoria_id: "42".to_owned(),
            ..valid_form()
        };

        let errors = form.validate(&categories()).unwrap_err();

        assert_eq!(errors.categoria_id, Some("Debe seleccionar una categoría"));
    }
}
