//! The form shared by the create and edit category pages.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, FORM_CARD_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_ERROR_STYLE, FORM_TEXT_INPUT_STYLE, required_marker, submit_button,
    },
};

/// Where a category form is submitted.
pub(super) enum CategoryFormAction<'a> {
    Create,
    Update(&'a str),
}

pub(super) fn category_form_view(
    action: &CategoryFormAction,
    nombre: &str,
    error_message: Option<&str>,
) -> Markup {
    let (hx_post, hx_put, submit_label) = match action {
        CategoryFormAction::Create => (Some(endpoints::CATEGORIES_VIEW), None, "Crear categoría"),
        CategoryFormAction::Update(url) => (None, Some(*url), "Guardar cambios"),
    };
    let input_style = if error_message.is_some() {
        FORM_TEXT_INPUT_ERROR_STYLE
    } else {
        FORM_TEXT_INPUT_STYLE
    };

    html! {
        form
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class=(FORM_CARD_STYLE)
        {
            div class="mb-6"
            {
                label for="nombre" class=(FORM_LABEL_STYLE)
                {
                    "Nombre" (required_marker())
                }

                input
                    id="nombre"
                    type="text"
                    name="nombre"
                    value=(nombre)
                    placeholder="Ej: Analgésicos"
                    required
                    autofocus
                    class=(input_style);

                @if let Some(error_message) = error_message {
                    p id="nombre-error" class=(FORM_ERROR_STYLE) { (error_message) }
                }
            }

            div class="flex justify-end gap-4"
            {
                a href=(endpoints::CATEGORIES_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Cancelar" }

                (submit_button(submit_label))
            }
        }
    }
}
