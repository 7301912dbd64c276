use maud::{DOCTYPE, Markup, html};
use time::OffsetDateTime;

// Link styles
pub const LINK_STYLE: &str = "text-indigo-600 hover:text-indigo-500 \
    dark:text-indigo-400 dark:hover:text-indigo-300 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "inline-flex items-center justify-center \
    px-4 py-2 bg-indigo-600 disabled:opacity-50 disabled:cursor-not-allowed \
    hover:enabled:bg-indigo-700 text-white text-sm font-medium rounded-md";

pub const BUTTON_SECONDARY_STYLE: &str = "inline-flex items-center justify-center \
    px-4 py-2 text-sm font-medium text-gray-700 bg-white rounded-md \
    border border-gray-300 hover:bg-gray-50 dark:bg-gray-800 \
    dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-900 \
    dark:text-red-500 dark:hover:text-red-400 bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col px-6 py-8 mx-auto \
    w-full max-w-3xl text-gray-900 dark:text-white";
pub const FORM_CARD_STYLE: &str = "bg-white dark:bg-gray-800 shadow rounded-lg p-6";
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-gray-700 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full px-4 py-2 rounded-md text-sm \
    text-gray-900 dark:text-white bg-white dark:bg-gray-700 \
    border border-gray-300 dark:border-gray-600 \
    focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500";
pub const FORM_TEXT_INPUT_ERROR_STYLE: &str = "block w-full px-4 py-2 rounded-md text-sm \
    text-gray-900 dark:text-white bg-white dark:bg-gray-700 \
    border border-red-500 \
    focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500";
pub const FORM_ERROR_STYLE: &str = "mt-1 text-sm text-red-600 dark:text-red-400";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-500 uppercase tracking-wider \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str =
    "bg-white border-b hover:bg-gray-50 dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4 whitespace-nowrap";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-4 py-8 mx-auto max-w-7xl text-gray-900 dark:text-white";

/// The label shown next to every required form field.
pub fn required_marker() -> Markup {
    html!( span class="text-red-500" { " *" } )
}

pub fn base(title: &str, content: &Markup) -> Markup {
    let year = OffsetDateTime::now_utc().year();

    html! {
        (DOCTYPE)
        html lang="es"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Gestión de farmacia";
                title { (title) " - FarmaciaApp" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900"
            {
                (content)

                footer class="mt-auto bg-white dark:bg-gray-800 border-t border-gray-200 dark:border-gray-700 py-4"
                {
                    p class="text-center text-sm text-gray-500 dark:text-gray-400"
                    {
                        "© " (year) " Farmacia App - Todos los derechos reservados"
                    }
                }

                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-indigo-600 dark:text-indigo-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-indigo-600
                            hover:bg-indigo-800 focus:ring-4 focus:outline-hidden
                            focus:ring-indigo-300 font-medium rounded text-sm px-5
                            py-2.5 text-center my-4"
                    {
                        "Volver al inicio"
                    }
                }
            }
        }
    );

    base(title, &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// A submit button that shows a spinner and is disabled while its form's
/// request is in flight.
///
/// The owning form must set `hx-indicator="#indicator"` and
/// `hx-disabled-elt="#submit-button"`.
pub fn submit_button(label: &str) -> Markup {
    html! {
        button
            type="submit"
            id="submit-button"
            class=(BUTTON_PRIMARY_STYLE)
        {
            span class="inline htmx-indicator" id="indicator"
            {
                (loading_spinner())
            }
            (label)
        }
    }
}

/// Format a price in Peruvian soles with two decimal places, e.g. "S/ 5.50".
pub fn format_price(price: f64) -> String {
    format!("S/ {price:.2}")
}

/// The "edit" link and "delete" button shown for each row of a list.
///
/// The delete button asks for confirmation with `confirm_message` before
/// sending the request. Errors are rendered into the alert container.
pub fn edit_delete_action_links(edit_url: &str, delete_url: &str, confirm_message: &str) -> Markup {
    html! {
        a href=(edit_url) class="text-indigo-600 hover:text-indigo-900 dark:text-indigo-400"
        {
            "Editar"
        }

        button
            type="button"
            hx-delete=(delete_url)
            hx-confirm=(confirm_message)
            hx-target-error="#alert-container"
            hx-swap="none"
            class=(BUTTON_DELETE_STYLE)
        {
            "Eliminar"
        }
    }
}

#[cfg(test)]
mod format_price_tests {
    use super::format_price;

    #[test]
    fn pads_to_two_decimal_places() {
        assert_eq!(format_price(5.5), "S/ 5.50");
        assert_eq!(format_price(12.0), "S/ 12.00");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(format_price(0.999), "S/ 1.00");
    }
}
