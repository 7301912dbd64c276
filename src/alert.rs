//! Alert messages that are swapped into the page's alert container when a
//! form or delete request fails.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// An error message with optional details, rendered as a dismissable banner.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorAlert<'a> {
    message: &'a str,
    details: &'a str,
}

impl<'a> ErrorAlert<'a> {
    pub fn new(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start p-4 mb-4 text-sm text-red-800 rounded-lg
                    bg-red-50 border border-red-300 shadow-lg
                    dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="mt-1" { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Cerrar"
                    onclick="this.parentElement.remove()"
                    class="ms-3 -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex h-8 w-8
                        items-center justify-center text-red-500 hover:bg-red-200
                        dark:hover:bg-gray-700"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for ErrorAlert<'_> {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
