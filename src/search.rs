//! The search box shared by the list pages and the matching helpers behind it.

use maud::{Markup, html};
use serde::Deserialize;

use crate::html::FORM_TEXT_INPUT_STYLE;

/// The query string for a list page, e.g. `/medicamentos?buscar=parac`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub buscar: String,
}

impl SearchQuery {
    /// The search term with surrounding whitespace removed.
    pub fn term(&self) -> &str {
        self.buscar.trim()
    }
}

/// Whether `haystack` contains `needle`, ignoring case.
///
/// An empty `needle` matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A text input that reloads the list at `endpoint` as the user types.
///
/// Only the element with the ID `target_id` is swapped, and the search term
/// is pushed to the URL so a reload keeps the filter.
pub fn search_box(endpoint: &str, term: &str, target_id: &str, placeholder: &str) -> Markup {
    let target = format!("#{target_id}");

    html! {
        input
            type="search"
            name="buscar"
            value=(term)
            placeholder=(placeholder)
            aria-label=(placeholder)
            hx-get=(endpoint)
            hx-trigger="input changed delay:300ms, search"
            hx-target=(target)
            hx-select=(target)
            hx-swap="outerHTML"
            hx-push-url="true"
            class=(FORM_TEXT_INPUT_STYLE);
    }
}
