//! The landing page with a card for each section of the app.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

fn section_card(url: &str, title: &str, description: &str) -> Markup {
    html! {
        a
            href=(url)
            class="block p-6 bg-white border border-gray-200 rounded-lg shadow
                hover:bg-gray-100 dark:bg-gray-800 dark:border-gray-700
                dark:hover:bg-gray-700"
        {
            h2 class="mb-2 text-2xl font-bold tracking-tight text-gray-900 dark:text-white"
            {
                (title)
            }
            p class="font-normal text-gray-700 dark:text-gray-400" { (description) }
        }
    }
}

fn home_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-2" { "Gestión Farmacéutica" }
            p class="mb-8 text-gray-600 dark:text-gray-400"
            {
                "Administra el inventario de medicamentos y sus categorías."
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-6"
            {
                (section_card(
                    endpoints::MEDICATIONS_VIEW,
                    "Medicamentos",
                    "Consulta, registra y actualiza los medicamentos, su precio y su stock.",
                ))
                (section_card(
                    endpoints::CATEGORIES_VIEW,
                    "Categorías",
                    "Organiza los medicamentos en categorías.",
                ))
            }
        }
    };

    base("Inicio", &content)
}

pub async fn get_home_page() -> Response {
    home_view().into_response()
}
