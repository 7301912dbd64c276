//! Categories listing page.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    category::{Category, CategoryState, get_all_categories},
    db::lock_connection,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, edit_delete_action_links,
    },
    navigation::NavBar,
    search::{SearchQuery, contains_ignore_case, search_box},
};

const TABLE_CONTAINER_ID: &str = "category-table";

/// Render the categories listing page, filtered by the `buscar` query parameter.
pub async fn get_categories_page(
    State(state): State<CategoryState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;
    let total = categories.len();
    let categories = filter_categories(categories, query.term());

    Ok(categories_view(&categories, total, query.term()).into_response())
}

/// Keep the categories whose name contains `term`, ignoring case, or whose
/// ID contains `term` as a decimal substring.
fn filter_categories(categories: Vec<Category>, term: &str) -> Vec<Category> {
    if term.is_empty() {
        return categories;
    }

    categories
        .into_iter()
        .filter(|category| {
            contains_ignore_case(category.name.as_ref(), term)
                || category.id.to_string().contains(term)
        })
        .collect()
}

fn categories_view(categories: &[Category], total: usize, term: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();

    let table_row = |category: &Category| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_CATEGORY_VIEW, category.id);
        let delete_url = endpoints::format_endpoint(endpoints::CATEGORY, category.id);

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (category.id) }
                td class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
                {
                    (category.name)
                }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        (edit_delete_action_links(
                            &edit_url,
                            &delete_url,
                            "¿Estás seguro de eliminar esta categoría?",
                        ))
                    }
                }
            }
        )
    };

    let empty_message = if total == 0 {
        "No hay categorías registradas"
    } else {
        "No se encontraron categorías con ese criterio"
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-2xl font-bold" { "Categorías" }

                    a href=(endpoints::NEW_CATEGORY_VIEW) class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Nueva categoría"
                    }
                }

                div class="max-w-md"
                {
                    (search_box(
                        endpoints::CATEGORIES_VIEW,
                        term,
                        TABLE_CONTAINER_ID,
                        "Buscar por nombre o ID",
                    ))
                }

                div id=(TABLE_CONTAINER_ID) class="overflow-x-auto shadow rounded-lg"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Nombre" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Acciones" }
                            }
                        }

                        tbody
                        {
                            @for category in categories {
                                (table_row(category))
                            }

                            @if categories.is_empty() {
                                tr
                                {
                                    td
                                        colspan="3"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        (empty_message)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Categorías", &content)
}
