//! Medications listing page.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    db::lock_connection,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, edit_delete_action_links, format_price,
    },
    medication::{MedicationState, MedicationWithCategory, Stock, get_all_medications},
    navigation::NavBar,
    search::{SearchQuery, contains_ignore_case, search_box},
};

const TABLE_CONTAINER_ID: &str = "medication-table";

/// Stock levels above this are shown as healthy.
const LOW_STOCK_THRESHOLD: i64 = 10;

const STOCK_OK_BADGE_STYLE: &str = "px-2 inline-flex text-xs leading-5 font-semibold \
    rounded-full bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300";
const STOCK_LOW_BADGE_STYLE: &str = "px-2 inline-flex text-xs leading-5 font-semibold \
    rounded-full bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300";

/// Render the medications listing page, filtered by the `buscar` query parameter.
pub async fn get_medications_page(
    State(state): State<MedicationState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let medications = get_all_medications(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve medications: {error}"))?;
    let total = medications.len();
    let medications = filter_medications(medications, query.term());

    Ok(medications_view(&medications, total, query.term()).into_response())
}

/// Keep the medications whose name or category name contains `term`, ignoring case.
fn filter_medications(
    medications: Vec<MedicationWithCategory>,
    term: &str,
) -> Vec<MedicationWithCategory> {
    medications
        .into_iter()
        .filter(|item| {
            contains_ignore_case(item.medication.name.as_ref(), term)
                || contains_ignore_case(item.category.name.as_ref(), term)
        })
        .collect()
}

fn stock_badge_style(stock: Stock) -> &'static str {
    if stock.value() > LOW_STOCK_THRESHOLD {
        STOCK_OK_BADGE_STYLE
    } else {
        STOCK_LOW_BADGE_STYLE
    }
}

fn medications_view(medications: &[MedicationWithCategory], total: usize, term: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::MEDICATIONS_VIEW).into_html();

    let table_row = |item: &MedicationWithCategory| {
        let medication = &item.medication;
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_MEDICATION_VIEW, medication.id);
        let delete_url = endpoints::format_endpoint(endpoints::MEDICATION, medication.id);

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    div class="font-medium text-gray-900 dark:text-white" { (medication.name) }
                    div class="text-xs text-gray-500" { "ID: " (medication.id) }
                }
                td class=(TABLE_CELL_STYLE) { (format_price(medication.price.value())) }
                td class=(TABLE_CELL_STYLE)
                {
                    span class=(stock_badge_style(medication.stock)) { (medication.stock) }
                }
                td class=(TABLE_CELL_STYLE) { (item.category.name) }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        (edit_delete_action_links(
                            &edit_url,
                            &delete_url,
                            "¿Estás seguro de eliminar este medicamento?",
                        ))
                    }
                }
            }
        )
    };

    let empty_message = if total == 0 {
        "No hay medicamentos registrados"
    } else {
        "No se encontraron medicamentos con ese criterio"
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-2xl font-bold" { "Medicamentos" }

                    a href=(endpoints::NEW_MEDICATION_VIEW) class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Nuevo medicamento"
                    }
                }

                div class="max-w-md"
                {
                    (search_box(
                        endpoints::MEDICATIONS_VIEW,
                        term,
                        TABLE_CONTAINER_ID,
                        "Buscar por nombre o categoría",
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
                                th scope="col" class=(TABLE_CELL_STYLE) { "Nombre" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Precio" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Stock" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Categoría" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Acciones" }
                            }
                        }

                        tbody
                        {
                            @for item in medications {
                                (table_row(item))
                            }

                            @if medications.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
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

    base("Medicamentos", &content)
}
