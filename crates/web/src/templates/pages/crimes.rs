use maud::{html, Markup};

use crate::{
    columns::{SortState, DUMP_COLUMNS},
    models::DumpRow,
    templates::{
        fragments::{sortable_table, TableConfig},
        layouts::{base, CurrentPage, PageConfig},
    },
};

/// Crimes page - every detail record the backend returned
pub fn crimes_page(rows: &[DumpRow], sort: Option<SortState>) -> Markup {
    let config = PageConfig {
        title: "Crime Map - Crimes",
        current_page: CurrentPage::Crimes,
    };

    base(
        &config,
        html! {
            h1 class="title" { "Crimes" }
            (crimes_table(rows, sort))
        },
    )
}

/// Crimes table - full page or HTMX partial
pub fn crimes_table(rows: &[DumpRow], sort: Option<SortState>) -> Markup {
    let config = TableConfig {
        id: "crimes-table",
        page_url: "/crimes",
        fragment_url: "/fragments/crimes-table",
        base_query: "",
        empty_message: "No crimes found",
    };

    sortable_table(&config, &DUMP_COLUMNS, rows, sort)
}
