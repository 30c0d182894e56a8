use maud::{html, Markup};

use crate::{
    columns::{SortState, CRIME_COLUMNS},
    loaders::{AreaParams, InitialSearch},
    models::{CrimeData, RadiusSearchResult},
    templates::{
        components::search_form,
        fragments::{no_search, search_summary, sortable_table, TableConfig},
        layouts::{base, CurrentPage, PageConfig},
    },
};

/// Everything the area page needs after the radius loader ran
#[derive(Debug, Clone, Default)]
pub struct AreaView {
    pub search: Option<InitialSearch>,
    /// Typed view of `search.result`, `None` when the body is not a radius search
    pub result: Option<RadiusSearchResult>,
    /// Already sorted
    pub rows: Vec<CrimeData>,
    pub sort: Option<SortState>,
}

/// Area page - search form prefilled from the query, summary and crime table
pub fn area_page(params: &AreaParams, view: &AreaView) -> Markup {
    let config = PageConfig {
        title: "Crime Map - Area Search",
        current_page: CurrentPage::Area,
    };

    base(
        &config,
        html! {
            (search_form(params))
            (area_content(params, view))
        },
    )
}

fn area_content(params: &AreaParams, view: &AreaView) -> Markup {
    html! {
        @match (&view.search, params.radius_query()) {
            (Some(search), _) => {
                (search_summary(search, view.result.as_ref()))
                @if view.result.is_some() {
                    (area_table(params, &view.rows, view.sort))
                }
            },
            (None, Some(_)) => {
                div class="notification is-warning is-light" {
                    "No results. The crime API could not complete this search."
                }
            },
            (None, None) => (no_search()),
        }
    }
}

/// Area crime table - full page or HTMX partial
pub fn area_table(params: &AreaParams, rows: &[CrimeData], sort: Option<SortState>) -> Markup {
    let base_query = params.to_query();
    let config = TableConfig {
        id: "area-table",
        page_url: "/area",
        fragment_url: "/fragments/area-table",
        base_query: &base_query,
        empty_message: "No crimes found in this area",
    };

    sortable_table(&config, &CRIME_COLUMNS, rows, sort)
}
