use maud::{html, Markup};

use crate::columns::{toggle_sort, ColumnDef, SortDirection, SortState, TableRow};

/// Where a sortable table lives and how its header links are built
pub struct TableConfig<'a> {
    /// Element id, replaced wholesale when a header is clicked
    pub id: &'a str,
    /// Full page route, used for plain links and pushed history entries
    pub page_url: &'a str,
    /// Fragment route returning just this table
    pub fragment_url: &'a str,
    /// Query parameters that must survive a re-sort (already encoded)
    pub base_query: &'a str,
    pub empty_message: &'a str,
}

/// Sortable table fragment
/// Header clicks re-request the table with the next sort state
pub fn sortable_table<T: TableRow>(
    config: &TableConfig,
    columns: &[ColumnDef],
    rows: &[T],
    sort: Option<SortState>,
) -> Markup {
    html! {
        div id=(config.id) class="crime-table" {
            @if rows.is_empty() {
                div class="has-text-centered has-text-grey py-6" {
                    p class="is-size-5" { (config.empty_message) }
                }
            } @else {
                p class="is-size-7 has-text-grey mb-2" { (rows.len()) " records" }
                div class="table-container" {
                    table class="table is-fullwidth is-striped is-hoverable is-narrow" {
                        thead {
                            tr {
                                @for column in columns {
                                    (header_cell(config, column, sort))
                                }
                            }
                        }
                        tbody {
                            @for row in rows {
                                tr {
                                    @for column in columns {
                                        td {
                                            @if let Some(value) = row.cell(column.key) {
                                                (value)
                                            } @else {
                                                span class="has-text-grey" { "-" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_cell(config: &TableConfig, column: &ColumnDef, sort: Option<SortState>) -> Markup {
    let active = sort.filter(|s| s.key == column.key);
    let next = toggle_sort(sort, column).map(|s| s.to_query());
    let query = join_query(config.base_query, next.as_deref().unwrap_or_default());
    let page_href = with_query(config.page_url, &query);

    html! {
        th aria-sort=(aria_sort(active)) {
            a class="sort-button"
              href=(page_href)
              hx-get=(with_query(config.fragment_url, &query))
              hx-target=(format!("#{}", config.id))
              hx-swap="outerHTML"
              hx-push-url=(page_href) {
                (column.header)
                @match active.map(|s| s.direction) {
                    Some(SortDirection::Asc) => span class="sort-indicator" { " ▲" },
                    Some(SortDirection::Desc) => span class="sort-indicator" { " ▼" },
                    None => {},
                }
            }
        }
    }
}

fn aria_sort(active: Option<SortState>) -> &'static str {
    match active.map(|s| s.direction) {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}

fn join_query(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{}&{}", a, b),
    }
}

fn with_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    }
}
