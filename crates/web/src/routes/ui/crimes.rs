use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;

use crate::{
    columns::{sort_rows, SortParams, SortState, DUMP_COLUMNS},
    loaders::{load_crimes, LoadError},
    models::DumpRow,
    templates::{crimes_page, crimes_table, error_page, CurrentPage},
    AppState,
};

/// Handler for the crimes page (GET /crimes)
pub async fn crimes_handler(
    State(state): State<Arc<AppState>>,
    Query(sort): Query<SortParams>,
) -> Response {
    let sort = SortState::from_params(&sort, &DUMP_COLUMNS);
    match sorted_rows(&state, sort).await {
        Ok(rows) => Html(crimes_page(&rows, sort).into_string()).into_response(),
        Err(e) => load_failed(e),
    }
}

/// Handler for the sorted crimes table (GET /fragments/crimes-table)
pub async fn crimes_table_handler(
    State(state): State<Arc<AppState>>,
    Query(sort): Query<SortParams>,
) -> Response {
    let sort = SortState::from_params(&sort, &DUMP_COLUMNS);
    match sorted_rows(&state, sort).await {
        Ok(rows) => Html(crimes_table(&rows, sort).into_string()).into_response(),
        Err(e) => load_failed(e),
    }
}

async fn sorted_rows(
    state: &Arc<AppState>,
    sort: Option<SortState>,
) -> Result<Vec<DumpRow>, LoadError> {
    let crimes = load_crimes(state.crime_api.as_ref(), state.details_limit).await?;
    let mut rows: Vec<DumpRow> = crimes.iter().map(DumpRow::from).collect();
    sort_rows(&mut rows, sort);
    Ok(rows)
}

fn load_failed(e: LoadError) -> Response {
    error!("{}", e);
    (
        StatusCode::BAD_GATEWAY,
        Html(error_page(CurrentPage::Crimes, &e.to_string()).into_string()),
    )
        .into_response()
}
