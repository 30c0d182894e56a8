use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    columns::{sort_rows, SortParams, SortState, CRIME_COLUMNS},
    loaders::{load_area, AreaParams},
    models::{CrimeData, RadiusSearchResult},
    templates::{area_page, area_table, AreaView},
    AppState,
};

/// Handler for the area page (GET /area?lat&lng&radius&year)
pub async fn area_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AreaParams>,
    Query(sort): Query<SortParams>,
) -> Html<String> {
    let view = build_area_view(&state, &params, &sort).await;
    Html(area_page(&params, &view).into_string())
}

/// Handler for the sorted area table (GET /fragments/area-table)
pub async fn area_table_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AreaParams>,
    Query(sort): Query<SortParams>,
) -> Html<String> {
    let view = build_area_view(&state, &params, &sort).await;
    Html(area_table(&params, &view.rows, view.sort).into_string())
}

/// Runs the radius loader and turns its result into sorted table rows
pub async fn build_area_view(
    state: &Arc<AppState>,
    params: &AreaParams,
    sort: &SortParams,
) -> AreaView {
    let sort = SortState::from_params(sort, &CRIME_COLUMNS);
    let search = load_area(state.crime_api.as_ref(), params).await;
    let result = search
        .as_ref()
        .and_then(|s| RadiusSearchResult::from_value(&s.result));

    let mut rows: Vec<CrimeData> = result
        .as_ref()
        .map(|r| r.crimes.iter().map(CrimeData::from).collect())
        .unwrap_or_default();
    sort_rows(&mut rows, sort);

    AreaView {
        search,
        result,
        rows,
        sort,
    }
}
