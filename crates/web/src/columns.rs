//! Column definitions and sorting for the crime tables.
//!
//! Columns are declared statically; sorting happens on the server and the
//! header links carry the next sort state, cycling
//! unsorted -> ascending -> descending -> unsorted per column.

use std::cmp::Ordering;

use serde::Deserialize;

/// One sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field the column reads from a row
    pub key: &'static str,
    /// Header text
    pub header: &'static str,
}

const fn column(key: &'static str, header: &'static str) -> ColumnDef {
    ColumnDef { key, header }
}

/// Columns of the area (radius search) table, in display order
pub const CRIME_COLUMNS: [ColumnDef; 10] = [
    column("distance", "Distance"),
    column("crimeCategory", "Crime Category"),
    column("neighborhood", "Neighborhood"),
    column("street", "Street"),
    column("city", "City"),
    column("zip", "Zip Code"),
    column("latitude", "Latitude"),
    column("longitude", "Longitude"),
    column("date", "Date"),
    column("time", "Time"),
];

/// Columns of the crimes dump table
pub const DUMP_COLUMNS: [ColumnDef; 11] = [
    column("case", "Case"),
    column("crimeCategory", "Crime Category"),
    column("neighborhood", "Neighborhood"),
    column("street", "Street"),
    column("city", "City"),
    column("zip", "Zip Code"),
    column("latitude", "Latitude"),
    column("longitude", "Longitude"),
    column("date", "Date"),
    column("time", "Time"),
    column("source", "Source"),
];

/// A row that can be rendered and sorted by column key
pub trait TableRow {
    /// Text of the cell for `key`, `None` when the value is null or the key is unknown
    fn cell(&self, key: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// Sort parameters as they arrive in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortParams {
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl SortState {
    /// Resolves query parameters against `columns`; unknown keys mean unsorted.
    pub fn from_params(params: &SortParams, columns: &[ColumnDef]) -> Option<SortState> {
        let requested = params.sort.as_deref()?;
        let column = columns.iter().find(|c| c.key == requested)?;
        let direction = match params.dir.as_deref() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Some(SortState {
            key: column.key,
            direction,
        })
    }

    /// Query string fragment for this state, e.g. `sort=date&dir=desc`
    pub fn to_query(&self) -> String {
        format!("sort={}&dir={}", self.key, self.direction.as_str())
    }
}

/// State reached by clicking the header of `column` while `current` is active
pub fn toggle_sort(current: Option<SortState>, column: &ColumnDef) -> Option<SortState> {
    match current {
        Some(state) if state.key == column.key => match state.direction {
            SortDirection::Asc => Some(SortState {
                key: column.key,
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortState {
            key: column.key,
            direction: SortDirection::Asc,
        }),
    }
}

/// Stable sort of `rows` by `state`; missing values always go last.
pub fn sort_rows<T: TableRow>(rows: &mut [T], state: Option<SortState>) {
    let Some(state) = state else {
        return;
    };

    rows.sort_by(|a, b| match (a.cell(state.key), b.cell(state.key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ordering = compare_values(x, y);
            match state.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    });
}

fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
