mod crime_table;
mod ping_status;
mod search_summary;

pub use crime_table::{sortable_table, TableConfig};
pub use ping_status::ping_status;
pub use search_summary::{no_search, search_summary};
