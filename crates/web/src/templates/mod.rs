pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::ping_status;
pub use layouts::{CurrentPage, PageConfig};
pub use pages::{
    about_page, area_page, area_table, crimes_page, crimes_table, error_page, home_page,
    not_found_page, AreaView,
};
