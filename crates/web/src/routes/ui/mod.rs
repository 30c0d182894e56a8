mod about;
mod area;
mod crimes;
mod home;
mod not_found;

pub use about::{about_handler, ping_fragment_handler};
pub use area::{area_handler, area_table_handler, build_area_view};
pub use crimes::{crimes_handler, crimes_table_handler};
pub use home::home_handler;
pub use not_found::not_found_handler;
