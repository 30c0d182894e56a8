pub mod about;
pub mod area;
pub mod crimes;
pub mod error;
pub mod home;

pub use about::about_page;
pub use area::{area_page, area_table, AreaView};
pub use crimes::{crimes_page, crimes_table};
pub use error::{error_page, not_found_page};
pub use home::home_page;
