mod navbar;
mod search_form;

pub use navbar::navbar;
pub use search_form::search_form;
