pub mod api;
pub mod columns;
pub mod loaders;
pub mod models;
pub mod proxy;
mod routes;
mod startup;
pub mod templates;
mod utils;

pub use api::{ApiError, CrimeApi, HttpCrimeApi, RadiusQuery};
pub use loaders::{AreaParams, InitialSearch, PingFailure, PingState};
pub use models::*;
pub use routes::*;
pub use startup::*;
pub use utils::*;
