mod crime;
mod strict;
mod table;

pub use crime::{
    Crime, CrimeDump, CrimeDumpResponse, CrimeWithDistance, CrimesResponse, PingResponse,
    RadiusCenter, RadiusSearchResult,
};
pub use strict::{CrimeType, Neighborhood, StrictCrime, StrictCrimesResponse, UnknownValue};
pub use table::{CrimeData, DumpRow};
