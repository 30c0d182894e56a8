use serde::{Deserialize, Deserializer, Serialize};

/// Lists the crime API leaves empty arrive as `null`, not `[]`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Loosely typed crime record, every category field is a plain string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crime {
    pub address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub crime_type: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimesResponse {
    pub crimes: Vec<Crime>,
    pub count: usize,
}

impl CrimesResponse {
    /// The backend reports `count` separately from `crimes`; nothing forces them to agree.
    pub fn count_matches(&self) -> bool {
        self.count == self.crimes.len()
    }
}

/// Detail record returned by `/api/public/crimes/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeDump {
    #[serde(default)]
    pub case: String,
    pub crime_category: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrimeDumpResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub crimes: Vec<CrimeDump>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Radius search record, a detail record plus its distance from the search center in miles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeWithDistance {
    #[serde(flatten)]
    pub crime: CrimeDump,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusCenter {
    pub latitude: f64,
    pub longitude: f64,
}

/// Typed view over the radius endpoint's body.
///
/// The loader hands the body to the page untouched; this view is only
/// taken when the page wants table rows out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusSearchResult {
    pub center: RadiusCenter,
    pub radius_miles: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub crimes: Vec<CrimeWithDistance>,
    #[serde(default)]
    pub count: usize,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub year: Vec<String>,
}

impl RadiusSearchResult {
    /// Returns `None` when the body is not shaped like a radius search response.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Body of `GET /api/ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub code: u16,
    pub message: String,
}
