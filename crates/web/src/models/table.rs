use serde::Serialize;

use super::{CrimeDump, CrimeWithDistance};
use crate::columns::TableRow;

/// Area table row: a radius search record with every value pre-formatted as text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeData {
    pub distance: String,
    pub crime_category: String,
    pub neighborhood: Option<String>,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub latitude: String,
    pub longitude: String,
    pub date: String,
    pub time: String,
}

impl From<&CrimeWithDistance> for CrimeData {
    fn from(value: &CrimeWithDistance) -> Self {
        let crime = &value.crime;
        CrimeData {
            distance: format!("{:.2}", value.distance),
            crime_category: crime.crime_category.clone(),
            neighborhood: crime.neighborhood.clone().filter(|n| !n.is_empty()),
            street: crime.street.clone(),
            city: crime.city.clone(),
            zip: crime.zip.clone(),
            latitude: format_coordinate(crime.latitude),
            longitude: format_coordinate(crime.longitude),
            date: crime.date.clone(),
            time: crime.time.clone(),
        }
    }
}

impl TableRow for CrimeData {
    fn cell(&self, key: &str) -> Option<&str> {
        match key {
            "distance" => Some(&self.distance),
            "crimeCategory" => Some(&self.crime_category),
            "neighborhood" => self.neighborhood.as_deref(),
            "street" => Some(&self.street),
            "city" => Some(&self.city),
            "zip" => Some(&self.zip),
            "latitude" => Some(&self.latitude),
            "longitude" => Some(&self.longitude),
            "date" => Some(&self.date),
            "time" => Some(&self.time),
            _ => None,
        }
    }
}

/// Crimes page row built from a detail record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpRow {
    pub case: String,
    pub crime_category: String,
    pub neighborhood: Option<String>,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub latitude: String,
    pub longitude: String,
    pub date: String,
    pub time: String,
    pub source: String,
}

impl From<&CrimeDump> for DumpRow {
    fn from(crime: &CrimeDump) -> Self {
        DumpRow {
            case: crime.case.clone(),
            crime_category: crime.crime_category.clone(),
            neighborhood: crime.neighborhood.clone().filter(|n| !n.is_empty()),
            street: crime.street.clone(),
            city: crime.city.clone(),
            zip: crime.zip.clone(),
            latitude: format_coordinate(crime.latitude),
            longitude: format_coordinate(crime.longitude),
            date: crime.date.clone(),
            time: crime.time.clone(),
            source: crime.source.clone(),
        }
    }
}

impl TableRow for DumpRow {
    fn cell(&self, key: &str) -> Option<&str> {
        match key {
            "case" => Some(&self.case),
            "crimeCategory" => Some(&self.crime_category),
            "neighborhood" => self.neighborhood.as_deref(),
            "street" => Some(&self.street),
            "city" => Some(&self.city),
            "zip" => Some(&self.zip),
            "latitude" => Some(&self.latitude),
            "longitude" => Some(&self.longitude),
            "date" => Some(&self.date),
            "time" => Some(&self.time),
            "source" => Some(&self.source),
            _ => None,
        }
    }
}

fn format_coordinate(value: f64) -> String {
    format!("{:.6}", value)
}
