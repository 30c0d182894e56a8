use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Crime;

/// Value outside one of the closed sets below
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! closed_set {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

closed_set!(Neighborhood, "neighborhood", {
    Eastside => "Eastside",
    NewTacoma => "New Tacoma",
    SouthTacoma => "South Tacoma",
    CentralTacoma => "Central Tacoma",
    WestEnd => "West End",
    NortheastTacoma => "Northeast Tacoma",
    SouthEnd => "South End",
    NorthEnd => "North End",
    Hilltop => "Hilltop",
    StadiumDistrict => "Stadium District",
});

closed_set!(CrimeType, "crime type", {
    TrafficDui => "Traffic - DUI (Liquor)",
    Vandalism => "Destruction/Damage/Vandalism",
    LarcenyTheft => "Larceny/Theft Offenses",
    Assault => "Assault Offenses",
    CollisionInjury => "Traffic Accident/Collision - Non Fatal - Injury",
    CollisionNonInjury => "Traffic Accident/Collision - Non Fatal - Non Injury",
    Burglary => "Burglary/Breaking & Entering",
    Robbery => "Robbery",
    MotorVehicleTheft => "Motor Vehicle Theft",
    StolenProperty => "Stolen Property Offenses",
    Fraud => "Fraud Offenses",
    AnimalCruelty => "Animal Cruelty",
    DrugNarcotics => "Drug/Narcotics Violations",
});

/// Crime record narrowed to the known neighborhood and crime type sets.
///
/// Nothing at the HTTP boundary produces this type; it exists for callers
/// that want to opt into the narrower shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrictCrime {
    pub address: String,
    pub neighborhood: Neighborhood,
    pub latitude: f64,
    pub longitude: f64,
    pub crime_type: CrimeType,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrictCrimesResponse {
    pub crimes: Vec<StrictCrime>,
    pub count: usize,
}

impl TryFrom<Crime> for StrictCrime {
    type Error = UnknownValue;

    fn try_from(crime: Crime) -> Result<Self, Self::Error> {
        Ok(StrictCrime {
            neighborhood: crime.neighborhood.parse()?,
            crime_type: crime.crime_type.parse()?,
            address: crime.address,
            latitude: crime.latitude,
            longitude: crime.longitude,
            date: crime.date,
            time: crime.time.unwrap_or_default(),
        })
    }
}
