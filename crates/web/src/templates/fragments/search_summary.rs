use maud::{html, Markup};

use crate::{loaders::InitialSearch, models::RadiusSearchResult};

/// Summary box above the area table: center, radius and how many crimes came back
pub fn search_summary(search: &InitialSearch, typed: Option<&RadiusSearchResult>) -> Markup {
    html! {
        div class="box search-summary" {
            nav class="level is-mobile" {
                (level_item("Latitude", &format_optional(search.latitude)))
                (level_item("Longitude", &format_optional(search.longitude)))
                (level_item("Radius (miles)", &format_optional(search.radius)))
                @if let Some(result) = typed {
                    (level_item("Crimes", &result.count.to_string()))
                    @if !result.year.is_empty() {
                        (level_item("Year", &result.year.join(", ")))
                    }
                }
            }

            // Body that does not look like a radius search, show it as returned
            @if typed.is_none() {
                details {
                    summary class="has-text-grey" { "Raw response" }
                    pre { (serde_json::to_string_pretty(&search.result).unwrap_or_default()) }
                }
            }
        }
    }
}

/// Shown on the area page before a complete search has been submitted
pub fn no_search() -> Markup {
    html! {
        div class="notification is-light" {
            "Enter a latitude, longitude and radius to search for crimes nearby."
        }
    }
}

fn level_item(heading: &str, value: &str) -> Markup {
    html! {
        div class="level-item has-text-centered" {
            div {
                p class="heading" { (heading) }
                p class="title is-5" { (value) }
            }
        }
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
