use maud::{html, Markup};

use crate::loaders::AreaParams;

/// Radius search form, submits a plain GET to `/area`
pub fn search_form(params: &AreaParams) -> Markup {
    html! {
        form class="box" method="get" action="/area" {
            h2 class="title is-5 mb-4" { "Search by Area" }

            div class="field is-grouped is-grouped-multiline" {
                (number_field("lat", "Latitude", "47.2529", params.lat.as_deref()))
                (number_field("lng", "Longitude", "-122.4443", params.lng.as_deref()))
                (number_field("radius", "Radius (miles)", "1.5", params.radius.as_deref()))
                div class="control" {
                    div class="field" {
                        label class="label is-small" for="year" { "Year" }
                        input id="year" name="year" class="input" type="text"
                              placeholder="2025" value=[params.year.as_deref()];
                    }
                }
            }

            div class="control" {
                button type="submit" class="button is-primary" {
                    span class="icon" { (search_icon()) }
                    span { "Search" }
                }
            }
        }
    }
}

fn number_field(name: &str, label: &str, placeholder: &str, value: Option<&str>) -> Markup {
    html! {
        div class="control" {
            div class="field" {
                label class="label is-small" for=(name) { (label) }
                input id=(name) name=(name) class="input" type="number" step="any"
                      placeholder=(placeholder) value=[value];
            }
        }
    }
}

fn search_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            circle cx="11" cy="11" r="8" {}
            line x1="21" y1="21" x2="16.65" y2="16.65" {}
        }
    }
}
