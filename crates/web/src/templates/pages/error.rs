use maud::{html, Markup};

use crate::templates::layouts::{base, CurrentPage, PageConfig};

/// Error page for a loader that could not produce its data
pub fn error_page(current_page: CurrentPage, message: &str) -> Markup {
    let config = PageConfig {
        title: "Crime Map - Error",
        current_page,
    };

    base(
        &config,
        html! {
            div class="notification is-danger is-light" {
                p class="has-text-weight-semibold" { "Something went wrong" }
                p { (message) }
            }
        },
    )
}

pub fn not_found_page(path: &str) -> Markup {
    let config = PageConfig {
        title: "Crime Map - Not Found",
        current_page: CurrentPage::None,
    };

    base(
        &config,
        html! {
            div class="has-text-centered py-6" {
                h1 class="title" { "404" }
                p class="subtitle" { "Nothing lives at " code { (path) } }
                a href="/" class="button is-primary" { "Back home" }
            }
        },
    )
}
