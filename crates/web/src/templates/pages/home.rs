use maud::{html, Markup};

use crate::{
    loaders::AreaParams,
    templates::{
        components::search_form,
        layouts::{base, CurrentPage, PageConfig},
    },
};

/// Home page - radius search form
pub fn home_page() -> Markup {
    let config = PageConfig {
        title: "Crime Map",
        current_page: CurrentPage::Home,
    };

    base(&config, home_content())
}

fn home_content() -> Markup {
    html! {
        div class="content mb-5" {
            p class="subtitle" {
                "Look up reported crimes around a point, or browse the latest records."
            }
        }

        (search_form(&AreaParams::default()))

        div class="buttons" {
            a href="/crimes" class="button is-light" { "Browse all crimes" }
        }
    }
}
