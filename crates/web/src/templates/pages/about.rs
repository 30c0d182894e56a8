use maud::{html, Markup};

use crate::{
    loaders::PingState,
    templates::{
        fragments::ping_status,
        layouts::{base, CurrentPage, PageConfig},
    },
};

/// About page - renders the loading state, the ping result is fetched once the page is up
pub fn about_page() -> Markup {
    let config = PageConfig {
        title: "Crime Map - About",
        current_page: CurrentPage::About,
    };

    base(
        &config,
        html! {
            div class="box" {
                h1 class="title" { "About" }
                h2 class="subtitle is-6" { "Crime API status" }
                (ping_status(&PingState::Loading))
            }
        },
    )
}
