use maud::{html, Markup};

use crate::templates::layouts::CurrentPage;

/// Responsive navigation bar
pub fn navbar(current_page: CurrentPage) -> Markup {
    html! {
        nav class="navbar mb-4" role="navigation" aria-label="main navigation" {
            div class="navbar-brand" {
                // Hamburger menu for mobile
                a role="button" class="navbar-burger" aria-label="menu"
                  aria-expanded="false" data-target="navbarMenu" {
                    span aria-hidden="true" {}
                    span aria-hidden="true" {}
                    span aria-hidden="true" {}
                }
            }

            div id="navbarMenu" class="navbar-menu" {
                div class="navbar-start" {
                    (nav_link("/", "Home", current_page, CurrentPage::Home, home_icon()))
                    (nav_link("/area", "Area Search", current_page, CurrentPage::Area, pin_icon()))
                    (nav_link("/crimes", "Crimes", current_page, CurrentPage::Crimes, list_icon()))
                    (nav_link("/about", "About", current_page, CurrentPage::About, info_icon()))
                }
            }
        }
    }
}

fn nav_link(
    href: &str,
    label: &str,
    current: CurrentPage,
    page: CurrentPage,
    icon: Markup,
) -> Markup {
    html! {
        a href=(href) class=(nav_item_class(current, page)) {
            span class="icon-text" {
                span class="icon" { (icon) }
                span { (label) }
            }
        }
    }
}

fn nav_item_class(current: CurrentPage, page: CurrentPage) -> &'static str {
    if current == page {
        "navbar-item is-active"
    } else {
        "navbar-item"
    }
}

fn home_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" {}
            polyline points="9 22 9 12 15 12 15 22" {}
        }
    }
}

fn pin_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" {}
            circle cx="12" cy="10" r="3" {}
        }
    }
}

fn list_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            line x1="8" y1="6" x2="21" y2="6" {}
            line x1="8" y1="12" x2="21" y2="12" {}
            line x1="8" y1="18" x2="21" y2="18" {}
            line x1="3" y1="6" x2="3.01" y2="6" {}
            line x1="3" y1="12" x2="3.01" y2="12" {}
            line x1="3" y1="18" x2="3.01" y2="18" {}
        }
    }
}

fn info_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            circle cx="12" cy="12" r="10" {}
            line x1="12" y1="16" x2="12" y2="12" {}
            line x1="12" y1="8" x2="12.01" y2="8" {}
        }
    }
}
