use maud::{html, Markup};

use crate::loaders::{PingFailure, PingState};

/// Backend ping status.
///
/// The loading state requests `/fragments/ping` as soon as it is on the page
/// and replaces itself with whatever comes back.
pub fn ping_status(state: &PingState) -> Markup {
    match state {
        PingState::Loading => html! {
            div id="ping-status" hx-get="/fragments/ping" hx-trigger="load" hx-swap="outerHTML" {
                "Loading..."
            }
        },
        PingState::Success(Some(ping)) => html! {
            div id="ping-status" class="content" {
                p { "Status Code: " (ping.code) }
                p { "Message: " (ping.message) }
            }
        },
        PingState::Success(None) => html! {
            div id="ping-status" { "No data received" }
        },
        PingState::Error(failure) => error_view(failure),
    }
}

fn error_view(failure: &PingFailure) -> Markup {
    html! {
        div id="ping-status" class="notification is-danger is-light" {
            p { "Error loading ping: " (failure.message) }
            details class="mt-2" {
                summary { "Debug Info" }
                div class="is-size-7 mt-2" {
                    p { "Current URL: " (failure.current_url) }
                    p { "Attempted fetch: " (failure.attempted) }
                    p { "Error: " (failure.message) }
                }
            }
        }
    }
}
