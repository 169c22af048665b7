//! Diagnostic page that dumps the admin endpoint.

use maud::{Markup, html};

use super::layout::page;
use crate::services::remote::Remote;

/// `None` before the button has been pressed.
pub fn home_page(result: Option<&Remote<String>>) -> Markup {
    let content = html! {
        main style="padding: 2rem" {
            h1 { "Test Local API" }
            form method="post" action="/" {
                button type="submit" { "Fetch from API" }
            }
            @if let Some(Remote::Loaded(json)) = result {
                pre { (json) }
            }
            @if let Some(Remote::Failed(message)) = result {
                p class="error" style="color: red" { (message) }
            }
        }
    };

    page("Test Local API", content)
}
