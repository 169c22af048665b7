//! Account profile page.
//!
//! The page ships in the `Pending` state and pulls the settled fragment from
//! `data-src` once loaded, so "Loading..." shows while the backend answers.

use maud::{Markup, PreEscaped, html};

use super::layout::page;
use crate::services::api::Profile;
use crate::services::remote::Remote;

pub const PROFILE_ERROR: &str = "Failed to fetch profile";

pub fn account_page(fragment_url: &str) -> Markup {
    let loader = format!(
        "(function () {{\
          var host = document.getElementById('profile');\
          fetch(host.dataset.src, {{ credentials: 'same-origin' }})\
            .then(function (res) {{\
              if (res.redirected) {{ window.location.assign(res.url); return null; }}\
              return res.text();\
            }})\
            .then(function (html) {{ if (html !== null) {{ host.innerHTML = html; }} }})\
            .catch(function () {{ host.innerHTML = '<p class=\"error\" style=\"color: red\">{PROFILE_ERROR}</p>'; }});\
        }})();"
    );

    let content = html! {
        div id="profile" data-src=(fragment_url) {
            (profile_fragment(&Remote::Pending))
        }
        script { (PreEscaped(loader)) }
    };

    page("Account Profile", content)
}

pub fn profile_fragment(profile: &Remote<Profile>) -> Markup {
    match profile {
        Remote::Pending => html! { p { "Loading..." } },
        Remote::Failed(message) => html! { p class="error" style="color: red" { (message) } },
        Remote::Loaded(profile) => html! {
            div class="profile" style="padding: 2rem" {
                h1 { "Account Profile" }
                (field("Name", &profile.full_name()))
                (field("Email", &profile.email))
                (field("Date of Birth", &profile.dob))
                (field("Country", &profile.country))
                (field("Gender", profile.gender().label()))
                (field("Account ID", &profile.account_id.to_string()))
                (field("Start Date", &profile.start_date))
            }
        },
    }
}

fn field(label: &str, value: &str) -> Markup {
    html! {
        p { strong { (label) ":" } " " (value) }
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
