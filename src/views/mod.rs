//! Server-rendered pages.
//!
//! Every view is a pure function of its input state returning `maud::Markup`;
//! handlers turn the markup into an HTML response with [`render`].

pub mod account;
pub mod home;
pub mod layout;
pub mod login;

use axum::response::Html;
use maud::Markup;

#[must_use]
pub fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}
