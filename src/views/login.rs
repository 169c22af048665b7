//! Login page: welcome panel, credential form, failure toast.

use std::time::Duration;

use maud::{Markup, PreEscaped, html};

use super::layout::{APP_NAME, page};

/// How long the failure toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);
pub const LOGIN_ERROR: &str = "Incorrect username or password";

const TOAST_SCRIPT: &str = "(function () {\
  var toast = document.getElementById('login-toast');\
  if (toast) { setTimeout(function () { toast.remove(); }, Number(toast.dataset.dismissMs)); }\
})();";

/// Form state echoed back into the page. The password never is.
#[derive(Debug, Default)]
pub struct LoginView<'a> {
    pub username: &'a str,
    pub failed: bool,
}

pub fn login_page(view: &LoginView<'_>) -> Markup {
    let content = html! {
        div class="login" {
            @if view.failed {
                div id="login-toast" class="toast" role="alert" data-dismiss-ms=(TOAST_DURATION.as_millis()) {
                    (LOGIN_ERROR)
                }
                script { (PreEscaped(TOAST_SCRIPT)) }
            }

            div class="login-welcome" {
                div {
                    h1 { "Welcome to " (APP_NAME) }
                    p {
                        "Take control of your finances. Track expenses, set budgets, manage subscriptions "
                        "and get AI-powered savings tips, all in one place."
                    }
                }
            }

            div class="login-main" {
                div class="login-card" {
                    div class="login-brand" {
                        img src="/logo.svg" alt=(format!("{APP_NAME} Logo")) width="100" height="100";
                        h2 { "Login to " (APP_NAME) }
                    }

                    form method="post" action="/login" class="login-form" {
                        div {
                            label for="username" { "Username" }
                            input id="username" name="username" type="text" value=(view.username) required;
                        }
                        div {
                            label for="password" { "Password" }
                            input id="password" name="password" type="password" required;
                        }
                        button type="submit" { "Sign In" }
                        div class="login-links" {
                            a href="#" { "Forgot password?" }
                            a href="#" { "Don't have an account?" }
                        }
                    }
                }
            }
        }
    };

    page(&format!("Login to {APP_NAME}"), content)
}
