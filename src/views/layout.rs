use maud::{DOCTYPE, Markup, html};

pub const APP_NAME: &str = "SmartSpendAI";

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" type="image/svg+xml" href="/logo.svg";
                link rel="stylesheet" type="text/css" href="/assets/app.css";
            }
            body {
                (content)
            }
        }
    }
}
