use chrono::Datelike;
use dioxus::prelude::*;
use shared_types::PageMetadata;

use super::{BrandHeader, PageHead};
use crate::search::SearchBox;

pub fn footer_text(year: i32) -> String {
    format!("© {year} Nollywood.com. Powering the Nollywood and African Film/TV value chain.")
}

/// Landing page: brand, search box and footer.
#[component]
pub fn Home() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        PageHead { metadata: PageMetadata::home() }

        div { class: "home-page",
            main { class: "home-main",
                div { class: "home-brand",
                    BrandHeader {}
                }
                div { class: "home-search",
                    SearchBox {}
                }
                div { class: "home-actions",
                    button { class: "home-lucky", r#type: "button", "I'm Feeling Lucky" }
                }
            }
            footer { class: "home-footer",
                p { {footer_text(year)} }
            }
        }
    }
}
