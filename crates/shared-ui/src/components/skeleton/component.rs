use dioxus::prelude::*;

/// Loading placeholder shaped like a detail page: an artwork block beside
/// a title bar and `lines` rows of text.
#[component]
pub fn DetailSkeleton(#[props(default = 4)] lines: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-skeleton", aria_busy: "true",
            div { class: "skeleton skeleton-artwork" }
            div { class: "skeleton-body",
                div { class: "skeleton skeleton-title" }
                for i in 0..lines {
                    div { key: "{i}", class: "skeleton skeleton-line" }
                }
            }
        }
    }
}
