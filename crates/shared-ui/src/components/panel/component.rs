use dioxus::prelude::*;

/// Surface that floats below an input, e.g. the search result dropdown.
///
/// Positioned absolutely against the nearest `position: relative` ancestor.
#[component]
pub fn FloatingPanel(
    #[props(default)] class: String,
    #[props(default = "Results".to_string())] label: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "floating-panel {class}",
            role: "region",
            aria_label: "{label}",
            {children}
        }
    }
}
