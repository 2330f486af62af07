use dioxus::prelude::*;

/// Inline loading indicator. Rendered inside the search field while a
/// query is in flight.
#[component]
pub fn Spinner(
    #[props(default = "Loading".to_string())] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            aria_label: "{label}",
            ..merged,
        }
    }
}
