use dioxus::prelude::*;

/// Fixed-ratio artwork frame. Shows `placeholder` text when there is no image.
#[component]
pub fn PosterImage(
    src: Option<String>,
    #[props(default)] alt: String,
    #[props(default = "No Poster".to_string())] placeholder: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "poster", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            match src.filter(|s| !s.is_empty()) {
                Some(url) => rsx! {
                    img { class: "poster-image", src: "{url}", alt: "{alt}", loading: "lazy" }
                },
                None => rsx! {
                    div { class: "poster-placeholder", "{placeholder}" }
                },
            }
        }
    }
}
