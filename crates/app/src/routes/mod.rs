pub mod home;
pub mod not_found;
pub mod person_detail;
pub mod work_detail;

use dioxus::prelude::*;
use shared_types::PageMetadata;

use crate::search::SearchBox;
use home::Home;
use not_found::NotFound;
use person_detail::PersonDetail;
use work_detail::WorkDetail;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(SiteLayout)]
    #[route("/work/:slug")]
    WorkDetail { slug: String },
    #[route("/person/:slug")]
    PersonDetail { slug: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// "Nollywood" wordmark with its tagline.
#[component]
pub fn BrandHeader(#[props(default)] compact: bool) -> Element {
    rsx! {
        div { class: if compact { "brand brand-compact" } else { "brand" },
            h1 { class: "brand-title", "Nollywood" }
            p { class: "brand-tagline", "The Digital Operating System" }
        }
    }
}

/// Document title and description for the current page.
#[component]
pub fn PageHead(metadata: PageMetadata) -> Element {
    rsx! {
        document::Title { "{metadata.title}" }
        document::Meta { name: "description", content: "{metadata.description}" }
        if let Some(image) = metadata.image.as_ref() {
            document::Meta { property: "og:image", content: "{image}" }
        }
    }
}

/// Sticky header with the brand and a compact search box, used by the
/// detail pages.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "site-header",
            div { class: "site-header-inner",
                Link { to: Route::Home {}, class: "site-header-brand",
                    BrandHeader { compact: true }
                }
                div { class: "site-header-search",
                    SearchBox {}
                }
            }
        }
        main { class: "detail-page",
            Outlet::<Route> {}
        }
    }
}
