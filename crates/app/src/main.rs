use dioxus::prelude::*;
use shared_types::SearchSettings;

mod routes;
mod search;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let catalog = server::catalog::CatalogClient::new(&config.catalog)?;
        tracing::info!(endpoint = catalog.endpoint(), "catalog client ready");

        let mut router = dioxus::server::router(App)
            .merge(server::openapi::api_router(catalog.clone()))
            .layer(axum::Extension(catalog));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch widget settings once and provide via context (defaults on error)
    let settings_resource =
        use_server_future(move || async move { server::api::get_search_settings().await })?;

    let settings = settings_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(SearchSettings::default()))
        .unwrap_or_default();

    use_context_provider(|| settings);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
