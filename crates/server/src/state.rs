use axum::extract::FromRef;
use dioxus::prelude::ServerFnError;
use shared_types::AppError;

use crate::catalog::CatalogClient;
use crate::error_convert::AppErrorExt;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<CatalogClient>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }
}

/// The catalog client injected into the current request.
///
/// The application root adds the client as an `axum::Extension` layer so
/// server functions receive the same instance the REST routes use.
pub fn request_catalog() -> Result<CatalogClient, ServerFnError> {
    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::internal("No request context").into_server_fn_error())?;

    let parts = ctx.parts_mut();
    parts
        .extensions
        .get::<CatalogClient>()
        .cloned()
        .ok_or_else(|| AppError::internal("Catalog client is not configured").into_server_fn_error())
}
