use dioxus::prelude::*;
use shared_types::{Person, Work};

/// Fetch a work by slug. Missing works are a `NotFound` error.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_work(slug: String) -> Result<Work, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::state::request_catalog;
    use shared_types::AppError;

    let catalog = request_catalog()?;
    catalog
        .get_work(&slug)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::not_found(format!("Work not found: {slug}")).into_server_fn_error())
}

/// Fetch a person by slug. Missing people are a `NotFound` error.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_person(slug: String) -> Result<Person, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::state::request_catalog;
    use shared_types::AppError;

    let catalog = request_catalog()?;
    catalog
        .get_person(&slug)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Person not found: {slug}")).into_server_fn_error()
        })
}
