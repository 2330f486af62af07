use axum::Router;
use shared_types::{
    AppError, AppErrorKind, CastMember, CreditedPerson, CrewMember, ExternalLink, Image, Person,
    PersonSummary, SearchSettings, Tag, Trailer, ValidHit, Work, WorkPage, WorkSummary, WorkType,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::catalog::CatalogClient;
use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::search,
        rest::get_work,
        rest::get_person,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        health::HealthResponse,
        rest::SearchResultsBody,
        rest::SearchGroupBody,
        ValidHit,
        WorkSummary,
        PersonSummary,
        WorkType,
        Image,
        Trailer,
        Tag,
        CreditedPerson,
        CastMember,
        CrewMember,
        Work,
        ExternalLink,
        WorkPage,
        Person,
        SearchSettings,
    )),
    tags(
        (name = "search", description = "Catalog search across works and people"),
        (name = "works", description = "Movie and TV show records"),
        (name = "people", description = "Cast and crew records"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Nollywood Search API",
        description = "Search and detail lookups over the Nollywood catalog",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the REST API at `/api/v1/*`,
/// the health check, and (when enabled) the API docs at `/docs`.
pub fn api_router(catalog: CatalogClient) -> Router {
    let state = AppState::new(catalog);
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
