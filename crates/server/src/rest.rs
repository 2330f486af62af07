use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared_types::{AppError, NormalizedResults, Person, SearchInput, ValidHit, Work};

use crate::catalog::CatalogClient;
use crate::state::AppState;

// ── Query params ────────────────────────────────────────────────────

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Search term, at least `search.min_term_len` characters.
    pub q: Option<String>,
}

// ── Response bodies ─────────────────────────────────────────────────

/// One collection of the normalized search result.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroupBody {
    pub name: String,
    pub display_name: String,
    /// Number of valid hits in `hits`.
    pub count: usize,
    pub hits: Vec<ValidHit>,
}

/// Normalized search result: empty collections and malformed hits removed.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResultsBody {
    pub term: String,
    pub total: usize,
    pub groups: Vec<SearchGroupBody>,
}

impl SearchResultsBody {
    pub fn new(term: String, results: &NormalizedResults) -> Self {
        let groups = results
            .groups
            .iter()
            .map(|group| SearchGroupBody {
                name: group.name.clone(),
                display_name: group.display_name.clone(),
                count: group.count,
                hits: results
                    .group_entries(group)
                    .map(|(_, entry)| entry.hit.clone())
                    .collect(),
            })
            .collect();
        Self {
            term,
            total: results.len(),
            groups,
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /api/v1/search
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Normalized search results", body = SearchResultsBody),
        (status = 400, description = "Search term too short", body = AppError),
        (status = 502, description = "Catalog unavailable", body = AppError)
    ),
    tag = "search"
)]
#[tracing::instrument(skip(catalog))]
pub async fn search(
    State(catalog): State<CatalogClient>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResultsBody>, AppError> {
    let term = params.q.unwrap_or_default().trim().to_string();
    crate::config::search_settings().check_term(&term, "q")?;

    let response = catalog.search(&SearchInput::catalog(term.clone())).await?;
    Ok(Json(SearchResultsBody::new(term, &response.normalize())))
}

/// GET /api/v1/works/{slug}
#[utoipa::path(
    get,
    path = "/api/v1/works/{slug}",
    params(("slug" = String, Path, description = "Work slug")),
    responses(
        (status = 200, description = "Work found", body = Work),
        (status = 404, description = "Work not found", body = AppError)
    ),
    tag = "works"
)]
#[tracing::instrument(skip(catalog))]
pub async fn get_work(
    State(catalog): State<CatalogClient>,
    Path(slug): Path<String>,
) -> Result<Json<Work>, AppError> {
    catalog
        .get_work(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Work not found: {slug}")))
}

/// GET /api/v1/people/{slug}
#[utoipa::path(
    get,
    path = "/api/v1/people/{slug}",
    params(("slug" = String, Path, description = "Person slug")),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 404, description = "Person not found", body = AppError)
    ),
    tag = "people"
)]
#[tracing::instrument(skip(catalog))]
pub async fn get_person(
    State(catalog): State<CatalogClient>,
    Path(slug): Path<String>,
) -> Result<Json<Person>, AppError> {
    catalog
        .get_person(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Person not found: {slug}")))
}

/// Build the catalog REST router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/search", get(search))
        .route("/api/v1/works/{slug}", get(get_work))
        .route("/api/v1/people/{slug}", get(get_person))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Collection, PersonSummary, SearchHit, WorkSummary, WorkType};

    #[test]
    fn body_groups_only_valid_hits() {
        let collections = vec![
            Collection {
                name: "works".into(),
                display_name: "Works".into(),
                found: 3,
                hits: vec![
                    SearchHit::WorkSearchHit {
                        work: Some(WorkSummary {
                            id: "1".into(),
                            title: "Oloture".into(),
                            slug: "oloture".into(),
                            release_year: Some(2019),
                            work_type: WorkType::Movie,
                            poster: None,
                        }),
                    },
                    SearchHit::WorkSearchHit { work: None },
                    SearchHit::Unsupported,
                ],
            },
            Collection {
                name: "people".into(),
                display_name: "People".into(),
                found: 1,
                hits: vec![SearchHit::PersonSearchHit {
                    person: Some(PersonSummary {
                        id: "2".into(),
                        name: "Sharon Ooja".into(),
                        slug: "sharon-ooja".into(),
                        bio: None,
                        headshot: None,
                    }),
                }],
            },
        ];
        let results = shared_types::normalize(&collections);
        let body = SearchResultsBody::new("oo".into(), &results);
        assert_eq!(body.total, 2);
        assert_eq!(body.groups.len(), 2);
        assert_eq!(body.groups[0].count, 1);
        assert_eq!(body.groups[0].hits.len(), 1);
        assert_eq!(body.groups[1].display_name, "People");
    }
}
