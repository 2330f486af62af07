use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use server::catalog::CatalogClient;
use shared_types::CatalogConfig;
use std::sync::Arc;
use tower::ServiceExt;

type Responder = Arc<dyn Fn(Value) -> (StatusCode, String) + Send + Sync>;

/// Serve `respond` as a GraphQL endpoint on an ephemeral local port and
/// return its URL. The server lives until the test runtime shuts down.
pub async fn spawn_catalog<F>(respond: F) -> String
where
    F: Fn(Value) -> (StatusCode, String) + Send + Sync + 'static,
{
    let respond: Responder = Arc::new(respond);
    let app = Router::new().route(
        "/graphql",
        post(move |Json(request): Json<Value>| {
            let respond = respond.clone();
            async move {
                let (status, body) = respond(request);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub catalog");
    let addr = listener.local_addr().expect("Stub catalog has no address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}/graphql")
}

/// Stub catalog answering from the canned records below.
pub async fn fixture_catalog() -> String {
    spawn_catalog(|request| (StatusCode::OK, catalog_fixture(&request).to_string())).await
}

pub fn client_for(endpoint: &str) -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        graphql_endpoint: endpoint.to_string(),
        timeout_secs: 5,
        ..CatalogConfig::default()
    })
    .expect("Failed to build catalog client")
}

/// REST router wired to a fresh fixture catalog.
pub async fn test_app() -> Router {
    let endpoint = fixture_catalog().await;
    server::openapi::api_router(client_for(&endpoint))
}

/// GET a route and parse the JSON response.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

// ── Fixture data ────────────────────────────────────────────────────

/// Route a GraphQL request to a canned response by operation and variables.
pub fn catalog_fixture(request: &Value) -> Value {
    let query = request["query"].as_str().unwrap_or_default();
    let variables = &request["variables"];

    if query.contains("query Search") {
        search_fixture(variables["input"]["term"].as_str().unwrap_or_default())
    } else if query.contains("query GetWork") {
        match variables["identifier"].as_str().unwrap_or_default() {
            "the-wedding-party" => json!({ "data": { "getWork": wedding_party() } }),
            "missing-work" => json!({
                "data": { "getWork": null },
                "errors": [{ "message": "Work not found" }]
            }),
            _ => json!({ "data": { "getWork": null } }),
        }
    } else if query.contains("query GetPerson") {
        match variables["identifier"].as_str().unwrap_or_default() {
            "adesua-etomi" => json!({ "data": { "getPerson": adesua_etomi() } }),
            "coded" => json!({
                "data": null,
                "errors": [{ "message": "No such record", "extensions": { "code": "NOT_FOUND" } }]
            }),
            _ => json!({ "data": { "getPerson": null } }),
        }
    } else {
        json!({ "errors": [{ "message": "Unknown operation" }] })
    }
}

fn search_fixture(term: &str) -> Value {
    match term {
        "wedding" => json!({
            "data": { "search": { "collections": [
                {
                    "name": "works",
                    "displayName": "Works",
                    "found": 3,
                    "hits": [
                        { "__typename": "WorkSearchHit", "work": {
                            "id": "w1", "title": "The Wedding Party", "slug": "the-wedding-party",
                            "releaseYear": 2016, "workType": "MOVIE",
                            "poster": { "url": "https://img.test/twp.jpg", "thumbnailImageUrl": "https://img.test/twp-thumb.jpg" }
                        } },
                        { "__typename": "WorkSearchHit", "work": null },
                        { "__typename": "WorkSearchHit", "work": {
                            "id": "w2", "title": "The Wedding Party 2", "slug": "the-wedding-party-2",
                            "releaseYear": 2017, "workType": "MOVIE"
                        } }
                    ]
                },
                {
                    "name": "people",
                    "displayName": "People",
                    "found": 1,
                    "hits": [
                        { "__typename": "PersonSearchHit", "person": {
                            "id": "p1", "name": "Adesua Etomi", "slug": "adesua-etomi",
                            "bio": "Nigerian actress and singer."
                        } }
                    ]
                }
            ] } }
        }),
        "ghost" => json!({
            "data": { "search": { "collections": [
                { "name": "works", "displayName": "Works", "found": 2, "hits": [
                    { "__typename": "WorkSearchHit", "work": null },
                    { "__typename": "WorkSearchHit", "work": null }
                ] },
                { "name": "people", "displayName": "People", "found": 0, "hits": null }
            ] } }
        }),
        "partial" => json!({
            "data": { "search": { "collections": [
                { "name": "people", "displayName": "People", "found": 1, "hits": [
                    { "__typename": "PersonSearchHit", "person": {
                        "id": "p2", "name": "Ramsey Nouah", "slug": "ramsey-nouah"
                    } }
                ] }
            ] } },
            "errors": [{ "message": "works collection timed out" }]
        }),
        "boom" => json!({
            "data": null,
            "errors": [{ "message": "search backend unavailable" }]
        }),
        "outage" => json!({
            "data": { "search": null },
            "errors": [{ "message": "search index offline" }]
        }),
        "mixed" => json!({
            "data": { "search": { "collections": [
                { "name": "works", "displayName": "Works", "found": 3, "hits": [
                    { "__typename": "WorkSearchHit", "work": {
                        "id": "w3", "title": "Lionheart", "slug": "lionheart",
                        "releaseYear": 2018, "workType": "MOVIE"
                    } },
                    { "__typename": "WorkSearchHit", "work": {
                        "id": "w4", "title": "Nollywood Babylon", "slug": "nollywood-babylon",
                        "releaseYear": 2008, "workType": "DOCUMENTARY"
                    } },
                    { "__typename": "WorkSearchHit", "work": {
                        "id": "w5", "title": null, "slug": "untitled"
                    } }
                ] }
            ] } }
        }),
        _ => json!({ "data": { "search": { "collections": [] } } }),
    }
}

fn wedding_party() -> Value {
    json!({
        "id": "w1",
        "title": "The Wedding Party",
        "slug": "the-wedding-party",
        "workType": "MOVIE",
        "summary": "Two families collide at a Lagos wedding.",
        "releaseDate": "2016-09-10",
        "releaseYear": 2016,
        "runtime": 110,
        "languages": ["English", "Yoruba"],
        "genres": [{ "id": "g1", "name": "Comedy", "slug": "comedy" }],
        "cast": [{
            "id": "c1",
            "characterName": "Dunni",
            "isLead": true,
            "person": { "id": "p1", "name": "Adesua Etomi", "slug": "adesua-etomi" }
        }],
        "crew": null
    })
}

fn adesua_etomi() -> Value {
    json!({
        "id": "p1",
        "name": "Adesua Etomi",
        "slug": "adesua-etomi",
        "bio": "Nigerian actress and singer.",
        "gender": "FEMALE",
        "birthDate": "1988-03-22",
        "deceased": false,
        "aliases": ["Adesua Etomi-Wellington"],
        "works": { "items": [
            { "id": "w1", "title": "The Wedding Party", "slug": "the-wedding-party", "workType": "MOVIE", "releaseYear": 2016 }
        ] }
    })
}
