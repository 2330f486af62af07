use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{client_for, get, spawn_catalog, test_app};

#[tokio::test]
async fn health_reports_catalog_endpoint() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["catalog"].as_str().unwrap().ends_with("/graphql"));
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn search_rejects_short_terms() {
    let app = test_app().await;

    for uri in ["/api/v1/search", "/api/v1/search?q=a", "/api/v1/search?q=%20a%20"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["kind"], "BadRequest");
        assert!(body["field_errors"]["q"].is_string());
    }
}

#[tokio::test]
async fn search_returns_grouped_valid_hits() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/search?q=wedding").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["term"], "wedding");
    assert_eq!(body["total"], 3);

    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["name"], "works");
    assert_eq!(groups[0]["displayName"], "Works");
    assert_eq!(groups[0]["count"], 2);
    assert_eq!(groups[0]["hits"][1]["Work"]["slug"], "the-wedding-party-2");
    assert_eq!(groups[1]["hits"][0]["Person"]["name"], "Adesua Etomi");
}

#[tokio::test]
async fn search_trims_the_term() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/search?q=%20wedding%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["term"], "wedding");
}

#[tokio::test]
async fn search_without_valid_hits_is_empty_not_error() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/search?q=ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["groups"], serde_json::json!([]));
}

#[tokio::test]
async fn search_upstream_failure_is_bad_gateway() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/search?q=boom").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "Upstream");
    assert_eq!(body["message"], "search backend unavailable");
}

#[tokio::test]
async fn search_nulled_root_with_errors_is_bad_gateway() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/search?q=outage").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "search index offline");
}

#[tokio::test]
async fn search_keeps_hits_beside_a_malformed_one() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/search?q=mixed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["groups"][0]["hits"][1]["Work"]["workType"], "TV_SHOW");
}

#[tokio::test]
async fn get_work_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/works/the-wedding-party").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "The Wedding Party");
    assert_eq!(body["workType"], "MOVIE");
    assert_eq!(body["cast"][0]["characterName"], "Dunni");
}

#[tokio::test]
async fn get_work_not_found() {
    let app = test_app().await;

    for slug in ["unknown", "missing-work"] {
        let (status, body) = get(&app, &format!("/api/v1/works/{slug}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "NotFound");
        assert_eq!(body["message"], format!("Work not found: {slug}"));
    }
}

#[tokio::test]
async fn get_person_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/people/adesua-etomi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Adesua Etomi");
    assert_eq!(body["works"]["items"][0]["slug"], "the-wedding-party");
}

#[tokio::test]
async fn get_person_not_found() {
    let app = test_app().await;

    let (status, body) = get(&app, "/api/v1/people/coded").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Person not found: coded");
}

#[tokio::test]
async fn undecodable_catalog_is_bad_gateway() {
    let endpoint = spawn_catalog(|_| (StatusCode::OK, "not json".into())).await;
    let app = server::openapi::api_router(client_for(&endpoint));

    let (status, body) = get(&app, "/api/v1/people/adesua-etomi").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "Decode");
}
