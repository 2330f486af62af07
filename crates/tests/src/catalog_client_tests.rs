use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, HitTarget, SearchInput};

use crate::common::{client_for, fixture_catalog, spawn_catalog};

#[tokio::test]
async fn search_normalizes_collections() {
    let client = client_for(&fixture_catalog().await);

    let response = client.search(&SearchInput::catalog("wedding")).await.unwrap();
    let results = response.normalize();

    assert_eq!(results.len(), 3);
    assert_eq!(results.groups.len(), 2);
    assert_eq!(results.groups[0].count, 2);
    assert_eq!(results.groups[1].display_name, "People");

    let keys: Vec<&str> = results.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "works-WorkSearchHit-0",
            "works-WorkSearchHit-1",
            "people-PersonSearchHit-0",
        ]
    );
    assert_eq!(
        results.get(2).unwrap().hit.target(),
        HitTarget::Person {
            slug: "adesua-etomi".into()
        }
    );
}

#[tokio::test]
async fn search_with_only_null_hits_is_empty() {
    let client = client_for(&fixture_catalog().await);

    let response = client.search(&SearchInput::catalog("ghost")).await.unwrap();
    assert_eq!(response.collections.len(), 2);
    assert!(response.normalize().is_empty());
}

#[tokio::test]
async fn search_keeps_partial_data() {
    let client = client_for(&fixture_catalog().await);

    let results = client
        .search(&SearchInput::catalog("partial"))
        .await
        .unwrap()
        .normalize();
    assert_eq!(results.len(), 1);
    assert_eq!(results.get(0).unwrap().hit.title(), "Ramsey Nouah");
}

#[tokio::test]
async fn search_errors_without_data_are_upstream() {
    let client = client_for(&fixture_catalog().await);

    let err = client.search(&SearchInput::catalog("boom")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "search backend unavailable");
}

#[tokio::test]
async fn search_nulled_root_with_errors_is_upstream() {
    let client = client_for(&fixture_catalog().await);

    let err = client.search(&SearchInput::catalog("outage")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "search index offline");
}

#[tokio::test]
async fn search_drops_only_the_malformed_hit() {
    let client = client_for(&fixture_catalog().await);

    let results = client
        .search(&SearchInput::catalog("mixed"))
        .await
        .unwrap()
        .normalize();
    let titles: Vec<&str> = results.entries.iter().map(|e| e.hit.title()).collect();
    assert_eq!(titles, vec!["Lionheart", "Nollywood Babylon"]);
}

#[tokio::test]
async fn search_sends_term_and_collections() {
    let endpoint = spawn_catalog(|request| {
        let input = &request["variables"]["input"];
        let echoed = serde_json::json!({
            "data": { "search": { "collections": [{
                "name": input["collections"][0].as_str().unwrap_or_default(),
                "displayName": input["term"].as_str().unwrap_or_default(),
                "found": 0,
                "hits": []
            }] } }
        });
        (StatusCode::OK, echoed.to_string())
    })
    .await;

    let response = client_for(&endpoint)
        .search(&SearchInput::catalog("oloture"))
        .await
        .unwrap();
    assert_eq!(response.collections[0].name, "works");
    assert_eq!(response.collections[0].display_name, "oloture");
}

#[tokio::test]
async fn get_work_returns_record() {
    let client = client_for(&fixture_catalog().await);

    let work = client.get_work("the-wedding-party").await.unwrap().unwrap();
    assert_eq!(work.title, "The Wedding Party");
    assert_eq!(work.runtime, Some(110));
    assert_eq!(work.billed_cast().len(), 1);
    assert!(work.crew.is_empty());
}

#[tokio::test]
async fn missing_records_are_none() {
    let client = client_for(&fixture_catalog().await);

    assert_eq!(client.get_work("unknown").await.unwrap(), None);
    assert_eq!(client.get_work("missing-work").await.unwrap(), None);
    assert_eq!(client.get_person("coded").await.unwrap(), None);
    assert_eq!(client.get_person("nobody").await.unwrap(), None);
}

#[tokio::test]
async fn get_person_returns_record() {
    let client = client_for(&fixture_catalog().await);

    let person = client.get_person("adesua-etomi").await.unwrap().unwrap();
    assert_eq!(person.gender_label().as_deref(), Some("Female"));
    assert_eq!(person.known_for_works()[0].slug, "the-wedding-party");
}

#[tokio::test]
async fn unreadable_success_body_is_decode_error() {
    let endpoint = spawn_catalog(|_| (StatusCode::OK, "<html>maintenance</html>".into())).await;

    let err = client_for(&endpoint)
        .search(&SearchInput::catalog("wedding"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn unreadable_error_status_is_upstream() {
    let endpoint =
        spawn_catalog(|_| (StatusCode::SERVICE_UNAVAILABLE, "upstream down".into())).await;

    let err = client_for(&endpoint).get_work("the-wedding-party").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert!(err.message.contains("503"));
}

#[tokio::test]
async fn unreachable_catalog_is_upstream() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}/graphql"))
        .search(&SearchInput::catalog("wedding"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
}
