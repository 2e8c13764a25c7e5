mod common;

use common::{spawn_app, test_config};
use httpmock::prelude::*;
use memopass::Backend;

#[tokio::test]
async fn test_companion_definitions_reach_the_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/random/adjective");
        then.status(200).json_body(serde_json::json!({
            "word": "quick",
            "definition": "moving fast"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/random/noun");
        then.status(200).json_body(serde_json::json!({
            "word": "fox",
            "definition": "alert carnivorous mammal"
        }));
    });

    let mut config = test_config(Backend::CompanionService);
    config.source.companion_url = Some(server.base_url());
    let base_url = spawn_app(config).await;

    let body: serde_json::Value = reqwest::get(format!("{}/generate", base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["password"].as_str().unwrap().starts_with("QuickFox"));
    assert_eq!(body["words"]["adjective"]["word"], "Quick");
    assert_eq!(body["words"]["adjective"]["definition"], "moving fast");
    assert_eq!(body["words"]["noun"]["definition"], "alert carnivorous mammal");
}

#[tokio::test]
async fn test_companion_malformed_word_is_not_retried() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/random/adjective");
        then.status(200).json_body(serde_json::json!({ "word": "quick" }));
    });
    let noun_mock = server.mock(|when, then| {
        when.method(GET).path("/api/random/noun");
        then.status(200).json_body(serde_json::json!({ "word": "sea lion" }));
    });

    let mut config = test_config(Backend::CompanionService);
    config.source.companion_url = Some(server.base_url());
    let base_url = spawn_app(config).await;

    let response = reqwest::get(format!("{}/generate", base_url)).await.unwrap();
    assert_eq!(response.status(), 500);
    noun_mock.assert_hits(1);
}
