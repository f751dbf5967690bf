
use axum::http::StatusCode;
use serde_json::{Value, json};

use scoreboard_app::app::StoreHandle;

use crate::test_utils::tests::setup_web_app;

#[tokio::test]
async fn test_data_endpoints_fail_without_store() {
    let server = setup_web_app(StoreHandle::NotConfigured).await;
    let expected = json!({ "error": "Database not configured" });

    let requests = [
        server.client.get(server.url("/api/leaderboard")),
        server
            .client
            .post(server.url("/api/add"))
            .json(&json!({ "name": "Alice", "score": 10 })),
        server
            .client
            .put(server.url("/api/update/1"))
            .json(&json!({ "score": 1 })),
        server.client.delete(server.url("/api/delete/1")),
    ];

    for request in requests {
        let res = request.send().await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.json::<Value>().await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_landing_page_still_served_without_store() {
    let server = setup_web_app(StoreHandle::NotConfigured).await;

    let res = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert!(body.contains("Database not configured"));
}
