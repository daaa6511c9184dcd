use reqwest::StatusCode;
use serde_json::{json, Value};
use scroll_lab_api::config::Config;
use scroll_lab_api::store::Storage;

mod common;

fn ids(body: &Value) -> Vec<u64> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn items_pages_over_http() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/api/items?page=1&limit=10", server.base)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["page"], json!(1));
    assert_eq!(body["hasMore"], json!(true));

    let res = client.get(format!("{}/api/items?page=3&limit=5", server.base)).send().await?;
    let body: Value = res.json().await?;
    assert_eq!(ids(&body), vec![11, 12, 13, 14, 15]);

    // same request, same ids
    let again: Value = client
        .get(format!("{}/api/items?page=3&limit=5", server.base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(again, body);

    let res = client.get(format!("{}/api/items?page=nope", server.base)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["page"], json!(1));
    assert_eq!(ids(&body).len(), 10);
    Ok(())
}

#[tokio::test]
async fn large_limit_is_not_capped_by_default() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let body: Value = reqwest::get(format!("{}/api/items?page=2&limit=500", server.base)).await?.json().await?;
    let ids = ids(&body);
    assert_eq!(ids.len(), 500);
    assert_eq!(ids[0], 501);
    assert_eq!(ids[499], 1000);
    Ok(())
}

#[tokio::test]
async fn page_size_cap_is_opt_in() -> anyhow::Result<()> {
    let server = common::spawn_app_with_config(Config { max_page_size: Some(3), ..Config::default() }).await?;
    let body: Value = reqwest::get(format!("{}/api/items?limit=50", server.base)).await?.json().await?;
    assert_eq!(ids(&body), vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn login_flow() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let client = reqwest::Client::new();

    let ok = client
        .post(format!("{}/api/login", server.base))
        .json(&json!({ "username": "a", "password": "b" }))
        .send()
        .await?;
    assert_eq!(ok.status(), StatusCode::OK);
    let body: Value = ok.json().await?;
    assert_eq!(body["success"], json!(true));
    assert!(body["message"].as_str().unwrap().contains('a'));
    assert_eq!(body["user"]["username"], json!("a"));
    assert!(server.storage.get_user_by_username("a").await?.is_some());

    let bad = client
        .post(format!("{}/api/login", server.base))
        .json(&json!({ "username": "", "password": "b" }))
        .send()
        .await?;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    let body: Value = bad.json().await?;
    assert_eq!(body, json!({ "success": false, "message": "Invalid credentials format" }));
    Ok(())
}

#[tokio::test]
async fn metrics_count_api_requests() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let client = reqwest::Client::new();
    for _ in 0..2 {
        client.get(format!("{}/api/items", server.base)).send().await?;
    }

    let res = client.get(format!("{}/metrics", server.base)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let text = res.text().await?;
    assert!(text.contains("requests_total"));
    assert!(text.contains(r#"path="api/items""#));
    assert!(text.contains("request_duration_seconds"));
    Ok(())
}
