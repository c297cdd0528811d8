use std::sync::Arc;

use axum::Router;
use http_body_util::BodyExt; // for .collect
use httpmock::prelude::*;
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use microcms_mcp_gateway::clients::microcms::MicroCmsClient;
use microcms_mcp_gateway::core::source::ContentSource;
use microcms_mcp_gateway::infra::http_app::build_app;

async fn post(app: &Router, session_id: Option<&str>, body: Value) -> axum::response::Response {
    let mut req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(sid) = session_id {
        req = req.header("MCP-Session-Id", sid);
    }
    let req = req.body(axum::body::Body::from(body.to_string())).unwrap();
    timeout(Duration::from_secs(20), app.clone().oneshot(req))
        .await
        .unwrap()
        .unwrap()
}

/// Pull the JSON-RPC response with the given id out of an SSE body.
async fn rpc_result(resp: axum::response::Response, id: u64) -> Value {
    assert!(resp.status().is_success(), "status {}", resp.status());
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let s = String::from_utf8_lossy(&bytes);
    s.lines()
        .filter_map(|line| line.strip_prefix("data: "))
        .filter_map(|d| serde_json::from_str::<Value>(d).ok())
        .find(|v| v["id"] == json!(id))
        .unwrap_or_else(|| panic!("no rpc response for id {id} in: {s}"))
}

#[tokio::test]
async fn initialize_list_call_and_read_over_streamable_http() {
    let remote = MockServer::start_async().await;
    let one = remote
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/blog/abc123")
                .header("x-microcms-api-key", "test-key");
            then.status(200).json_body(json!({"id": "abc123"}));
        })
        .await;
    let list = remote
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/blog")
                .query_param("q", "hello")
                .query_param("offset", "0");
            then.status(200).json_body(json!({"contents": [], "totalCount": 0, "offset": 0, "limit": 10}));
        })
        .await;
    remote
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/missing");
            then.status(404).json_body(json!({"message": "not found"}));
        })
        .await;

    let source: Arc<dyn ContentSource> =
        Arc::new(MicroCmsClient::new(remote.base_url(), "test-key").unwrap());
    let app = build_app(source);

    // Initialize
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_res = post(&app, None, init).await;
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let init_body = rpc_result(init_res, 1).await;
    assert!(init_body["result"]["capabilities"]["tools"].is_object());
    assert!(init_body["result"]["capabilities"]["resources"].is_object());

    // notifications/initialized
    let notif = json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let notif_res = post(&app, Some(&session_id), notif).await;
    assert_eq!(notif_res.status(), StatusCode::ACCEPTED);

    // tools/list
    let list_req = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let tools = rpc_result(post(&app, Some(&session_id), list_req).await, 2).await;
    let names: Vec<&str> = tools["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    for expected in ["get_contents", "get_content", "search_contents", "filter_contents"] {
        assert!(names.contains(&expected), "missing {expected}: {names:?}");
    }

    // tools/call get_content
    let call = json!({
        "jsonrpc":"2.0","id":3,"method":"tools/call",
        "params": {"name":"get_content","arguments":{"endpoint":"blog","contentId":"abc123"}}
    });
    let v = rpc_result(post(&app, Some(&session_id), call).await, 3).await;
    assert_eq!(v["result"]["content"][0]["text"], "{\n  \"id\": \"abc123\"\n}");
    assert_ne!(v["result"]["isError"], json!(true));

    // tools/call search_contents with a zero offset
    let call = json!({
        "jsonrpc":"2.0","id":4,"method":"tools/call",
        "params": {"name":"search_contents","arguments":{"endpoint":"blog","q":"hello","offset":0}}
    });
    let v = rpc_result(post(&app, Some(&session_id), call).await, 4).await;
    assert_ne!(v["result"]["isError"], json!(true));
    list.assert_async().await;

    // tools/call against a failing endpoint
    let call = json!({
        "jsonrpc":"2.0","id":5,"method":"tools/call",
        "params": {"name":"get_contents","arguments":{"endpoint":"missing"}}
    });
    let v = rpc_result(post(&app, Some(&session_id), call).await, 5).await;
    assert_eq!(v["result"]["isError"], json!(true));
    assert!(v["result"]["content"][0]["text"].as_str().unwrap().contains("404"));

    // resources/templates/list
    let templates = json!({"jsonrpc":"2.0","id":6,"method":"resources/templates/list","params":{}});
    let v = rpc_result(post(&app, Some(&session_id), templates).await, 6).await;
    assert_eq!(v["result"]["resourceTemplates"].as_array().unwrap().len(), 2);

    // resources/read is the same request as get_content
    let read = json!({
        "jsonrpc":"2.0","id":7,"method":"resources/read",
        "params": {"uri":"microcms://blog/abc123"}
    });
    let v = rpc_result(post(&app, Some(&session_id), read).await, 7).await;
    assert_eq!(v["result"]["contents"][0]["text"], "{\n  \"id\": \"abc123\"\n}");
    one.assert_hits_async(2).await;
}
