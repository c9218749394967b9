//! Router smoke tests driven through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use vibequest_backend::{build_router, AppState};

fn app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::default());
    (build_router(state.clone()), state)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder.header("content-type", "application/json").body(Body::from(b.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn test_health_and_stateless_curriculum() {
    let (app, _) = app();
    let (status, body) = call(&app, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, body) =
        call(&app, "GET", "/api/v1/curriculum?playerClass=nonexistent&platform=web&stack=react-node", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selection"]["playerClass"], "vibe-surfer");
    assert_eq!(body["steps"].as_array().unwrap().len(), 31);
    assert_eq!(body["steps"][0]["id"], "plan-1");
}

#[tokio::test]
async fn test_session_round_trip() {
    let (app, state) = app();
    let selection = json!({ "playerClass": "co-pilot", "platform": "web", "stack": "nextjs-prisma" });
    let (status, created) = call(&app, "POST", "/api/v1/sessions", Some(json!({ "selection": selection }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(state.sessions.read().await.len(), 1);

    let (status, started) = call(&app, "POST", &format!("/api/v1/sessions/{id}/steps/plan-1/start"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(started["step"]["status"], "in-progress");

    let (status, decision) = call(&app, "POST", &format!("/api/v1/sessions/{id}/decision"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decision["id"], "decision-plan-1");
    let option_id = decision["options"][0]["id"].as_str().unwrap().to_string();

    let (status, outcome) = call(
        &app,
        "POST",
        &format!("/api/v1/sessions/{id}/decision/resolve"),
        Some(json!({ "optionId": option_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["decisionId"], "decision-plan-1");

    let (status, done) = call(&app, "POST", &format!("/api/v1/sessions/{id}/steps/complete"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(done["nextStepId"], "plan-2");

    let (status, curriculum) = call(&app, "GET", &format!("/api/v1/sessions/{id}/curriculum"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(curriculum["steps"][0]["status"], "completed");
    assert_eq!(curriculum["steps"][1]["status"], "available");

    let (status, err) = call(&app, "POST", &format!("/api/v1/sessions/{id}/selection"), Some(selection)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(err["error"].as_str().unwrap().contains("locked"));
}

#[tokio::test]
async fn test_errors_map_to_status_codes() {
    let (app, _) = app();
    let (status, body) = call(&app, "GET", "/api/v1/sessions/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("does-not-exist"));

    let (_, created) = call(&app, "POST", "/api/v1/sessions", Some(json!({}))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let bad = json!({ "playerClass": "wizard", "platform": "web", "stack": "react-node" });
    let (status, _) = call(&app, "POST", &format!("/api/v1/sessions/{id}/selection"), Some(bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(&app, "POST", &format!("/api/v1/sessions/{id}/verification/skip"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_one_step_at_a_time_and_delete() {
    let (app, state) = app();
    let selection = json!({ "playerClass": "vibe-surfer", "platform": "web", "stack": "react-node" });
    let (_, created) = call(&app, "POST", "/api/v1/sessions", Some(json!({ "selection": selection }))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = call(&app, "POST", &format!("/api/v1/sessions/{id}/steps/plan-1/start"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, err) = call(&app, "POST", &format!("/api/v1/sessions/{id}/steps/init-1/start"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(err["error"].as_str().unwrap().contains("plan-1"));

    let (status, body) = call(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    assert!(state.sessions.read().await.is_empty());

    let (status, _) = call(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_verification_and_prompt_endpoints() {
    let (app, _) = app();
    let (_, created) = call(
        &app,
        "POST",
        "/api/v1/sessions",
        Some(json!({ "selection": { "playerClass": "vibe-surfer", "platform": "mobile", "stack": "flutter-firebase" } })),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, v) = call(
        &app,
        "POST",
        &format!("/api/v1/sessions/{id}/verification"),
        Some(json!({ "type": "predict-output" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["expectedOutput"], "24");

    let (status, out) = call(
        &app,
        "POST",
        &format!("/api/v1/sessions/{id}/verification/resolve"),
        Some(json!({ "answer": "24", "hintUsed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["result"]["passed"], true);
    assert!(out["result"].get("bonusAwarded").is_none());

    let (status, out) = call(
        &app,
        "POST",
        &format!("/api/v1/sessions/{id}/prompt"),
        Some(json!({ "prompt": "make app" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["assessment"]["category"], "vague");
    assert_eq!(out["resources"]["sanity"], 90);
}
