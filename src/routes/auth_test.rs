use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use time::{Duration, OffsetDateTime};
use tower::ServiceExt;

use crate::routes::app;
use crate::session::Session;
use crate::state::test_helpers::{ann, failing_state, memory_state};

async fn get_me(router: axum::Router, cookie: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut request = Request::get("/api/auth/me");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn me_without_cookie_is_null() {
    let (state, _source) = memory_state();
    let (status, json) = get_me(app(state), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn me_with_empty_cookie_is_null() {
    let (state, _source) = memory_state();
    let (status, json) = get_me(app(state), Some("session_token=")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn me_with_unknown_token_is_null() {
    let (state, _source) = memory_state();
    let (status, json) = get_me(app(state), Some("session_token=nope")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn me_returns_session_user() {
    let (state, source) = memory_state();
    source.insert("tok-1", Session::for_user(ann())).await;

    let (status, json) = get_me(app(state), Some("session_token=tok-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "id": "u1", "name": "Ann" }));
}

#[tokio::test]
async fn me_finds_cookie_among_others() {
    let (state, source) = memory_state();
    source.insert("tok-2", Session::for_user(ann())).await;

    let (_, json) = get_me(app(state), Some("theme=dark; session_token=tok-2; lang=en")).await;
    assert_eq!(json["id"], "u1");
}

#[tokio::test]
async fn me_ignores_other_cookie_names() {
    let (state, source) = memory_state();
    source.insert("tok-3", Session::for_user(ann())).await;

    let (_, json) = get_me(app(state), Some("sid=tok-3")).await;
    assert!(json.is_null());
}

#[tokio::test]
async fn me_session_without_user_is_null() {
    let (state, source) = memory_state();
    source.insert("anon", Session::default()).await;

    let (status, json) = get_me(app(state), Some("session_token=anon")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn me_expired_session_is_null() {
    let (state, source) = memory_state();
    let expired = Session { user: Some(ann()), expires_at: Some(OffsetDateTime::now_utc() - Duration::hours(1)) };
    source.insert("old", expired).await;

    let (_, json) = get_me(app(state), Some("session_token=old")).await;
    assert!(json.is_null());
}

#[tokio::test]
async fn me_source_failure_degrades_to_null() {
    let (status, json) = get_me(app(failing_state()), Some("session_token=tok")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());
}

#[tokio::test]
async fn me_is_stable_across_requests() {
    let (state, source) = memory_state();
    source.insert("tok-4", Session::for_user(ann())).await;
    let router = app(state);

    let (_, first) = get_me(router.clone(), Some("session_token=tok-4")).await;
    let (_, second) = get_me(router, Some("session_token=tok-4")).await;
    assert_eq!(first, second);
}
