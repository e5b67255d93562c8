use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::shared::state::AppState;
use crate::{handlers, system};

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

/// CRUD-маршруты оргструктуры: задержка + журнал вызовов
fn org_chart_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // ========================================
        // A001 Org
        // ========================================
        .route(
            "/api/orgs",
            get(handlers::a001_org::list_all).post(handlers::a001_org::create),
        )
        .route("/api/orgs/grid-sync", post(handlers::a001_org::sync_grid))
        .route(
            "/api/orgs/:id",
            get(handlers::a001_org::get_by_id)
                .put(handlers::a001_org::update)
                .patch(handlers::a001_org::patch)
                .delete(handlers::a001_org::delete),
        )
        // ========================================
        // A002 Rank
        // ========================================
        .route(
            "/api/ranks",
            get(handlers::a002_rank::list).post(handlers::a002_rank::create),
        )
        .route("/api/ranks/grid-sync", post(handlers::a002_rank::sync_grid))
        .route(
            "/api/ranks/:id",
            get(handlers::a002_rank::get_by_id)
                .put(handlers::a002_rank::update)
                .patch(handlers::a002_rank::patch)
                .delete(handlers::a002_rank::delete),
        )
        // ========================================
        // A003 User
        // ========================================
        .route(
            "/api/users",
            get(handlers::a003_user::list).post(handlers::a003_user::create),
        )
        .route("/api/users/grid-sync", post(handlers::a003_user::sync_grid))
        .route(
            "/api/users/:id",
            get(handlers::a003_user::get_by_id)
                .put(handlers::a003_user::update)
                .patch(handlers::a003_user::patch)
                .delete(handlers::a003_user::delete),
        )
        // Задержка внутри, журнал снаружи: в журнал попадает итоговый ответ
        .layer(middleware::from_fn_with_state(
            state.latency.clone(),
            system::middleware::simulate_latency,
        ))
        .layer(middleware::from_fn_with_state(
            state.journal.clone(),
            system::middleware::record_api_call,
        ))
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(org_chart_routes(&state))
        // Журнал вызовов сам в журнал не пишется
        .route(
            "/api/logs",
            get(handlers::logs::list_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors_layer())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{LatencyConfig, SeedConfig};
    use crate::shared::data::db::Database;
    use crate::shared::logger::ApiJournal;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> (Router, AppState) {
        let state = AppState::new(
            Database::seeded(&SeedConfig::default()),
            ApiJournal::new(100),
            LatencyConfig::disabled(),
        );
        (configure_routes(state.clone()), state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_org_appends() {
        let (app, _) = test_app();
        let (_, before) = send(&app, Method::GET, "/api/orgs", None).await;
        let before_len = before["data"].as_array().unwrap().len();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/orgs",
            Some(json!({"name": "신규조직", "parentId": "org-1", "isActive": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], 200);
        assert_eq!(body["message"], "조직이 생성되었습니다.");
        assert!(body["data"]["id"].as_str().unwrap().starts_with("org-"));

        let (_, after) = send(&app, Method::GET, "/api/orgs", None).await;
        assert_eq!(after["data"].as_array().unwrap().len(), before_len + 1);
    }

    #[tokio::test]
    async fn test_duplicate_org_name_is_409_with_null_data() {
        let (app, _) = test_app();
        let org = json!({"name": "본사", "parentId": null, "isActive": true});
        let (status, _) = send(&app, Method::POST, "/api/orgs", Some(org.clone())).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::POST, "/api/orgs", Some(org)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn test_delete_org_with_children_is_blocked() {
        let (app, _) = test_app();
        let (status, body) = send(&app, Method::DELETE, "/api/orgs/org-dept-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "하위 조직이 있어 삭제할 수 없습니다.");

        let (status, _) = send(&app, Method::GET, "/api/orgs/org-dept-1", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rank_in_missing_org_is_404() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ranks",
            Some(json!({"orgId": "org-999", "name": "팀장", "level": 2, "isActive": true})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_user_email_uniqueness() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({
                "orgId": "org-dept-1-team-1",
                "rankId": "rank-10",
                "name": "홍새봄",
                "email": "lee.seoyun1@softone.example.com",
                "isActive": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "이미 존재하는 이메일입니다.");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({
                "orgId": "org-dept-1-team-1",
                "rankId": "rank-10",
                "name": "홍새봄",
                "email": "hongsb@example.com",
                "isActive": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let new_id = body["data"]["id"].as_str().unwrap().to_string();

        let (_, users) = send(&app, Method::GET, "/api/users", None).await;
        let users = users["data"].as_array().unwrap();
        assert_eq!(users.len(), 1001);
        assert_eq!(users.last().unwrap()["id"], new_id.as_str());
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (app, _) = test_app();
        let (_, ranks) = send(&app, Method::GET, "/api/ranks?orgId=org-root", None).await;
        let names: Vec<&str> = ranks["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["CEO", "COO", "CFO"]);

        let (_, all) = send(&app, Method::GET, "/api/ranks?orgId=", None).await;
        assert_eq!(all["data"].as_array().unwrap().len(), 363);

        let (_, users) = send(
            &app,
            Method::GET,
            "/api/users?orgId=org-dept-1-team-2&rankId=rank-17",
            None,
        )
        .await;
        let users = users["data"].as_array().unwrap();
        assert!(!users.is_empty());
        assert!(users
            .iter()
            .all(|u| u["orgId"] == "org-dept-1-team-2" && u["rankId"] == "rank-17"));
    }

    #[tokio::test]
    async fn test_empty_patch_keeps_record() {
        let (app, _) = test_app();
        let (_, before) = send(&app, Method::GET, "/api/users/user-5", None).await;
        let (status, after) =
            send(&app, Method::PATCH, "/api/users/user-5", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["data"], before["data"]);
    }

    #[tokio::test]
    async fn test_put_and_missing_records() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/ranks/rank-1",
            Some(json!({"name": "COO"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "이미 존재하는 직급명입니다.");

        let (status, _) = send(&app, Method::DELETE, "/api/users/user-999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_grid_sync_replaces_collection() {
        let (app, _) = test_app();
        let rows = json!({"rows": [
            {"id": "org-1", "name": "본사", "parentId": null, "isActive": true},
            {"id": "org-2", "name": "R&D센터", "parentId": "org-1", "isActive": true},
            {"id": "", "name": "신규 팀", "parentId": "org-2", "isActive": true}
        ]});
        let (status, body) = send(&app, Method::POST, "/api/orgs/grid-sync", Some(rows)).await;
        assert_eq!(status, StatusCode::OK);
        let synced = body["data"].as_array().unwrap();
        assert_eq!(synced.len(), 3);
        assert!(!synced[2]["id"].as_str().unwrap().is_empty());

        let (_, listed) = send(&app, Method::GET, "/api/orgs", None).await;
        assert_eq!(listed["data"], body["data"]);

        let (status, body) =
            send(&app, Method::POST, "/api/orgs/grid-sync", Some(json!({"rows": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "업로드할 조직 데이터가 없습니다.");
    }

    #[tokio::test]
    async fn test_api_calls_are_journaled() {
        let (app, state) = test_app();
        send(&app, Method::GET, "/api/ranks?orgId=org-root", None).await;
        send(
            &app,
            Method::POST,
            "/api/orgs",
            Some(json!({"name": "SOFTONE HQ", "isActive": true})),
        )
        .await;

        let entries = state.journal.list().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].method, "POST");
        assert!(!entries[0].success);
        assert_eq!(entries[0].message.as_deref(), Some("이미 존재하는 조직명입니다."));
        assert_eq!(entries[0].payload.as_ref().unwrap()["name"], "SOFTONE HQ");
        assert_eq!(entries[1].url, "/api/ranks?orgId=org-root");
        assert!(entries[1].success);

        let (status, logs) = send(&app, Method::GET, "/api/logs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(logs["data"].as_array().unwrap().len(), 2);

        send(&app, Method::DELETE, "/api/logs", None).await;
        assert_eq!(state.journal.len().await, 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_and_journaled() {
        let (app, state) = test_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());

        let entries = state.journal.list().await;
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].success);
        assert!(entries[0].payload.is_none());
    }

    #[tokio::test]
    async fn test_client_event_is_recorded_once() {
        let (app, state) = test_app();
        send(&app, Method::GET, "/api/orgs", None).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/logs",
            Some(json!({
                "method": "DELETE",
                "url": "/api/orgs/org-dept-1",
                "success": false,
                "message": "네트워크 오류"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["id"].as_str().unwrap().starts_with("log-"));

        let (_, logs) = send(&app, Method::GET, "/api/logs", None).await;
        let logs = logs["data"].as_array().unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0]["method"], "DELETE");
        assert_eq!(logs[0]["url"], "/api/orgs/org-dept-1");
        assert_eq!(logs[0]["success"], false);
        assert_eq!(logs[0]["message"], "네트워크 오류");
        assert_eq!(logs[1]["url"], "/api/orgs");
        assert_eq!(state.journal.len().await, 2);
    }

    #[tokio::test]
    async fn test_grid_sync_row_without_id_gets_one() {
        let (app, _) = test_app();
        let rows = json!({"rows": [
            {"orgId": "org-root", "name": "고문", "level": 4, "isActive": true}
        ]});
        let (status, body) = send(&app, Method::POST, "/api/ranks/grid-sync", Some(rows)).await;
        assert_eq!(status, StatusCode::OK);
        let synced = body["data"].as_array().unwrap();
        assert_eq!(synced.len(), 1);
        assert!(synced[0]["id"].as_str().unwrap().starts_with("rank-"));
    }
}
