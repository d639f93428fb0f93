//! User endpoints: registration, login and profile lookup

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::account::Account;
use crate::infrastructure::account::RegisterAccountRequest;

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/login", post(login))
        .route("/{user_id}", get(get_profile))
}

/// Registration request. Fields are optional at the wire level so an
/// absent field and an empty one are rejected the same way.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Account response - the only shape in which an account ever leaves the
/// service. There is no password field here by construction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            username: account.username().to_string(),
            email: account.email().to_string(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

/// Login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_id: String,
}

/// Register a new account
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .account_service
        .register(RegisterAccountRequest {
            username: request.username.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::from_account(&account)),
    ))
}

/// Login with username and password
///
/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let account = state
        .account_service
        .authenticate(
            request.username.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: account.id().to_string(),
    }))
}

/// Get an account profile by id
///
/// GET /users/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.account_service.get(&user_id).await?;

    Ok(Json(AccountResponse::from_account(&account)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router::create_router;

    fn app() -> Router {
        create_router(crate::create_app_state())
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_path(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn alice() -> Value {
        json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "pw1"
        })
    }

    #[tokio::test]
    async fn test_register_returns_projection_without_password() {
        let app = app();

        let (status, body) = post_json(&app, "/users", alice()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body.get("id").is_some());
        assert_eq!(body["username"], "alice");
        assert_eq!(body["email"], "a@x.com");
        assert!(body.get("createdAt").is_some());
        assert!(body.get("password").is_none());
        assert!(!body.to_string().contains("pw1"));
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let app = app();

        let (status, _) = post_json(&app, "/users", alice()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = post_json(
            &app,
            "/users",
            json!({"username": "alice", "email": "other@x.com", "password": "pw2"}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let app = app();

        post_json(&app, "/users", alice()).await;

        let (status, _) = post_json(
            &app,
            "/users",
            json!({"username": "bob", "email": "a@x.com", "password": "pw2"}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_empty_username_is_bad_request() {
        let app = app();

        let (status, body) = post_json(
            &app,
            "/users",
            json!({"username": "", "email": "a@x.com", "password": "pw1"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: username");
    }

    #[tokio::test]
    async fn test_register_missing_field_is_bad_request() {
        let app = app();

        let (status, _) = post_json(
            &app,
            "/users",
            json!({"username": "alice", "email": "a@x.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let app = app();

        let (_, registered) = post_json(&app, "/users", alice()).await;

        let (status, body) = post_json(
            &app,
            "/users/login",
            json!({"username": "alice", "password": "pw1"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["userId"], registered["id"]);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let app = app();

        post_json(&app, "/users", alice()).await;

        let (status, body) = post_json(
            &app,
            "/users/login",
            json!({"username": "alice", "password": "wrong"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_user_matches_wrong_password_response() {
        let app = app();

        post_json(&app, "/users", alice()).await;

        let (wrong_status, wrong_body) = post_json(
            &app,
            "/users/login",
            json!({"username": "alice", "password": "wrong"}),
        )
        .await;
        let (unknown_status, unknown_body) = post_json(
            &app,
            "/users/login",
            json!({"username": "nobody", "password": "pw1"}),
        )
        .await;

        assert_eq!(wrong_status, unknown_status);
        assert_eq!(wrong_body, unknown_body);
    }

    #[tokio::test]
    async fn test_get_profile_matches_registration() {
        let app = app();

        let (_, registered) = post_json(&app, "/users", alice()).await;
        let id = registered["id"].as_str().unwrap();

        let (status, body) = get_path(&app, &format!("/users/{}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, registered);
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_get_profile_unknown_id_is_not_found() {
        let app = app();

        let (status, body) =
            get_path(&app, "/users/00000000-0000-4000-8000-000000000000").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_get_profile_garbage_id_is_not_found() {
        let app = app();

        let (status, _) = get_path(&app, "/users/not-a-real-id").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_body_is_internal_error() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_registrations_admit_exactly_one() {
        let app = app();

        let mut handles = Vec::new();

        for i in 0..8 {
            let app = app.clone();
            handles.push(tokio::spawn(async move {
                let body = json!({
                    "username": "alice",
                    "email": format!("alice-{}@x.com", i),
                    "password": "pw1"
                });

                let response = app
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/users")
                            .header(header::CONTENT_TYPE, "application/json")
                            .body(Body::from(body.to_string()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();

                response.status()
            }));
        }

        let mut created = 0;
        let mut conflicts = 0;

        for handle in handles {
            match handle.await.unwrap() {
                StatusCode::CREATED => created += 1,
                StatusCode::CONFLICT => conflicts += 1,
                other => panic!("unexpected status: {}", other),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 7);
    }
}
