use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::{login, register},
        images::{list_images, upload_image},
        root::index,
        votes::vote,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the API (the frontend runs on another origin)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/upload", post(upload_image))
        .route("/images", get(list_images))
        .route("/images/{id}/vote", post(vote))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    const BOUNDARY: &str = "picshare-test-boundary";

    async fn test_app() -> (Router, std::path::PathBuf) {
        let upload_dir = std::env::temp_dir().join(format!("picshare-test-{}", Uuid::new_v4()));
        let state = AppState::new_in_memory(&upload_dir).await.unwrap();
        (create_app(state), upload_dir)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Builds a multipart upload request. `filename: None` omits the file
    /// part entirely.
    fn upload_request(
        filename: Option<&str>,
        name: Option<&str>,
        description: Option<&str>,
        tags: Option<&str>,
    ) -> Request<Body> {
        let mut body = String::new();
        if let Some(filename) = filename {
            body.push_str(&format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
                 Content-Type: image/png\r\n\r\n\
                 fake image bytes\r\n"
            ));
        }
        for (field, value) in [("name", name), ("description", description), ("tags", tags)] {
            if let Some(value) = value {
                body.push_str(&format!(
                    "--{BOUNDARY}\r\n\
                     Content-Disposition: form-data; name=\"{field}\"\r\n\r\n\
                     {value}\r\n"
                ));
            }
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    /// Registers a user; the first registration gets user id 1, the
    /// identity uploads and votes are attributed to.
    async fn register_user(app: &Router, username: &str) {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/register",
                serde_json::json!({"username": username, "password": "hunter2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    fn sorted_tags(listing: &serde_json::Value) -> Vec<String> {
        let mut tags: Vec<String> = listing["tags"]
            .as_str()
            .unwrap()
            .split(',')
            .map(str::to_string)
            .collect();
        tags.sort();
        tags
    }

    #[tokio::test]
    async fn test_index_page() {
        let (app, _) = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Welcome to the Image Sharing App!");
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let (app, _) = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/register",
                serde_json::json!({"username": "alice", "password": "hunter2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await["message"],
            "User registered successfully"
        );

        let response = app
            .oneshot(json_request(
                "POST",
                "/register",
                serde_json::json!({"username": "alice", "password": "other"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Username already exists");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let (app, _) = test_app().await;

        for body in [
            serde_json::json!({}),
            serde_json::json!({"username": "alice"}),
            serde_json::json!({"username": "alice", "password": ""}),
            serde_json::json!({"password": "hunter2"}),
        ] {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/register", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await["error"],
                "Username and password are required"
            );
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                serde_json::json!({"username": "alice", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["username"], "alice");
        assert_eq!(body["user_id"], 1);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/login",
                serde_json::json!({"username": "alice", "password": "wrong"}),
            ))
            .await
            .unwrap();

        let unknown_user = app
            .oneshot(json_request(
                "POST",
                "/login",
                serde_json::json!({"username": "nobody", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

        let wrong_password = wrong_password.into_body().collect().await.unwrap().to_bytes();
        let unknown_user = unknown_user.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(wrong_password, unknown_user);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&wrong_password).unwrap()["error"],
            "Invalid username or password"
        );
    }

    #[tokio::test]
    async fn test_upload_requires_file_part() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        let response = app
            .oneshot(upload_request(None, None, None, Some("cat")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No image part");
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_filename() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        let response = app
            .oneshot(upload_request(Some(""), None, None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No selected image");
    }

    #[tokio::test]
    async fn test_upload_and_list_round_trip() {
        let (app, upload_dir) = test_app().await;
        register_user(&app, "alice").await;

        let response = app
            .clone()
            .oneshot(upload_request(
                Some("cat.png"),
                Some("My Cat"),
                Some("Best cat"),
                Some("a, a, b"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await["message"],
            "Image uploaded successfully"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/images")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listings = body_json(response).await;
        let listings = listings.as_array().unwrap();
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing["name"], "My Cat");
        assert_eq!(listing["description"], "Best cat");
        assert_eq!(listing["username"], "alice");
        // Duplicate tags in the input collapse to one association each
        assert_eq!(sorted_tags(listing), vec!["a", "b"]);

        // The stored file exists under the upload root
        let stored_name = listing["image_path"].as_str().unwrap();
        assert!(stored_name.ends_with("_cat.png"));
        let on_disk = tokio::fs::read(upload_dir.join(stored_name)).await.unwrap();
        assert_eq!(on_disk, b"fake image bytes");
    }

    #[tokio::test]
    async fn test_list_filter_returns_full_tag_set() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        let response = app
            .clone()
            .oneshot(upload_request(Some("both.png"), None, None, Some("x, y")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(upload_request(Some("only.png"), None, None, Some("y")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/images?tag=x")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listings = body_json(response).await;
        let listings = listings.as_array().unwrap();
        assert_eq!(listings.len(), 1);

        // The match on tag "x" still lists its full tag set
        assert_eq!(sorted_tags(&listings[0]), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_vote_records_and_overwrites() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        let response = app
            .clone()
            .oneshot(upload_request(Some("cat.png"), None, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        for vote in [1, -1] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/images/1/vote",
                    serde_json::json!({"vote": vote}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await["message"],
                "Vote recorded successfully"
            );
        }
    }

    #[tokio::test]
    async fn test_vote_rejects_invalid_values() {
        let (app, _) = test_app().await;
        register_user(&app, "alice").await;

        for body in [
            serde_json::json!({"vote": 0}),
            serde_json::json!({"vote": 5}),
            serde_json::json!({}),
        ] {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/images/1/vote", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await["error"], "Invalid vote value");
        }
    }
}
