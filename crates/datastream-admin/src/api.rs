//! Management REST API endpoints for datastream definitions.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/v1/datastreams` | Create a datastream definition |
//! | `GET` | `/api/v1/datastreams` | List definitions (paged) |
//! | `GET` | `/api/v1/datastreams/metrics` | Metrics snapshot |
//! | `GET` | `/api/v1/datastreams/{name}` | Get a definition by name |
//! | `PUT` | `/api/v1/datastreams/{name}` | Always 405 (updates unsupported) |
//! | `DELETE` | `/api/v1/datastreams/{name}` | Delete a definition |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use datastream_core::{Datastream, PagingContext, ResourceError};
use datastream_server::DatastreamResources;

/// Application state shared across all handlers.
type AppState = Arc<DatastreamResources>;

/// Creates the datastream management REST router.
///
/// All routes are nested under `/api/v1/datastreams`.
pub fn datastream_router(resources: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/datastreams",
            get(list_datastreams).post(create_datastream),
        )
        .route("/api/v1/datastreams/metrics", get(get_metrics))
        .route(
            "/api/v1/datastreams/{name}",
            get(get_datastream)
                .put(update_datastream)
                .delete(delete_datastream),
        )
        .with_state(resources)
}

/// Response for a successful create.
#[derive(Debug, Serialize)]
struct CreatedResponse {
    name: String,
}

/// Response for a successful delete.
#[derive(Debug, Serialize)]
struct DeletedResponse {
    message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(err: &ResourceError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        ResourceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ResourceError::Conflict(_) => StatusCode::CONFLICT,
        ResourceError::NotFound(_) => StatusCode::NOT_FOUND,
        ResourceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ResourceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// `POST /api/v1/datastreams` — create a definition.
async fn create_datastream(
    State(resources): State<AppState>,
    Json(datastream): Json<Datastream>,
) -> impl IntoResponse {
    match resources.create(datastream).await {
        Ok(name) => (StatusCode::CREATED, Json(CreatedResponse { name })).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// `GET /api/v1/datastreams` — list definitions through a paging window.
async fn list_datastreams(
    State(resources): State<AppState>,
    Query(page): Query<PagingContext>,
) -> impl IntoResponse {
    match resources.get_all(page).await {
        Ok(datastreams) => Json(datastreams).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// `GET /api/v1/datastreams/{name}` — get a definition by name.
async fn get_datastream(
    State(resources): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match resources.get(&name).await {
        Ok(Some(datastream)) => Json(datastream).into_response(),
        Ok(None) => error_response(&ResourceError::NotFound(name)).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// `PUT /api/v1/datastreams/{name}` — always 405; updates are unsupported.
async fn update_datastream(
    State(resources): State<AppState>,
    Path(name): Path<String>,
    Json(datastream): Json<Datastream>,
) -> impl IntoResponse {
    match resources.update(&name, &datastream) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// `DELETE /api/v1/datastreams/{name}` — delete a definition.
async fn delete_datastream(
    State(resources): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match resources.delete(&name).await {
        Ok(()) => Json(DeletedResponse {
            message: format!("datastream '{name}' deleted"),
        })
        .into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// `GET /api/v1/datastreams/metrics` — read-only metrics snapshot.
async fn get_metrics(State(resources): State<AppState>) -> impl IntoResponse {
    Json(resources.metrics().snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use datastream_server::DatastreamServer;

    fn test_router() -> Router {
        let server = DatastreamServer::builder()
            .connector_types(["kafka"])
            .build();
        datastream_router(server.resources())
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn definition(name: &str) -> Value {
        json!({
            "name": name,
            "connectorType": "kafka",
            "source": { "connectionString": format!("kafka://broker/{name}") },
        })
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_name() {
        let app = test_router();
        let resp = app
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["name"], "events");
    }

    #[tokio::test]
    async fn create_missing_source_returns_400() {
        let app = test_router();
        let resp = app
            .oneshot(post(
                "/api/v1/datastreams",
                json!({ "name": "events", "connectorType": "kafka" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("source"));
    }

    #[tokio::test]
    async fn create_unknown_connector_returns_400_with_reason() {
        let app = test_router();
        let resp = app
            .oneshot(post(
                "/api/v1/datastreams",
                json!({
                    "name": "events",
                    "connectorType": "mysql",
                    "source": { "connectionString": "mysql://db/events" },
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("mysql"));
    }

    #[tokio::test]
    async fn duplicate_create_returns_409() {
        let app = test_router();
        let resp = app
            .clone()
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = app
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn get_returns_initialized_definition() {
        let app = test_router();
        app.clone()
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datastreams/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["name"], "events");
        // Assigned by the coordinator, not present in the request.
        assert_eq!(
            body["destination"]["connectionString"],
            "kafka://destination/events"
        );
    }

    #[tokio::test]
    async fn get_missing_returns_404() {
        let app = test_router();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datastreams/absent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_applies_paging_window() {
        let app = test_router();
        for name in ["ds-a", "ds-b", "ds-c", "ds-d", "ds-e"] {
            app.clone()
                .oneshot(post("/api/v1/datastreams", definition(name)))
                .await
                .unwrap();
        }

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datastreams?offset=1&count=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|ds| ds["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ds-b", "ds-c"]);
    }

    #[tokio::test]
    async fn update_returns_405() {
        let app = test_router();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/datastreams/events")
                    .header("content-type", "application/json")
                    .body(Body::from(definition("events").to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn delete_returns_200_and_frees_the_name() {
        let app = test_router();
        app.clone()
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/datastreams/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn metrics_snapshot_reports_call_counts() {
        let app = test_router();
        app.clone()
            .oneshot(post("/api/v1/datastreams", definition("events")))
            .await
            .unwrap();
        app.clone()
            .oneshot(post("/api/v1/datastreams", json!({})))
            .await
            .unwrap();

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datastreams/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["createCall"], 2);
        assert_eq!(body["callError"], 1);
        assert_eq!(body["createCallLatency"]["count"], 1);
    }
}
