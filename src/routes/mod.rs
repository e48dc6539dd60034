use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, Config};
use crate::handlers::{not_found, ping, ping_db};

pub fn create_routes(config: &Config, pool: PgPool) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/ping/db", get(ping_db))
        .fallback(not_found)
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    fn app(origins: &str) -> Router {
        let config = Config {
            cors_allowed_origins: origins.to_string(),
            ..Config::default()
        };
        // Lazy pool: nothing connects unless /ping/db is hit
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        create_routes(&config, pool)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping_returns_success_envelope() {
        let response = app("")
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["service"], "moonstream-db");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app("")
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_listed_origin_is_allowed() {
        let response = app("https://a.com,https://b.com")
            .oneshot(
                Request::get("/ping")
                    .header(header::ORIGIN, "https://b.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://b.com"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_allow_header() {
        let response = app("https://a.com")
            .oneshot(
                Request::get("/ping")
                    .header(header::ORIGIN, "https://evil.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_wildcard_in_origin_list_allows_any_origin() {
        let response = app("https://a.com,*")
            .oneshot(
                Request::get("/ping")
                    .header(header::ORIGIN, "https://elsewhere.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
