use crate::infra::AppState;
use arc_site::site::{site_router, SiteState};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::path::{Component, Path as FsPath};
use tracing::{debug, warn};

pub(crate) fn with_service_routes(site: SiteState) -> axum::Router {
    site_router(site)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/images/:file", axum::routing::get(image_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Only a single plain file name is served; anything else reads as missing.
fn is_plain_file_name(file: &str) -> bool {
    let mut components = FsPath::new(file).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !file.starts_with('.')
}

pub(crate) async fn image_endpoint(
    Extension(state): Extension<AppState>,
    Path(file): Path<String>,
) -> Response {
    if !is_plain_file_name(&file) {
        debug!(%file, "rejected image path");
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = state.assets.join(&file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type.as_ref().to_string())],
                bytes,
            )
                .into_response()
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unable to read image");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arc_site::enquiry::{EnquirySettings, EnquiryState};
    use arc_site::relay::LogRelay;
    use arc_site::site::SiteContent;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn asset_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arc-site-web-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("asset dir");
        std::fs::write(dir.join("logo.png"), b"\x89PNG fake").expect("write image");
        dir
    }

    fn app(assets: PathBuf, ready: bool) -> axum::Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            assets: Arc::new(assets),
        };
        let site = SiteState::new(
            SiteContent::sree_dhanya_arc(),
            EnquiryState::new(Arc::new(LogRelay), EnquirySettings::default()),
        );
        with_service_routes(site).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> Response {
        app.oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response")
    }

    #[test]
    fn only_plain_file_names_are_served() {
        assert!(is_plain_file_name("arc-main.png"));
        assert!(!is_plain_file_name("../Cargo.toml"));
        assert!(!is_plain_file_name("nested/logo.png"));
        assert!(!is_plain_file_name("/etc/passwd"));
        assert!(!is_plain_file_name(".env"));
    }

    #[tokio::test]
    async fn serves_images_with_guessed_content_type() {
        let response = get(app(asset_dir("serve"), true), "/images/logo.png").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&bytes[..], b"\x89PNG fake");
    }

    #[tokio::test]
    async fn encoded_traversal_and_missing_files_are_not_found() {
        let assets = asset_dir("traversal");
        for uri in ["/images/..%2FCargo.toml", "/images/missing.png"] {
            let response = get(app(assets.clone(), true), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = get(app(asset_dir("ready"), false), "/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = get(app(asset_dir("ready"), true), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
