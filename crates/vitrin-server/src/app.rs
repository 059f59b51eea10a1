//! Router, handlers, and the permissive CORS layer.
//!
//! The server is a thin veneer over the content directory: handlers map
//! HTTP verbs onto `ContentDir` operations and add nothing else. Any
//! origin may read and write; access control is out of scope.

use std::path::{Component, Path as FsPath, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use libvitrin_core::{Collection, ContentDir, VitrinError};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentDir>,
    pub site_root: PathBuf,
}

impl AppState {
    pub fn new(content: ContentDir, site_root: impl Into<PathBuf>) -> Self {
        Self {
            content: Arc::new(content),
            site_root: site_root.into(),
        }
    }
}

/// Error envelope returned for failed content operations
struct ApiError(VitrinError);

impl From<VitrinError> for ApiError {
    fn from(e: VitrinError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            VitrinError::NotFound(_) => StatusCode::NOT_FOUND,
            VitrinError::InvalidArgs(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!(error = %self.0, "request failed");
        }
        let body = json!({
            "error": self.0.to_string(),
            "code": self.0.error_code(),
        });
        (status, Json(body)).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/content/*path",
            get(get_content).put(put_content).delete(delete_content),
        )
        .route("/admin/config.yml", get(get_admin_config))
        .fallback(get_site_file)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Permissive CORS on every response; preflight requests short-circuit
async fn cors(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, X-Requested-With, Content-Type, Accept, Authorization"),
    );
    response
}

/// Serve one content file verbatim; clients parse, the server does not
async fn get_content(
    State(state): State<AppState>,
    Path(rel): Path<String>,
) -> Result<Response, ApiError> {
    let bytes = state.content.read_bytes(&rel)?;
    debug!(rel, "served content file");
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Write one content file. A collection member write also registers the
/// file in that collection's index.
async fn put_content(
    State(state): State<AppState>,
    Path(rel): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    match Collection::split_member(&rel) {
        Some((collection, file)) => state.content.write_member(collection, file, &value)?,
        None => state.content.write(&rel, &value)?,
    }
    info!(rel, "saved content file");
    Ok(Json(json!({
        "success": true,
        "message": format!("Saved {}", rel),
    })))
}

/// Delete one content file. A delete inside a folder also drops the
/// file from that folder's index when one exists; nothing cascades
/// further.
async fn delete_content(
    State(state): State<AppState>,
    Path(rel): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match split_folder_member(&rel) {
        Some((dir, file)) => state.content.delete_member(dir, file)?,
        None => state.content.delete(&rel)?,
    }
    info!(rel, "deleted content file");
    Ok(Json(json!({
        "success": true,
        "message": format!("Deleted {}", rel),
    })))
}

/// `<folder>/<file>` paths one level deep, excluding the index file itself
fn split_folder_member(rel: &str) -> Option<(&str, &str)> {
    let (dir, file) = rel.split_once('/')?;
    if file.contains('/') || file == "index.json" {
        return None;
    }
    Some((dir, file))
}

async fn get_admin_config(State(state): State<AppState>) -> Response {
    match std::fs::read(state.site_root.join("admin/config.yml")) {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/yaml; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(_) => ApiError(VitrinError::file_not_found("admin/config.yml")).into_response(),
    }
}

/// Static site files, with the single-page fallback to `index.html`
async fn get_site_file(State(state): State<AppState>, uri: Uri) -> Response {
    let rel = uri.path().trim_start_matches('/');
    let path = match resolve_site_path(&state.site_root, rel) {
        Some(path) => path,
        None => return StatusCode::BAD_REQUEST.into_response(),
    };

    let path = if path.is_file() {
        path
    } else {
        state.site_root.join("index.html")
    };

    match std::fs::read(&path) {
        Ok(bytes) => {
            let mime = mime_for(&path);
            Response::builder()
                .header(header::CONTENT_TYPE, mime)
                .body(Body::from(bytes))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Resolve a request path under the site root, rejecting traversal
fn resolve_site_path(root: &FsPath, rel: &str) -> Option<PathBuf> {
    let rel = if rel.is_empty() { "index.html" } else { rel };
    for component in FsPath::new(rel).components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }
    Some(root.join(rel))
}

fn mime_for(path: &FsPath) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("yml") | Some("yaml") => "text/yaml; charset=utf-8",
        _ => "application/octet-stream",
    }
}
