use axum::extract::{DefaultBodyLimit, FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use blog_core::models::{BackendResponse, ErrorResponse, PdfUpload, RelayResponse};
use blog_core::validation::{validate_cookie, validate_pdf, validate_text, ValidationError};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::text_payload::TextPayload;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/post";

const DEFAULT_SUCCESS_MESSAGE: &str = "PDF analyzed and posted to Velog!";

// Headroom above the 10 MiB upload cap so the oversize check runs in the
// handler instead of tripping axum's body limit first.
const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

pub struct RelayState {
    pub client: Client,
    pub backend_url: String,
}

impl RelayState {
    pub fn new(backend_url: String) -> Self {
        Self {
            client: Client::new(),
            backend_url,
        }
    }
}

pub fn app(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/api/generate-blog", post(handle_generate_blog))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn upstream_error(message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Stateless relay: re-validate the submission, forward it to the backend
/// once, and reshape the backend's JSON into the client contract. Accepts
/// a multipart PDF upload or a JSON text body, keyed off Content-Type.
pub async fn handle_generate_blog(
    State(state): State<Arc<RelayState>>,
    request: Request,
) -> Result<Json<RelayResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|_| bad_request("Invalid multipart form data."))?;
        let (pdf, cookie) = read_upload_form(multipart).await?;

        validate_pdf(&pdf).map_err(|e| bad_request(e.to_string()))?;
        validate_cookie(&cookie).map_err(|e| bad_request(e.to_string()))?;

        log::info!(
            "[{}] Relaying PDF '{}' ({} bytes) to {}",
            request_id,
            pdf.filename,
            pdf.bytes.len(),
            state.backend_url
        );
        forward_pdf(&state, pdf, cookie, request_id).await
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), BODY_LIMIT_BYTES)
            .await
            .map_err(|_| bad_request("Failed to read request body."))?;
        let payload: TextPayload = serde_json::from_slice(&bytes)
            .map_err(|_| bad_request("A JSON body with 'content' and 'velogCookie' is required."))?;

        validate_text(&payload.content).map_err(|e| bad_request(e.to_string()))?;
        validate_cookie(&payload.velog_cookie).map_err(|e| bad_request(e.to_string()))?;

        log::info!(
            "[{}] Relaying text ({} chars) to {}",
            request_id,
            payload.content.chars().count(),
            state.backend_url
        );
        forward_text(&state, payload, request_id).await
    }
}

async fn read_upload_form(mut multipart: Multipart) -> Result<(PdfUpload, String), ApiError> {
    let mut pdf: Option<PdfUpload> = None;
    let mut cookie = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| bad_request("Invalid multipart form data."))?
    {
        match field.name() {
            Some("pdf_file") => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| bad_request("Failed to read the uploaded file."))?;
                pdf = Some(PdfUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("velog_cookie") => {
                cookie = field
                    .text()
                    .await
                    .map_err(|_| bad_request("Failed to read the cookie field."))?;
            }
            _ => {}
        }
    }

    let pdf = pdf.ok_or_else(|| bad_request(ValidationError::MissingFile.to_string()))?;
    Ok((pdf, cookie))
}

async fn forward_pdf(
    state: &RelayState,
    pdf: PdfUpload,
    cookie: String,
    request_id: Uuid,
) -> Result<Json<RelayResponse>, ApiError> {
    let part = Part::bytes(pdf.bytes)
        .file_name(pdf.filename)
        .mime_str(&pdf.content_type)
        .map_err(|_| bad_request("Invalid file content type."))?;
    let form = Form::new()
        .part("pdf_file", part)
        .text("velog_cookie", cookie);

    let response = state
        .client
        .post(&state.backend_url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| upstream_error(format!("Backend API unreachable: {}", e)))?;

    reshape(response, request_id).await
}

async fn forward_text(
    state: &RelayState,
    payload: TextPayload,
    request_id: Uuid,
) -> Result<Json<RelayResponse>, ApiError> {
    // JSON mode uses the backend's own field names.
    let response = state
        .client
        .post(&state.backend_url)
        .json(&json!({
            "body": payload.content,
            "velog_cookie": payload.velog_cookie,
        }))
        .send()
        .await
        .map_err(|e| upstream_error(format!("Backend API unreachable: {}", e)))?;

    reshape(response, request_id).await
}

async fn reshape(
    response: reqwest::Response,
    request_id: Uuid,
) -> Result<Json<RelayResponse>, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        log::error!(
            "[{}] Backend returned {}: {}",
            request_id,
            status.as_u16(),
            error_text
        );
        return Err(upstream_error(format!(
            "Backend API error: {} {}",
            status.as_u16(),
            error_text
        )));
    }

    let backend: BackendResponse = response.json().await.map_err(|e| {
        log::error!("[{}] Unparseable backend response: {}", request_id, e);
        upstream_error("Backend returned an unreadable response.")
    })?;

    log::info!("[{}] Backend success, relaying result", request_id);
    Ok(Json(RelayResponse {
        success: true,
        velog_response: backend.velog_response,
        message: Some(
            backend
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        ),
        title: backend.title,
        summary: backend.summary,
        body: backend.body,
        tags: backend.tags,
    }))
}
