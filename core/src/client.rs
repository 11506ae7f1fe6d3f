use crate::models::{ErrorResponse, RelayResponse, UploadContent, UploadPayload};
use crate::validation::{validate_payload, ValidationError};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// The submission path of the upload form: validate locally, then issue
/// exactly one request to the relay. A payload that fails validation never
/// touches the network.
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn submit(&self, payload: UploadPayload) -> Result<RelayResponse, ClientError> {
        validate_payload(&payload)?;

        let url = format!("{}/api/generate-blog", self.base_url);
        let request = match payload.content {
            UploadContent::Pdf(upload) => {
                let part = Part::bytes(upload.bytes)
                    .file_name(upload.filename)
                    .mime_str(&upload.content_type)?;
                let form = Form::new()
                    .part("pdf_file", part)
                    .text("velog_cookie", payload.velog_cookie);
                self.client.post(&url).multipart(form)
            }
            UploadContent::Text(content) => self.client.post(&url).json(&json!({
                "content": content,
                "velogCookie": payload.velog_cookie,
            })),
        };

        log::info!("Submitting to {}", url);
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<RelayResponse>().await?)
    }
}
