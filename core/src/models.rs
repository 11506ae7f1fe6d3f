use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A PDF picked for upload, as received from the user.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub filename: String,
    /// Declared media type, e.g. "application/pdf". Not sniffed from bytes.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The thing being summarized: either an uploaded PDF or pasted text.
#[derive(Debug, Clone)]
pub enum UploadContent {
    Pdf(PdfUpload),
    Text(String),
}

/// One submission attempt. Lives for a single request and is then dropped.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub content: UploadContent,
    /// Opaque cookie header value copied from the browser; passed through
    /// untouched to authenticate against Velog.
    pub velog_cookie: String,
}

/// What the external backend answers with. Every field is optional because
/// the backend contract is loose; absent fields are simply not relayed.
#[derive(Debug, Default, Deserialize)]
pub struct BackendResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "velogResponse")]
    pub velog_response: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// The proxy's 200 body, reshaped from the backend response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(rename = "velogResponse", skip_serializing_if = "Option::is_none")]
    pub velog_response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
