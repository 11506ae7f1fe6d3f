use serde::Deserialize;

/// JSON-mode request body: pasted text instead of a PDF upload.
#[derive(Deserialize)]
pub struct TextPayload {
    pub content: String,
    #[serde(rename = "velogCookie")]
    pub velog_cookie: String,
}
