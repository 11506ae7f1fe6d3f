// Shared request/response model, validation, and rendering logic for the
// Velog blog relay. The actual proxy server lives in the ../api folder.

pub mod client;
pub mod markdown;
pub mod models;
pub mod validation;
pub mod velog;

pub use client::{ClientError, RelayClient};
pub use models::{ErrorResponse, PdfUpload, RelayResponse, UploadContent, UploadPayload};
pub use validation::{ValidationError, MAX_PDF_BYTES, PDF_CONTENT_TYPE};
