use crate::models::{PdfUpload, UploadContent, UploadPayload};
use thiserror::Error;

/// Hard cap on uploaded PDFs: 10 MiB.
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Everything that can be wrong with a submission before any network call.
/// The same checks run on the client and again in the proxy, which must not
/// trust the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A PDF file is required.")]
    MissingFile,
    #[error("Only PDF files can be uploaded.")]
    InvalidFileType,
    #[error("File size must be 10MB or less.")]
    FileTooLarge,
    #[error("A Velog cookie is required.")]
    MissingCookie,
    #[error("Text content is required.")]
    MissingContent,
}

pub fn validate_pdf(upload: &PdfUpload) -> Result<(), ValidationError> {
    if upload.content_type != PDF_CONTENT_TYPE {
        return Err(ValidationError::InvalidFileType);
    }
    if upload.bytes.len() > MAX_PDF_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

pub fn validate_cookie(cookie: &str) -> Result<(), ValidationError> {
    if cookie.trim().is_empty() {
        return Err(ValidationError::MissingCookie);
    }
    Ok(())
}

pub fn validate_text(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::MissingContent);
    }
    Ok(())
}

pub fn validate_payload(payload: &UploadPayload) -> Result<(), ValidationError> {
    match &payload.content {
        UploadContent::Pdf(upload) => validate_pdf(upload)?,
        UploadContent::Text(content) => validate_text(content)?,
    }
    validate_cookie(&payload.velog_cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(content_type: &str, len: usize) -> PdfUpload {
        PdfUpload {
            filename: "notes.pdf".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0u8; len],
        }
    }

    #[test]
    fn rejects_non_pdf_media_type() {
        let err = validate_pdf(&pdf("text/plain", 1024)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidFileType);
    }

    #[test]
    fn rejects_oversized_pdf() {
        let err = validate_pdf(&pdf(PDF_CONTENT_TYPE, MAX_PDF_BYTES + 1)).unwrap_err();
        assert_eq!(err, ValidationError::FileTooLarge);
    }

    #[test]
    fn accepts_pdf_at_the_limit() {
        assert!(validate_pdf(&pdf(PDF_CONTENT_TYPE, MAX_PDF_BYTES)).is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_cookie() {
        assert_eq!(validate_cookie("").unwrap_err(), ValidationError::MissingCookie);
        assert_eq!(validate_cookie("  \t\n").unwrap_err(), ValidationError::MissingCookie);
        assert!(validate_cookie("access_token=abc").is_ok());
    }

    #[test]
    fn rejects_empty_text_content() {
        assert_eq!(validate_text("   ").unwrap_err(), ValidationError::MissingContent);
    }

    #[test]
    fn validates_whole_payload() {
        let payload = UploadPayload {
            content: UploadContent::Pdf(pdf(PDF_CONTENT_TYPE, 1024)),
            velog_cookie: "access_token=abc".to_string(),
        };
        assert!(validate_payload(&payload).is_ok());

        let payload = UploadPayload {
            content: UploadContent::Pdf(pdf(PDF_CONTENT_TYPE, 1024)),
            velog_cookie: "   ".to_string(),
        };
        assert_eq!(
            validate_payload(&payload).unwrap_err(),
            ValidationError::MissingCookie
        );
    }
}
