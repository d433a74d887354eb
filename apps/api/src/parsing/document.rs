//! Text extraction for uploaded job documents (PDF or plain text).

use crate::errors::AppError;

/// Kind of upload, decided from the declared content type and file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let is_pdf_type = content_type
            .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        let is_pdf_name = file_name
            .map(|name| name.to_lowercase().ends_with(".pdf"))
            .unwrap_or(false);

        if is_pdf_type || is_pdf_name {
            DocumentKind::Pdf
        } else {
            DocumentKind::PlainText
        }
    }
}

/// Converts uploaded bytes to text. Blocking for PDFs; run it off the async
/// runtime.
pub fn document_text(bytes: &[u8], kind: DocumentKind) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}")))?
            // pdf-extract separates pages with form feeds
            .replace('\x0C', "\n"),
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::Validation("uploaded file must be a PDF or UTF-8 text".to_string())
        })?,
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "uploaded file contains no readable text".to_string(),
        ));
    }

    Ok(text)
}
