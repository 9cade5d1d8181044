//! File attachments and content-type guessing.

use std::path::Path;

/// A file attachment supplied by the caller.
///
/// Lives only for the duration of one send call. Entries with a blank
/// file name or empty content are silently dropped before submission.
#[derive(Debug, Clone)]
pub struct AttachmentInput {
    /// File name, including extension.
    pub file_name: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
    /// MIME type; guessed from the file extension when not supplied.
    pub content_type: Option<String>,
}

impl AttachmentInput {
    /// Creates an attachment with a content type guessed from the name.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
            content_type: None,
        }
    }

    /// Sets an explicit content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether this attachment survives filtering.
    pub(crate) fn is_usable(&self) -> bool {
        !self.file_name.trim().is_empty() && !self.content.is_empty()
    }

    /// The supplied content type, or one guessed from the file name.
    pub(crate) fn resolved_content_type(&self) -> String {
        match self.content_type.as_deref() {
            Some(ct) if !ct.trim().is_empty() => ct.to_string(),
            _ => guess_content_type(&self.file_name).to_string(),
        }
    }
}

/// Maps a file name's extension to a MIME type, case-insensitively.
///
/// Unknown extensions (and names without one) map to
/// `application/octet-stream`.
#[must_use]
pub fn guess_content_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("ppt") => "application/vnd.ms-powerpoint",
        Some("pptx") => {
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        }
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
