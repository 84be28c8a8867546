//! Documents selected for upload.
//!
//! Holds the file contents in memory so the same value can be sent by the
//! browser (`FormData` + `Blob`) or by a native client (multipart part).

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Multipart field name the upload endpoint reads.
pub const UPLOAD_FIELD: &str = "file";

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &str = ".docx, .doc";

/// Size the API asks uploads to stay under. Advisory; uploads are not blocked.
pub const ADVISORY_UPLOAD_LIMIT_BYTES: usize = 1024 * 1024;

const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MEDIA_TYPE: &str = "application/msword";
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// A document picked by the user, fully read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Build a selection, keeping `declared_type` when the source supplied
    /// one and guessing from the file name otherwise.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let media_type = match declared_type.map(str::trim) {
            Some(declared) if !declared.is_empty() => declared.to_owned(),
            _ => media_type_for_name(&name).to_owned(),
        };
        Self {
            name,
            media_type,
            bytes,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is over the size the API asks uploads to respect.
    #[must_use]
    pub fn exceeds_advisory_limit(&self) -> bool {
        self.size() > ADVISORY_UPLOAD_LIMIT_BYTES
    }
}

/// Guess a media type from a file name's extension (case-insensitive).
#[must_use]
pub fn media_type_for_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "docx" => DOCX_MEDIA_TYPE,
        "doc" => DOC_MEDIA_TYPE,
        _ => FALLBACK_MEDIA_TYPE,
    }
}

/// Human-readable size, e.g. `"512 B"`, `"12.5 KB"`, `"1.2 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < MB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / MB)
    }
}
