//! Browser file handling for the upload form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The picked `web_sys::File` is read into a [`SelectedFile`] right away so
//! session state stays `Send` and the upload body can be rebuilt from bytes.
//! Browser glue is csr-only; the label helpers are plain functions.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use feedback::SelectedFile;
use feedback::upload::{ADVISORY_UPLOAD_LIMIT_BYTES, format_size};

/// Shown next to the upload button when nothing is chosen.
pub const NO_FILE_LABEL: &str = "No file chosen";

/// Label for the chosen file, e.g. `"essay.docx (12.5 KB)"`.
pub fn file_label(file: Option<&SelectedFile>) -> String {
    match file {
        Some(file) => format!("{} ({})", file.name, format_size(file.size())),
        None => NO_FILE_LABEL.to_owned(),
    }
}

/// Advisory warning for files over the size the API asks for.
pub fn oversize_notice(file: Option<&SelectedFile>) -> Option<String> {
    let file = file.filter(|f| f.exceeds_advisory_limit())?;
    Some(format!(
        "{} is {}; uploads over {} may be rejected or slow.",
        file.name,
        format_size(file.size()),
        format_size(ADVISORY_UPLOAD_LIMIT_BYTES)
    ))
}

/// Read the picked file into memory.
///
/// # Errors
///
/// Returns the browser's error text if the file cannot be read.
#[cfg(feature = "csr")]
pub async fn read_selected_file(file: web_sys::File) -> Result<SelectedFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), Some(file.type_().as_str()), bytes))
}

/// Build the multipart body for `POST /fileupload`.
///
/// # Errors
///
/// Returns the browser's error text if the `Blob` or `FormData` cannot be
/// created.
#[cfg(feature = "csr")]
pub fn upload_form_data(file: &SelectedFile) -> Result<web_sys::FormData, String> {
    let array = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.media_type);
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(feedback::upload::UPLOAD_FIELD, &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}

#[cfg(feature = "csr")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
