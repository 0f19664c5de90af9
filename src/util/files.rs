//! Client-side upload constraints and the browser download trigger.
//!
//! Validation runs before any network traffic so a rejected file never
//! costs a round trip. Sizes come from `web_sys::File::size()`, which
//! reports `f64`.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Draft uploads: PDF only, 20 MB cap.
pub const MAX_DRAFT_PDF_BYTES: f64 = 20.0 * 1024.0 * 1024.0;

/// Comment CSV imports: 10 MB cap.
pub const MAX_COMMENT_CSV_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

const PDF_MIME: &str = "application/pdf";

/// Check a draft upload candidate against the PDF MIME type and size cap.
///
/// # Errors
///
/// Returns the validation message to surface in the upload view.
pub fn validate_draft_pdf(name: &str, mime: &str, size: f64) -> Result<(), String> {
    if mime != PDF_MIME {
        return Err(format!(
            "Please upload a PDF file (application/pdf). \"{name}\" is {}.",
            if mime.is_empty() { "of unknown type" } else { mime }
        ));
    }
    if size > MAX_DRAFT_PDF_BYTES {
        return Err("File too large. Max size is 20MB.".to_owned());
    }
    Ok(())
}

/// Check a comments CSV candidate against the `.csv` suffix and size cap.
///
/// # Errors
///
/// Returns the validation message to surface in the bulk upload view.
pub fn validate_comments_csv(name: &str, size: f64) -> Result<(), String> {
    if !name.to_lowercase().ends_with(".csv") {
        return Err("Please upload a valid CSV file (.csv).".to_owned());
    }
    if size > MAX_COMMENT_CSV_BYTES {
        return Err("File too large. Max size is 10MB.".to_owned());
    }
    Ok(())
}

/// Save bytes to disk through a temporary object URL and a synthetic anchor
/// click. The object URL is revoked immediately after the click; the
/// browser keeps the download alive.
#[cfg(feature = "hydrate")]
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) {
    use wasm_bindgen::JsCast as _;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(filename);
        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            anchor.remove();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
