//! Saving binary responses (PDF reports) as browser downloads.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::transport::{ApiResponse, TransportError};

pub const PDF_MIME: &str = "application/pdf";
pub const BOOK_REPORT_FILE: &str = "book_report.pdf";
pub const RENTAL_REPORT_FILE: &str = "rental_report.pdf";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("downloads need a browser")]
    Unavailable,

    #[error("browser rejected the download: {0}")]
    Browser(String),
}

/// Offer `bytes` to the user as `file_name` via a Blob object URL.
///
/// # Errors
///
/// Returns [`DownloadError`] when no DOM is available or a DOM call fails.
pub fn save_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let js_err = |e: wasm_bindgen::JsValue| DownloadError::Browser(format!("{e:?}"));
        let document = web_sys::window().and_then(|w| w.document()).ok_or(DownloadError::Unavailable)?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| DownloadError::Browser("anchor cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, file_name, mime);
        Err(DownloadError::Unavailable)
    }
}

/// Why a report could not be saved.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Save a PDF report response under `file_name`.
///
/// # Errors
///
/// Returns [`ReportError`] when the request failed or the browser refused the
/// download.
pub fn save_report(response: Result<ApiResponse, TransportError>, file_name: &str) -> Result<(), ReportError> {
    let response = response?;
    save_bytes(response.bytes(), file_name, PDF_MIME)?;
    Ok(())
}
