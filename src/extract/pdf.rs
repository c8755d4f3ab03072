//! PDF text extraction.
//!
//! Walks every page of the document and concatenates the extracted text.
//! No page-range limits and no OCR: image-only PDFs extract to little or
//! no text, which is accepted, not an error.

use std::path::Path;

use pdf_oxide::PdfDocument;
use pdf_oxide::converters::ConversionOptions;

use tracing::debug;

use super::error::ExtractionError;

fn conversion_options() -> ConversionOptions {
    ConversionOptions {
        include_images: false,
        ..ConversionOptions::default()
    }
}

/// Extracts text from all pages of a PDF, in page order.
pub fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    // Probe readability first so a missing file reports as an I/O error
    // rather than a parse failure.
    std::fs::metadata(path).map_err(|source| ExtractionError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc =
        PdfDocument::open(path.to_string_lossy().as_ref()).map_err(|e| {
            ExtractionError::PdfParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

    let page_count = doc.page_count().map_err(|e| ExtractionError::PdfParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let options = conversion_options();
    let mut output = String::new();

    for page_index in 0..page_count {
        let text = doc
            .to_markdown(page_index, &options)
            .map_err(|e| ExtractionError::PdfParse {
                path: path.to_path_buf(),
                reason: format!("page {}: {}", page_index + 1, e),
            })?;

        if text.trim().is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(text.trim_end());
    }

    debug!(
        path = %path.display(),
        pages = page_count,
        chars = output.len(),
        "Extracted PDF text"
    );

    Ok(output)
}
