use super::*;
use std::fs;

#[test]
fn test_format_from_path() {
    assert_eq!(
        DocumentFormat::from_path(Path::new("essay.txt")),
        DocumentFormat::Txt
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("essay.pdf")),
        DocumentFormat::Pdf
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("essay.docx")),
        DocumentFormat::Unknown
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("no_extension")),
        DocumentFormat::Unknown
    );
}

#[test]
fn test_format_from_path_is_case_insensitive() {
    assert_eq!(
        DocumentFormat::from_path(Path::new("ESSAY.TXT")),
        DocumentFormat::Txt
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("Essay.Pdf")),
        DocumentFormat::Pdf
    );
}

#[test]
fn test_extract_txt_reads_whole_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("essay.txt");
    fs::write(&path, "the cat sat on the mat\nsecond line").expect("write");

    let text = extract_file(&path).expect("txt extraction should succeed");
    assert_eq!(text, "the cat sat on the mat\nsecond line");
}

#[test]
fn test_extract_unknown_extension_yields_empty_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("essay.docx");
    fs::write(&path, b"PK\x03\x04 not actually parsed").expect("write");

    let text = extract_file(&path).expect("unknown format is not an error");
    assert_eq!(text, "");
}

#[test]
fn test_extract_missing_txt_is_an_error() {
    let result = extract_file(Path::new("/no/such/file/anywhere.txt"));
    assert!(matches!(
        result,
        Err(ExtractionError::FileUnreadable { .. })
    ));
}

#[test]
fn test_extract_missing_pdf_is_an_error() {
    let result = extract_file(Path::new("/no/such/file/anywhere.pdf"));
    assert!(matches!(
        result,
        Err(ExtractionError::FileUnreadable { .. })
    ));
}

#[test]
fn test_extract_corrupt_pdf_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.pdf");
    fs::write(&path, b"this is not a pdf at all").expect("write");

    let result = extract_file(&path);
    assert!(matches!(result, Err(ExtractionError::PdfParse { .. })));
}

#[test]
fn test_document_source_text_passes_through() {
    let source = DocumentSource::Text("already extracted".to_string());
    assert_eq!(source.resolve().expect("text resolves"), "already extracted");
}

#[test]
fn test_document_source_file_resolves_via_extraction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("essay.txt");
    fs::write(&path, "from a file").expect("write");

    let source = DocumentSource::File(path);
    assert_eq!(source.resolve().expect("file resolves"), "from a file");
}

#[test]
fn test_document_source_from_impls() {
    assert_eq!(
        DocumentSource::from("abc"),
        DocumentSource::Text("abc".to_string())
    );
    assert_eq!(
        DocumentSource::from(PathBuf::from("/x.txt")),
        DocumentSource::File(PathBuf::from("/x.txt"))
    );
}
