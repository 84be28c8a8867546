use super::*;

#[test]
fn media_type_guessed_from_extension() {
    assert_eq!(
        media_type_for_name("essay.docx"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(media_type_for_name("OLD.DOC"), "application/msword");
    assert_eq!(media_type_for_name("notes.txt"), "application/octet-stream");
    assert_eq!(media_type_for_name("no_extension"), "application/octet-stream");
}

#[test]
fn declared_type_wins_over_guess() {
    let file = SelectedFile::new("essay.docx", Some("application/x-custom"), vec![1, 2, 3]);
    assert_eq!(file.media_type, "application/x-custom");
    assert_eq!(file.size(), 3);
}

#[test]
fn blank_declared_type_falls_back_to_guess() {
    let file = SelectedFile::new("essay.doc", Some("  "), Vec::new());
    assert_eq!(file.media_type, "application/msword");
}

#[test]
fn advisory_limit_is_exclusive() {
    let at_limit = SelectedFile::new("a.docx", None, vec![0; ADVISORY_UPLOAD_LIMIT_BYTES]);
    assert!(!at_limit.exceeds_advisory_limit());

    let over = SelectedFile::new("a.docx", None, vec![0; ADVISORY_UPLOAD_LIMIT_BYTES + 1]);
    assert!(over.exceeds_advisory_limit());
}

#[test]
fn format_size_picks_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(ADVISORY_UPLOAD_LIMIT_BYTES * 2), "2.0 MB");
}
