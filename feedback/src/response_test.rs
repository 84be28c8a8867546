use super::*;

// =============================================================
// SectionCategory
// =============================================================

#[test]
fn every_section_label_resolves_to_itself() {
    for category in SectionCategory::ALL {
        assert_eq!(SectionCategory::from_label(category.label()), Some(category));
    }
}

#[test]
fn section_labels_match_exactly() {
    assert_eq!(SectionCategory::from_label("Transition"), None);
    assert_eq!(SectionCategory::from_label(" sources"), None);
    assert_eq!(SectionCategory::from_label(TABLE_CATEGORY), None);
}

#[test]
fn section_headings_are_fixed_text() {
    assert_eq!(
        SectionCategory::StatementQuality.heading(),
        "Feedback on the quality of the topic sentence or thesis statement:"
    );
    assert_eq!(
        SectionCategory::IdeaDevelopment.heading(),
        "Feedback on the development of ideas throughout the writing:"
    );
    assert_eq!(
        SectionCategory::AcademicQuality.heading(),
        "Feedback on the academic quality of the language:"
    );
    assert_eq!(SectionCategory::Transition.heading(), "Feedback on transitional phrases:");
    assert_eq!(
        SectionCategory::Sources.heading(),
        "Feedback on the use of sources and evidence:"
    );
}

// =============================================================
// FeedbackResponse::parse_body
// =============================================================

#[test]
fn parse_body_decodes_section_payload() {
    let response =
        FeedbackResponse::parse_body(r#"{"category":"transition","feedback":"Add a transition word."}"#);
    assert_eq!(
        response,
        FeedbackResponse::Section {
            category: SectionCategory::Transition,
            feedback: "Add a transition word.".to_owned(),
        }
    );
    assert_eq!(response.category_label(), Some("transition"));
}

#[test]
fn parse_body_decodes_table_rows_in_order() {
    let body = r#"{
        "category": "table",
        "feedback": [
            {"sentence": "Me and him went.", "errorType": "Pronoun", "description": "Subject case", "suggestion": "He and I went."},
            {"sentence": "Its late."}
        ]
    }"#;
    let FeedbackResponse::Table(rows) = FeedbackResponse::parse_body(body) else {
        panic!("expected table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].cells(),
        [
            Some("Me and him went."),
            Some("Pronoun"),
            Some("Subject case"),
            Some("He and I went.")
        ]
    );
    assert_eq!(rows[1].cells(), [Some("Its late."), None, None, None]);
}

#[test]
fn parse_body_keeps_plain_text_unchanged() {
    assert_eq!(
        FeedbackResponse::parse_body("Looks good overall.\n"),
        FeedbackResponse::Verbatim("Looks good overall.\n".to_owned())
    );
}

#[test]
fn parse_body_unwraps_json_string_payload() {
    assert_eq!(
        FeedbackResponse::parse_body(r#""just a string""#),
        FeedbackResponse::Verbatim("just a string".to_owned())
    );
}

#[test]
fn parse_body_blank_bodies_are_empty() {
    for body in ["", "null", "false", "0", r#""""#] {
        assert_eq!(FeedbackResponse::parse_body(body), FeedbackResponse::Empty, "{body:?}");
    }
}

#[test]
fn parse_body_whitespace_and_true_are_not_blank() {
    assert_eq!(FeedbackResponse::parse_body("  "), FeedbackResponse::Verbatim("  ".to_owned()));
    assert_eq!(FeedbackResponse::parse_body("true"), FeedbackResponse::Verbatim("true".to_owned()));
    assert_eq!(FeedbackResponse::parse_body("[]"), FeedbackResponse::Verbatim("[]".to_owned()));
}

// =============================================================
// Fallbacks
// =============================================================

#[test]
fn unknown_category_falls_back_to_compact_json() {
    let response = FeedbackResponse::from_value(serde_json::json!({
        "category": "grammar",
        "feedback": "Fine."
    }));
    let FeedbackResponse::Verbatim(text) = &response else {
        panic!("expected verbatim");
    };
    assert!(text.contains("\"grammar\""));
    assert!(text.contains("\"Fine.\""));
    assert_eq!(response.category_label(), None);
}

#[test]
fn section_without_feedback_text_falls_back_to_verbatim() {
    let response = FeedbackResponse::from_value(serde_json::json!({
        "category": "sources",
        "feedback": ["not", "text"]
    }));
    assert!(matches!(response, FeedbackResponse::Verbatim(_)));

    let missing = FeedbackResponse::from_value(serde_json::json!({ "category": "sources" }));
    assert!(matches!(missing, FeedbackResponse::Verbatim(_)));
}

#[test]
fn table_without_array_falls_back_to_verbatim() {
    let response = FeedbackResponse::from_value(serde_json::json!({
        "category": "table",
        "feedback": "oops"
    }));
    assert!(matches!(response, FeedbackResponse::Verbatim(_)));
}

#[test]
fn non_string_category_falls_back_to_verbatim() {
    let response = FeedbackResponse::from_value(serde_json::json!({ "category": 3 }));
    assert_eq!(response, FeedbackResponse::Verbatim(r#"{"category":3}"#.to_owned()));
}

#[test]
fn bare_number_renders_as_text() {
    assert_eq!(
        FeedbackResponse::from_value(serde_json::json!(42)),
        FeedbackResponse::Verbatim("42".to_owned())
    );
}

// =============================================================
// CorrectionRow
// =============================================================

#[test]
fn correction_row_treats_empty_and_null_as_missing() {
    let row = CorrectionRow::from_value(&serde_json::json!({
        "sentence": "",
        "errorType": null,
        "description": "Run-on sentence",
    }));
    assert_eq!(row.cells(), [None, None, Some("Run-on sentence"), None]);
}

#[test]
fn correction_row_stringifies_nonzero_numbers_only() {
    let row = CorrectionRow::from_value(&serde_json::json!({
        "sentence": 7,
        "errorType": 0,
        "description": true,
    }));
    assert_eq!(row.sentence.as_deref(), Some("7"));
    assert_eq!(row.error_type, None);
    assert_eq!(row.description, None);
}

#[test]
fn correction_row_from_non_object_is_all_missing() {
    let row = CorrectionRow::from_value(&serde_json::json!("not a row"));
    assert_eq!(row, CorrectionRow::default());
}
