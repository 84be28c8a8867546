use super::*;
use crate::response::SectionCategory;

#[test]
fn transition_example_renders_heading_and_paragraph() {
    let response =
        FeedbackResponse::parse_body(r#"{"category":"transition","feedback":"Add a transition word."}"#);
    assert_eq!(
        render_response(&response),
        RenderedView::Section {
            heading: "Feedback on transitional phrases:".to_owned(),
            body: "Add a transition word.".to_owned(),
        }
    );
}

#[test]
fn every_section_category_renders_fixed_heading_and_verbatim_body() {
    let body = "  Keep   spacing <b>as-is</b>\n";
    for category in SectionCategory::ALL {
        let view = render_response(&FeedbackResponse::Section {
            category,
            feedback: body.to_owned(),
        });
        assert_eq!(
            view,
            RenderedView::Section {
                heading: category.heading().to_owned(),
                body: body.to_owned(),
            }
        );
    }
}

#[test]
fn table_renders_columns_in_order_with_missing_cells() {
    let response = FeedbackResponse::Table(vec![
        CorrectionRow {
            sentence: Some("Its late.".to_owned()),
            error_type: Some("Apostrophe".to_owned()),
            description: None,
            suggestion: Some("It's late.".to_owned()),
        },
        CorrectionRow::default(),
    ]);
    let RenderedView::Table {
        title,
        columns,
        rows,
    } = render_response(&response)
    else {
        panic!("expected table");
    };
    assert_eq!(title, "Feedback");
    assert_eq!(columns, ["Sentence", "Error Type", "Description", "Suggestion"]);
    assert_eq!(rows[0], ["Its late.", "Apostrophe", "N/A", "It's late."]);
    assert_eq!(rows[1], ["N/A", "N/A", "N/A", "N/A"]);
}

#[test]
fn empty_table_keeps_headers() {
    let view = render_response(&FeedbackResponse::Table(Vec::new()));
    let RenderedView::Table { columns, rows, .. } = view else {
        panic!("expected table");
    };
    assert_eq!(columns.len(), 4);
    assert!(rows.is_empty());
}

#[test]
fn verbatim_renders_without_heading() {
    let view = render_response(&FeedbackResponse::Verbatim("plain reply".to_owned()));
    assert_eq!(view, RenderedView::Verbatim("plain reply".to_owned()));
    assert_eq!(view.to_plain_text(), "plain reply");
}

#[test]
fn section_plain_text_separates_heading_and_body() {
    let view = RenderedView::Section {
        heading: "Feedback on transitional phrases:".to_owned(),
        body: "Add a transition word.".to_owned(),
    };
    assert_eq!(
        view.to_plain_text(),
        "Feedback on transitional phrases:\n\nAdd a transition word."
    );
}

#[test]
fn table_plain_text_pads_columns() {
    let view = render_response(&FeedbackResponse::Table(vec![CorrectionRow {
        sentence: Some("A long sentence here.".to_owned()),
        error_type: Some("X".to_owned()),
        description: None,
        suggestion: Some("Fix".to_owned()),
    }]));
    let text = view.to_plain_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Feedback");
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "Sentence               Error Type  Description  Suggestion"
    );
    assert_eq!(
        lines[4],
        "A long sentence here.  X           N/A          Fix"
    );
    assert_eq!(lines.len(), 5);
}
