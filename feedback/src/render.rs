//! Pure rendering of feedback payloads into a presentation tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser view maps [`RenderedView`] onto DOM nodes and the CLI prints it
//! with [`RenderedView::to_plain_text`]. Keeping the dispatch here means both
//! surfaces agree on headings, column order, and "N/A" substitution.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::response::{CorrectionRow, FeedbackResponse};

/// Title shown above the correction table.
pub const TABLE_TITLE: &str = "Feedback";
/// Correction table column headers, in display order.
pub const TABLE_COLUMNS: [&str; 4] = ["Sentence", "Error Type", "Description", "Suggestion"];
/// Substituted for any missing correction field.
pub const MISSING_CELL: &str = "N/A";

/// Presentation tree for one feedback panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedView {
    /// Muted hint text shown when there is nothing else to display.
    Notice(String),
    /// Heading followed by a single paragraph.
    Section { heading: String, body: String },
    /// Titled table; every row has exactly `TABLE_COLUMNS.len()` cells.
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Text shown as-is, without a heading.
    Verbatim(String),
}

/// Render a decoded payload.
#[must_use]
pub fn render_response(response: &FeedbackResponse) -> RenderedView {
    match response {
        FeedbackResponse::Section { category, feedback } => RenderedView::Section {
            heading: category.heading().to_owned(),
            body: feedback.clone(),
        },
        FeedbackResponse::Table(rows) => RenderedView::Table {
            title: TABLE_TITLE.to_owned(),
            columns: TABLE_COLUMNS.iter().map(|c| (*c).to_owned()).collect(),
            rows: rows.iter().map(render_row).collect(),
        },
        FeedbackResponse::Verbatim(text) => RenderedView::Verbatim(text.clone()),
        FeedbackResponse::Empty => RenderedView::Verbatim(String::new()),
    }
}

fn render_row(row: &CorrectionRow) -> Vec<String> {
    row.cells()
        .iter()
        .map(|cell| cell.unwrap_or(MISSING_CELL).to_owned())
        .collect()
}

impl RenderedView {
    /// Plain-text rendering for terminals and logs.
    ///
    /// Tables are laid out with columns padded to the widest cell (measured
    /// in chars) and separated by two spaces.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Notice(text) | Self::Verbatim(text) => text.clone(),
            Self::Section { heading, body } => format!("{heading}\n\n{body}"),
            Self::Table {
                title,
                columns,
                rows,
            } => table_plain_text(title, columns, rows),
        }
    }
}

fn table_plain_text(title: &str, columns: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_owned()
    };

    let mut lines = vec![title.to_owned(), String::new(), format_line(columns)];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_line(row)));
    lines.join("\n")
}
