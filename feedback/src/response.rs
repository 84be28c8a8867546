//! Feedback payloads returned by the writing-assistant API.
//!
//! DESIGN
//! ======
//! The API tags every payload with a free-form `category` string. The five
//! prose categories and the correction table decode into typed variants;
//! everything else keeps its text so the view can show it verbatim. Decoding
//! never fails: an unexpected shape degrades to [`FeedbackResponse::Verbatim`].

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde_json::Value;

/// Category label for the sentence-level correction table.
pub const TABLE_CATEGORY: &str = "table";

/// Prose feedback categories that render as a heading plus one paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionCategory {
    StatementQuality,
    IdeaDevelopment,
    AcademicQuality,
    Transition,
    Sources,
}

impl SectionCategory {
    /// Every prose category, in the order the API documents them.
    pub const ALL: [Self; 5] = [
        Self::StatementQuality,
        Self::IdeaDevelopment,
        Self::AcademicQuality,
        Self::Transition,
        Self::Sources,
    ];

    /// Look up a category by its wire label. Matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "statement quality" => Some(Self::StatementQuality),
            "idea development" => Some(Self::IdeaDevelopment),
            "academic quality" => Some(Self::AcademicQuality),
            "transition" => Some(Self::Transition),
            "sources" => Some(Self::Sources),
            _ => None,
        }
    }

    /// Wire label carried in the `category` field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StatementQuality => "statement quality",
            Self::IdeaDevelopment => "idea development",
            Self::AcademicQuality => "academic quality",
            Self::Transition => "transition",
            Self::Sources => "sources",
        }
    }

    /// Fixed heading shown above the feedback paragraph.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::StatementQuality => {
                "Feedback on the quality of the topic sentence or thesis statement:"
            }
            Self::IdeaDevelopment => "Feedback on the development of ideas throughout the writing:",
            Self::AcademicQuality => "Feedback on the academic quality of the language:",
            Self::Transition => "Feedback on transitional phrases:",
            Self::Sources => "Feedback on the use of sources and evidence:",
        }
    }
}

/// One row of the correction table. Absent fields render as "N/A".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorrectionRow {
    pub sentence: Option<String>,
    /// Wire key `errorType`.
    pub error_type: Option<String>,
    pub description: Option<String>,
    pub suggestion: Option<String>,
}

impl CorrectionRow {
    /// Read a row from one element of the `feedback` array.
    ///
    /// Non-object items yield a row with every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(cell_text);
        Self {
            sentence: field("sentence"),
            error_type: field("errorType"),
            description: field("description"),
            suggestion: field("suggestion"),
        }
    }

    /// Cells in display order: sentence, error type, description, suggestion.
    #[must_use]
    pub fn cells(&self) -> [Option<&str>; 4] {
        [
            self.sentence.as_deref(),
            self.error_type.as_deref(),
            self.description.as_deref(),
            self.suggestion.as_deref(),
        ]
    }
}

/// Empty strings and zero count as missing.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

/// A decoded feedback payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackResponse {
    /// Prose feedback under a fixed heading.
    Section {
        category: SectionCategory,
        feedback: String,
    },
    /// Sentence-level corrections.
    Table(Vec<CorrectionRow>),
    /// Unknown category, bare string, or unexpected shape; shown as-is.
    Verbatim(String),
    /// Blank body: empty, `null`, `false`, `0`, or `""`. The view keeps its
    /// placeholder.
    Empty,
}

impl FeedbackResponse {
    /// Decode a raw response body.
    ///
    /// Bodies that parse as JSON go through [`Self::from_value`]; anything
    /// else is plain text and becomes [`Self::Verbatim`] unchanged. A
    /// zero-length body is [`Self::Empty`].
    #[must_use]
    pub fn parse_body(body: &str) -> Self {
        if body.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::Verbatim(body.to_owned()),
        }
    }

    /// Decode an already-parsed JSON payload.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if is_blank(&value) {
            return Self::Empty;
        }
        let Some(label) = value.get("category").and_then(Value::as_str) else {
            return Self::Verbatim(verbatim_text(value));
        };

        if label == TABLE_CATEGORY {
            if let Some(Value::Array(items)) = value.get("feedback") {
                return Self::Table(items.iter().map(CorrectionRow::from_value).collect());
            }
            log::debug!("table payload without a feedback array; showing verbatim");
            return Self::Verbatim(verbatim_text(value));
        }

        match (SectionCategory::from_label(label), value.get("feedback")) {
            (Some(category), Some(Value::String(feedback))) => Self::Section {
                category,
                feedback: feedback.clone(),
            },
            (Some(category), _) => {
                log::debug!(
                    "{} payload without feedback text; showing verbatim",
                    category.label()
                );
                Self::Verbatim(verbatim_text(value))
            }
            (None, _) => Self::Verbatim(verbatim_text(value)),
        }
    }

    /// Wire category label, when the payload decoded into a typed variant.
    #[must_use]
    pub fn category_label(&self) -> Option<&'static str> {
        match self {
            Self::Section { category, .. } => Some(category.label()),
            Self::Table(_) => Some(TABLE_CATEGORY),
            Self::Verbatim(_) | Self::Empty => None,
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn verbatim_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
