//! Feedback view state: draft input, chosen file, last response, busy flag.
//!
//! DESIGN
//! ======
//! The session is a plain struct held in one `RwSignal` so the request
//! lifecycle (`begin_*` → network → `settle`) can be exercised without a
//! browser. `begin_*` is the only way to mark the view busy and refuses while
//! a request is outstanding, which keeps at most one request in flight even
//! if a disabled control is bypassed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use feedback::{
    ApiError, ERROR_MESSAGE, FeedbackResponse, RenderedView, SelectedFile, Submission,
    render_response,
};

/// Shown in the output pane before the first request.
pub const PLACEHOLDER_TEXT: &str = "AI generated feedback will appear here.";

/// Shown in the output pane while a request is in flight.
pub const LOADING_TEXT: &str = "Loading... Because it's currently running on a free server, large texts may even take up to a minute to process.";

/// Outcome of the most recent request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseSlot {
    Received(FeedbackResponse),
    /// Rendered as [`ERROR_MESSAGE`].
    Failed,
}

impl ResponseSlot {
    #[must_use]
    pub fn from_result(result: Result<FeedbackResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self::Received(response),
            Err(_) => Self::Failed,
        }
    }
}

/// Why a submission was refused before any request was sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a request is already in flight")]
    Busy,
    #[error("there is no text to submit")]
    EmptyInput,
    #[error("no file has been chosen")]
    NoFile,
}

/// State owned by the feedback page.
///
/// Provided to components as `RwSignal<FeedbackSession>` via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackSession {
    pub input: String,
    pub file: Option<SelectedFile>,
    pub response: Option<ResponseSlot>,
    pub busy: bool,
    pub banner_visible: bool,
    /// Bumped on every file choice. A file read started under an older
    /// value is dropped when it completes.
    pub file_pick: u64,
}

impl Default for FeedbackSession {
    fn default() -> Self {
        Self {
            input: String::new(),
            file: None,
            response: None,
            busy: false,
            banner_visible: true,
            file_pick: 0,
        }
    }
}

impl FeedbackSession {
    /// Text submission is allowed: some input and nothing in flight.
    #[must_use]
    pub fn can_submit_text(&self) -> bool {
        !self.busy && !self.input.is_empty()
    }

    /// File submission is allowed: a file is chosen and nothing in flight.
    #[must_use]
    pub fn can_submit_file(&self) -> bool {
        !self.busy && self.file.is_some()
    }

    /// Mark the session busy and hand back the text request to send.
    ///
    /// # Errors
    ///
    /// Refuses with [`SubmitRejected::Busy`] while a request is outstanding,
    /// or [`SubmitRejected::EmptyInput`] when there is no text.
    pub fn begin_text(&mut self) -> Result<Submission, SubmitRejected> {
        if self.busy {
            return Err(SubmitRejected::Busy);
        }
        if self.input.is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        self.busy = true;
        Ok(Submission::Text(self.input.clone()))
    }

    /// Mark the session busy and hand back the upload request to send.
    ///
    /// # Errors
    ///
    /// Refuses with [`SubmitRejected::Busy`] while a request is outstanding,
    /// or [`SubmitRejected::NoFile`] when no file is chosen.
    pub fn begin_file(&mut self) -> Result<Submission, SubmitRejected> {
        if self.busy {
            return Err(SubmitRejected::Busy);
        }
        let Some(file) = &self.file else {
            return Err(SubmitRejected::NoFile);
        };
        let submission = Submission::File(file.clone());
        self.busy = true;
        Ok(submission)
    }

    /// Record the outcome of the outstanding request and clear the busy flag.
    ///
    /// The previous response is always replaced.
    pub fn settle(&mut self, result: Result<FeedbackResponse, ApiError>) {
        match &result {
            Ok(response) => {
                log::debug!(
                    "feedback received (category: {})",
                    response.category_label().unwrap_or("verbatim")
                );
            }
            Err(error) => log::warn!("feedback request failed: {error}"),
        }
        self.response = Some(ResponseSlot::from_result(result));
        self.busy = false;
    }

    /// Replace the chosen file; `None` clears it. Supersedes any pending
    /// read from [`Self::begin_file_pick`].
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file_pick += 1;
        self.file = file;
    }

    /// Start choosing a file whose bytes arrive later.
    ///
    /// Clears the current file so the old document cannot be uploaded while
    /// the new one is read, and returns the token to hand to
    /// [`Self::finish_file_pick`].
    pub fn begin_file_pick(&mut self) -> u64 {
        self.select_file(None);
        self.file_pick
    }

    /// Store the result of a read started with [`Self::begin_file_pick`].
    ///
    /// Returns `false`, leaving state untouched, when a newer choice has been
    /// made since.
    pub fn finish_file_pick(&mut self, pick: u64, file: Option<SelectedFile>) -> bool {
        if pick != self.file_pick {
            log::debug!("dropping stale file read (pick {pick}, current {})", self.file_pick);
            return false;
        }
        self.file = file;
        true
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_visible = false;
    }

    /// What the output pane shows right now.
    ///
    /// Busy wins over any previous response so stale feedback is never shown
    /// next to a pending request. A blank response leaves the placeholder up.
    #[must_use]
    pub fn rendered(&self) -> RenderedView {
        if self.busy {
            return RenderedView::Notice(LOADING_TEXT.to_owned());
        }
        match &self.response {
            None | Some(ResponseSlot::Received(FeedbackResponse::Empty)) => {
                RenderedView::Notice(PLACEHOLDER_TEXT.to_owned())
            }
            Some(ResponseSlot::Received(response)) => render_response(response),
            Some(ResponseSlot::Failed) => RenderedView::Verbatim(ERROR_MESSAGE.to_owned()),
        }
    }
}
