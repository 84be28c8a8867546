//! The single writing-assistant page: input on the left, feedback on the right.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use feedback::Submission;
use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::feedback_output::FeedbackOutput;
use crate::components::submit_panel::SubmitPanel;
use crate::state::session::{FeedbackSession, SubmitRejected};

/// Page title shown above the panels.
pub const PAGE_TITLE: &str = "AI Writing Assistant";

/// Which control triggered a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SubmitSource {
    Text,
    Upload,
}

/// Run the session guard for `source`, marking the session busy on success.
pub(crate) fn begin_submission(
    session: &mut FeedbackSession,
    source: SubmitSource,
) -> Result<Submission, SubmitRejected> {
    match source {
        SubmitSource::Text => session.begin_text(),
        SubmitSource::Upload => session.begin_file(),
    }
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<FeedbackSession>>();

    let submit = move |source: SubmitSource| {
        let Some(begun) = session.try_update(|s| begin_submission(s, source)) else {
            return;
        };
        let submission = match begun {
            Ok(submission) => submission,
            Err(rejected) => {
                log::debug!("{source:?} submission ignored: {rejected}");
                return;
            }
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::feedback_client()
                .submit(&submission)
                .await;
            session.update(|s| s.settle(result));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = submission;
        }
    };

    let on_submit_text = Callback::new(move |()| submit(SubmitSource::Text));
    let on_upload = Callback::new(move |()| submit(SubmitSource::Upload));

    view! {
        <div class="feedback-page">
            <Banner/>
            <h1 class="feedback-page__title">{PAGE_TITLE}</h1>
            <div class="feedback-page__panels">
                <SubmitPanel on_submit_text=on_submit_text on_upload=on_upload/>
                <FeedbackOutput/>
            </div>
        </div>
    }
}
