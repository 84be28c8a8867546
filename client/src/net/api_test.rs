#![cfg(not(feature = "csr"))]

use futures::executor::block_on;

use super::*;
use crate::state::session::{FeedbackSession, ResponseSlot};

#[test]
fn feedback_client_uses_build_time_base_url() {
    assert_eq!(feedback_client().base_url(), api_base_url());
}

#[test]
fn native_transport_reports_unavailable() {
    let transport = BrowserTransport;
    assert_eq!(
        block_on(transport.post_text("/feedback", "hello")),
        Err(ApiError::Unavailable)
    );
    let file = SelectedFile::new("essay.docx", None, vec![1]);
    assert_eq!(
        block_on(transport.post_file("/fileupload", &file)),
        Err(ApiError::Unavailable)
    );
}

#[test]
fn unavailable_transport_settles_session_as_failed() {
    let mut session = FeedbackSession {
        input: "Draft".to_owned(),
        ..FeedbackSession::default()
    };
    let submission = session.begin_text().expect("begin should succeed");
    session.settle(block_on(feedback_client().submit(&submission)));
    assert!(!session.busy);
    assert_eq!(session.response, Some(ResponseSlot::Failed));
}
