//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::assistant::{FeedbackPage, PAGE_TITLE};
use crate::state::session::FeedbackSession;

/// Root application component.
///
/// Provides the page-scoped `FeedbackSession`; it starts fresh on every load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(FeedbackSession::default());
    provide_context(session);

    view! {
        <Title text=PAGE_TITLE/>
        <FeedbackPage/>
    }
}
