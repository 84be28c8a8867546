//! Dismissible announcement banner pinned above the page.
//!
//! Dismissal only lives in session state; a reload shows the banner again.

use leptos::prelude::*;

use crate::state::session::FeedbackSession;

/// Announcement shown until the user closes it.
pub const BANNER_TEXT: &str = "\u{2728} What's new? You can now upload files for feedback. Please keep the size of the uploaded file no more than 1MB.";

#[component]
pub fn Banner() -> impl IntoView {
    let session = expect_context::<RwSignal<FeedbackSession>>();

    let on_dismiss = move |_| session.update(FeedbackSession::dismiss_banner);

    view! {
        <Show when=move || session.with(|s| s.banner_visible)>
            <div class="banner" role="status">
                <p class="banner__text">{BANNER_TEXT}</p>
                <button class="banner__close" type="button" title="Dismiss" on:click=on_dismiss>
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke-width="1.5"
                        stroke="currentColor"
                        class="banner__icon"
                    >
                        <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12"/>
                    </svg>
                </button>
            </div>
        </Show>
    }
}
