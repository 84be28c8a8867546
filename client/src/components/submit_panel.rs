//! Input panel: text area, document picker, and the two submit buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes draft text and the chosen file into `FeedbackSession`; the page
//! owns the actual submissions and passes them in as callbacks. Buttons are
//! disabled from the same `can_submit_*` checks the session guard uses.

use feedback::upload::ACCEPTED_EXTENSIONS;
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

use crate::state::session::FeedbackSession;
use crate::util::file::{file_label, oversize_notice};

/// Placeholder for the empty text area.
pub const INPUT_PLACEHOLDER: &str = "Start typing here... or upload a .docx file.";

#[component]
pub fn SubmitPanel(on_submit_text: Callback<()>, on_upload: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<FeedbackSession>>();

    let can_submit_text = move || session.with(FeedbackSession::can_submit_text);
    let can_submit_file = move || session.with(FeedbackSession::can_submit_file);
    let chosen_label = move || session.with(|s| file_label(s.file.as_ref()));
    let size_notice = move || session.with(|s| oversize_notice(s.file.as_ref()));

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let picked = input.files().and_then(|files| files.get(0));
            let Some(picked) = picked else {
                session.update(|s| s.select_file(None));
                return;
            };
            let Some(pick) = session.try_update(FeedbackSession::begin_file_pick) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let file = match crate::util::file::read_selected_file(picked).await {
                    Ok(file) => Some(file),
                    Err(e) => {
                        log::error!("failed to read selected file: {e}");
                        None
                    }
                };
                session.update(|s| {
                    s.finish_file_pick(pick, file);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="submit-panel">
            <textarea
                class="submit-panel__input"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || session.with(|s| s.input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.input = value);
                }
            ></textarea>
            <div class="submit-panel__actions">
                <form
                    class="upload-form"
                    enctype="multipart/form-data"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_upload.run(());
                    }
                >
                    <label class="upload-form__picker">
                        <input
                            class="upload-form__file"
                            type="file"
                            accept=ACCEPTED_EXTENSIONS
                            on:change=on_file_change
                        />
                        <span class="upload-form__label">{chosen_label}</span>
                    </label>
                    <button
                        class="btn upload-form__button"
                        type="submit"
                        disabled=move || !can_submit_file()
                    >
                        "Upload"
                    </button>
                </form>
                <button
                    class="btn submit-panel__submit"
                    type="button"
                    disabled=move || !can_submit_text()
                    on:click=move |_| on_submit_text.run(())
                >
                    "Submit"
                </button>
            </div>
            {move || size_notice().map(|notice| view! { <p class="upload-form__notice">{notice}</p> })}
        </div>
    }
}
