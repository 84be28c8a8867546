//! Output pane that renders the current feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `FeedbackSession::rendered()` and maps the resulting
//! `RenderedView` onto markup; all dispatch decisions live in the
//! `feedback` crate so this component only lays things out.

#[cfg(test)]
#[path = "feedback_output_test.rs"]
mod feedback_output_test;

use feedback::RenderedView;
use leptos::prelude::*;

use crate::state::session::FeedbackSession;

/// Right-hand pane showing placeholder, loading text, or feedback.
#[component]
pub fn FeedbackOutput() -> impl IntoView {
    let session = expect_context::<RwSignal<FeedbackSession>>();

    view! {
        <div class="output-pane">
            <div class="output-pane__content">
                {move || render_view(session.with(FeedbackSession::rendered))}
            </div>
        </div>
    }
}

fn render_view(rendered: RenderedView) -> AnyView {
    match rendered {
        RenderedView::Notice(text) => view! { <p class="output-notice">{text}</p> }.into_any(),
        RenderedView::Section { heading, body } => view! {
            <div class="feedback-section">
                <h3 class="feedback-section__heading">{heading}</h3>
                <p class="feedback-section__body">{body}</p>
            </div>
        }
        .into_any(),
        RenderedView::Table {
            title,
            columns,
            rows,
        } => view! {
            <div class="feedback-table">
                <h1 class="feedback-table__title">{title}</h1>
                <table class="feedback-table__grid">
                    <thead>
                        <tr>
                            {columns
                                .into_iter()
                                .map(|column| view! { <th>{column}</th> })
                                .collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .enumerate()
                            .map(|(index, cells)| {
                                view! {
                                    <tr class=row_class(index)>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
        RenderedView::Verbatim(text) => view! { <p class="feedback-verbatim">{text}</p> }.into_any(),
    }
}

/// Zebra striping for correction rows.
fn row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "feedback-table__row"
    } else {
        "feedback-table__row feedback-table__row--alt"
    }
}
