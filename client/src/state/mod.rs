//! Client-side state for the feedback page.
//!
//! DESIGN
//! ======
//! The page holds a single `FeedbackSession`; components read and write it
//! through a context-provided `RwSignal`.

pub mod session;
