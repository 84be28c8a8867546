//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns request orchestration and delegates rendering details
//! to `components`.

pub mod assistant;
