//! Qualification-to-course matching.
//!
//! The [`matching`] module holds the scoring engine and the collaborator traits it is wired to;
//! the remaining modules carry the process-level concerns shared by the service binary.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
