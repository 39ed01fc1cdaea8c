use super::domain::{SubmissionDraft, SubmissionRecord};

/// Durable record of what users entered, kept for later analytics.
///
/// Nothing in the matching decision reads from the sink.
pub trait SubmissionSink: Send + Sync {
    fn record(&self, draft: SubmissionDraft) -> Result<SubmissionRecord, SinkError>;
}

/// Submission write failure.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission store unavailable: {0}")]
    Unavailable(String),
}
