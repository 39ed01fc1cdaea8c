use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::{CatalogError, CourseCatalog};
use super::domain::{Course, QualificationSubmission, StudyLevel, SubmissionDraft, SubmissionRecord};
use super::evaluation::{MatchingEngine, ScoringConfig};
use super::submissions::{SinkError, SubmissionSink};

/// Service composing the course catalog, the submission sink, and the matching engine.
pub struct CourseMatchingService<C, S> {
    catalog: Arc<C>,
    submissions: Arc<S>,
    engine: Arc<MatchingEngine>,
}

impl<C, S> CourseMatchingService<C, S>
where
    C: CourseCatalog + 'static,
    S: SubmissionSink + 'static,
{
    pub fn new(catalog: Arc<C>, submissions: Arc<S>, config: ScoringConfig) -> Self {
        Self {
            catalog,
            submissions,
            engine: Arc::new(MatchingEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Full catalog listing.
    pub fn courses(&self) -> Result<Vec<Course>, MatchingServiceError> {
        Ok(self.catalog.all()?)
    }

    pub fn courses_for_level(&self, level: StudyLevel) -> Result<Vec<Course>, MatchingServiceError> {
        Ok(self.catalog.by_level(level)?)
    }

    /// Persist the raw questionnaire answers. Failures are logged here and handed back so the
    /// caller can decide to ignore them.
    pub fn record_submission(
        &self,
        submission: &QualificationSubmission,
    ) -> Result<SubmissionRecord, SinkError> {
        match self.submissions.record(SubmissionDraft::from(submission)) {
            Ok(record) => {
                info!(
                    submission_id = %record.id.0,
                    level = ?record.study_level,
                    "stored qualification submission"
                );
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "failed to store qualification submission");
                Err(err)
            }
        }
    }

    /// Rank the catalog snapshot against a submission.
    pub fn match_courses(
        &self,
        submission: &QualificationSubmission,
    ) -> Result<Vec<Course>, MatchingServiceError> {
        let courses = self.catalog.all()?;
        Ok(self.engine.rank(submission, &courses))
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
