//! Qualification-to-course matching: the scoring engine, the catalog and submission
//! collaborators it is wired to, and the HTTP surface over them.

pub mod catalog;
pub mod domain;
pub(crate) mod evaluation;
pub mod import;
pub mod requirements;
pub mod router;
pub mod seed;
pub mod service;
pub mod submissions;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CourseCatalog};
pub use domain::{
    AdditionalInfo, Course, CourseDraft, CourseId, Grade, QualificationSubmission, StudyLevel,
    SubjectGrade, SubmissionDraft, SubmissionId, SubmissionRecord, UnknownStudyLevel,
};
pub use evaluation::{GradePoints, MatchRule, MatchScore, MatchingEngine, ScoreComponent, ScoringConfig};
pub use import::{CatalogImportError, CourseCatalogImporter};
pub use requirements::{CourseRequirements, DegreeRequirements, GradeRequirements};
pub use router::{course_router, MatchResponse};
pub use service::{CourseMatchingService, MatchingServiceError};
pub use submissions::{SinkError, SubmissionSink};
