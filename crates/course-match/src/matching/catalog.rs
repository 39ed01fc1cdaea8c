use super::domain::{Course, CourseDraft, CourseId, StudyLevel};

/// Read/write access to the course catalog so the service can be exercised against any store.
///
/// `all` and `by_level` return a materialized snapshot; ordering only has to be stable for a
/// given storage state.
pub trait CourseCatalog: Send + Sync {
    fn all(&self) -> Result<Vec<Course>, CatalogError>;
    fn by_id(&self, id: &CourseId) -> Result<Option<Course>, CatalogError>;
    fn by_level(&self, level: StudyLevel) -> Result<Vec<Course>, CatalogError>;
    /// Store a new course under a freshly assigned identifier.
    fn create(&self, draft: CourseDraft) -> Result<Course, CatalogError>;
}

/// Error enumeration for catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
