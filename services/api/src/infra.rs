use chrono::Utc;
use course_match::config::CatalogConfig;
use course_match::error::AppError;
use course_match::matching::seed::sample_courses;
use course_match::matching::{
    CatalogError, Course, CourseCatalog, CourseCatalogImporter, CourseDraft, CourseId,
    QualificationSubmission, SinkError, StudyLevel, SubmissionDraft, SubmissionId,
    SubmissionRecord, SubmissionSink,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime catalog. Courses are kept in insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCourseCatalog {
    courses: Arc<Mutex<Vec<Course>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryCourseCatalog {
    fn next_course_id(&self) -> CourseId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        CourseId(format!("course-{id:06}"))
    }

    fn snapshot(&self) -> Result<std::sync::MutexGuard<'_, Vec<Course>>, CatalogError> {
        self.courses
            .lock()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))
    }
}

impl CourseCatalog for InMemoryCourseCatalog {
    fn all(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.snapshot()?.clone())
    }

    fn by_id(&self, id: &CourseId) -> Result<Option<Course>, CatalogError> {
        Ok(self
            .snapshot()?
            .iter()
            .find(|course| &course.id == id)
            .cloned())
    }

    fn by_level(&self, level: StudyLevel) -> Result<Vec<Course>, CatalogError> {
        Ok(self
            .snapshot()?
            .iter()
            .filter(|course| course.level == level)
            .cloned()
            .collect())
    }

    fn create(&self, draft: CourseDraft) -> Result<Course, CatalogError> {
        let mut guard = self.snapshot()?;
        let course = draft.into_course(self.next_course_id());
        guard.push(course.clone());
        Ok(course)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionSink {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionSink for InMemorySubmissionSink {
    fn record(&self, draft: SubmissionDraft) -> Result<SubmissionRecord, SinkError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| SinkError::Unavailable("submission lock poisoned".to_string()))?;
        let id = SubmissionId(format!("sub-{:06}", guard.len() + 1));
        let record = SubmissionRecord::from_draft(id, Utc::now(), draft);
        guard.push(record.clone());
        Ok(record)
    }
}

impl InMemorySubmissionSink {
    #[cfg(test)]
    pub(crate) fn records(&self) -> Vec<SubmissionRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// Hydrate the in-memory catalog from the sample courses and an optional CSV export.
pub(crate) fn build_catalog(config: &CatalogConfig) -> Result<InMemoryCourseCatalog, AppError> {
    let catalog = InMemoryCourseCatalog::default();

    if config.seed_sample_courses {
        for draft in sample_courses() {
            catalog.create(draft)?;
        }
    }

    if let Some(path) = &config.csv_path {
        let drafts = CourseCatalogImporter::from_path(path)?;
        let imported = drafts.len();
        for draft in drafts {
            catalog.create(draft)?;
        }
        info!(path = %path.display(), imported, "imported course catalog");
    }

    Ok(catalog)
}

pub(crate) fn load_submission(path: &Path) -> Result<QualificationSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
