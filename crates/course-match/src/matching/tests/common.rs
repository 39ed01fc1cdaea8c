use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::matching::catalog::{CatalogError, CourseCatalog};
use crate::matching::domain::{
    Course, CourseDraft, CourseId, Grade, QualificationSubmission, StudyLevel, SubmissionDraft,
    SubmissionId, SubmissionRecord,
};
use crate::matching::evaluation::{MatchingEngine, ScoringConfig};
use crate::matching::requirements::{CourseRequirements, DegreeRequirements, GradeRequirements};
use crate::matching::service::CourseMatchingService;
use crate::matching::submissions::{SinkError, SubmissionSink};

pub(super) fn draft(
    title: &str,
    level: StudyLevel,
    study_area: &str,
    requirements: CourseRequirements,
) -> CourseDraft {
    CourseDraft {
        title: title.to_string(),
        institution: "Test University".to_string(),
        country: "United Kingdom".to_string(),
        city: "London".to_string(),
        level,
        study_area: study_area.to_string(),
        intake_date: "September 2025".to_string(),
        application_deadline: "January 15, 2025".to_string(),
        tuition_cost: "£9,250/year".to_string(),
        description: None,
        requirements,
    }
}

pub(super) fn course(
    id: &str,
    level: StudyLevel,
    study_area: &str,
    requirements: CourseRequirements,
) -> Course {
    draft(id, level, study_area, requirements).into_course(CourseId(id.to_string()))
}

pub(super) fn grade_requirements(min_grades: &[(&str, Grade)], subjects: &[&str]) -> CourseRequirements {
    CourseRequirements::Undergraduate(GradeRequirements {
        min_grades: min_grades
            .iter()
            .map(|(subject, grade)| (subject.to_string(), *grade))
            .collect(),
        subjects: subjects.iter().map(|subject| subject.to_string()).collect(),
        work_experience: None,
    })
}

pub(super) fn degree_requirements(work_experience: Option<&str>) -> CourseRequirements {
    CourseRequirements::Postgraduate(DegreeRequirements {
        undergrad_requirement: Some("Any bachelor degree".to_string()),
        work_experience: work_experience.map(str::to_string),
    })
}

pub(super) fn computer_science_bsc() -> Course {
    course(
        "cs-bsc",
        StudyLevel::Undergraduate,
        "Computer Science",
        grade_requirements(
            &[("Mathematics", Grade::A), ("Physics", Grade::B)],
            &["Mathematics", "Physics"],
        ),
    )
}

pub(super) fn engineering_meng() -> Course {
    course(
        "eng-meng",
        StudyLevel::Undergraduate,
        "Engineering",
        grade_requirements(
            &[("Mathematics", Grade::A), ("Physics", Grade::A)],
            &["Mathematics", "Physics"],
        ),
    )
}

pub(super) fn data_science_msc() -> Course {
    course(
        "ds-msc",
        StudyLevel::Postgraduate,
        "Computer Science",
        degree_requirements(Some("2+ years industry experience")),
    )
}

pub(super) fn undergraduate_submission() -> QualificationSubmission {
    QualificationSubmission::new(StudyLevel::Undergraduate, "United Kingdom")
        .with_qualification("Mathematics", Grade::A)
        .with_qualification("Physics", Grade::B)
}

pub(super) fn postgraduate_submission() -> QualificationSubmission {
    let mut submission = QualificationSubmission::new(StudyLevel::Postgraduate, "United Kingdom");
    submission.undergrad_degree_completed = Some("BSc Computer Science".to_string());
    submission.work_experience = Some("3 years".to_string());
    submission.undergrad_grade_received = Some("First Class".to_string());
    submission
}

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::new(ScoringConfig::default())
}

pub(super) fn build_service(
    courses: Vec<Course>,
) -> (
    CourseMatchingService<MemoryCatalog, MemorySink>,
    Arc<MemoryCatalog>,
    Arc<MemorySink>,
) {
    let catalog = Arc::new(MemoryCatalog::with_courses(courses));
    let sink = Arc::new(MemorySink::default());
    let service =
        CourseMatchingService::new(catalog.clone(), sink.clone(), ScoringConfig::default());
    (service, catalog, sink)
}

#[derive(Default)]
pub(super) struct MemoryCatalog {
    courses: Mutex<Vec<Course>>,
    sequence: AtomicU64,
}

impl MemoryCatalog {
    pub(super) fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
            sequence: AtomicU64::new(0),
        }
    }
}

impl CourseCatalog for MemoryCatalog {
    fn all(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.lock().expect("catalog mutex poisoned").clone())
    }

    fn by_id(&self, id: &CourseId) -> Result<Option<Course>, CatalogError> {
        let guard = self.courses.lock().expect("catalog mutex poisoned");
        Ok(guard.iter().find(|course| &course.id == id).cloned())
    }

    fn by_level(&self, level: StudyLevel) -> Result<Vec<Course>, CatalogError> {
        let guard = self.courses.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|course| course.level == level)
            .cloned()
            .collect())
    }

    fn create(&self, draft: CourseDraft) -> Result<Course, CatalogError> {
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let course = draft.into_course(CourseId(format!("test-course-{next}")));
        self.courses
            .lock()
            .expect("catalog mutex poisoned")
            .push(course.clone());
        Ok(course)
    }
}

pub(super) struct UnavailableCatalog;

impl CourseCatalog for UnavailableCatalog {
    fn all(&self) -> Result<Vec<Course>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    fn by_id(&self, _id: &CourseId) -> Result<Option<Course>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    fn by_level(&self, _level: StudyLevel) -> Result<Vec<Course>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    fn create(&self, _draft: CourseDraft) -> Result<Course, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemorySink {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl MemorySink {
    pub(super) fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for MemorySink {
    fn record(&self, draft: SubmissionDraft) -> Result<SubmissionRecord, SinkError> {
        let mut guard = self.records.lock().expect("sink mutex poisoned");
        let id = SubmissionId(format!("test-sub-{}", guard.len() + 1));
        let record = SubmissionRecord::from_draft(id, Utc::now(), draft);
        guard.push(record.clone());
        Ok(record)
    }
}

pub(super) struct FailingSink;

impl SubmissionSink for FailingSink {
    fn record(&self, _draft: SubmissionDraft) -> Result<SubmissionRecord, SinkError> {
        Err(SinkError::Unavailable("disk full".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn ids(courses: &[Course]) -> Vec<&str> {
    courses.iter().map(|course| course.id.0.as_str()).collect()
}
