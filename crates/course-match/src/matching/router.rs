use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::catalog::CourseCatalog;
use super::domain::{Course, QualificationSubmission, StudyLevel};
use super::service::CourseMatchingService;
use super::submissions::SubmissionSink;

/// Body returned by the match endpoint. Scores stay internal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub qualification_data: QualificationSubmission,
    pub matched_courses: Vec<Course>,
    pub total_matches: usize,
}

/// Router builder exposing the catalog and matching endpoints.
pub fn course_router<C, S>(service: Arc<CourseMatchingService<C, S>>) -> Router
where
    C: CourseCatalog + 'static,
    S: SubmissionSink + 'static,
{
    Router::new()
        .route("/api/courses", get(list_handler::<C, S>))
        .route("/api/courses/level/:level", get(level_handler::<C, S>))
        .route("/api/match-courses", post(match_handler::<C, S>))
        .with_state(service)
}

pub(crate) async fn list_handler<C, S>(
    State(service): State<Arc<CourseMatchingService<C, S>>>,
) -> Response
where
    C: CourseCatalog + 'static,
    S: SubmissionSink + 'static,
{
    match service.courses() {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to fetch courses");
            fetch_failure()
        }
    }
}

pub(crate) async fn level_handler<C, S>(
    State(service): State<Arc<CourseMatchingService<C, S>>>,
    Path(level): Path<String>,
) -> Response
where
    C: CourseCatalog + 'static,
    S: SubmissionSink + 'static,
{
    // Exact comparison: no course is stored under any other spelling.
    let Some(level) = StudyLevel::from_label(&level) else {
        debug!(%level, "level filter matched nothing");
        return (StatusCode::OK, Json(Vec::<Course>::new())).into_response();
    };

    match service.courses_for_level(level) {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(err) => {
            error!(error = %err, %level, "failed to fetch courses by level");
            fetch_failure()
        }
    }
}

pub(crate) async fn match_handler<C, S>(
    State(service): State<Arc<CourseMatchingService<C, S>>>,
    Json(submission): Json<QualificationSubmission>,
) -> Response
where
    C: CourseCatalog + 'static,
    S: SubmissionSink + 'static,
{
    spawn_submission_write(Arc::clone(&service), submission.clone());

    match service.match_courses(&submission) {
        Ok(matched_courses) => {
            let response = MatchResponse {
                total_matches: matched_courses.len(),
                matched_courses,
                qualification_data: submission,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            error!(error = %err, "failed to match courses");
            let payload = json!({
                "error": "Failed to match courses",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// Store the submission on the blocking pool; the outcome never reaches the HTTP response.
pub(crate) fn spawn_submission_write<C, S>(
    service: Arc<CourseMatchingService<C, S>>,
    submission: QualificationSubmission,
) -> JoinHandle<()>
where
    C: CourseCatalog + 'static,
    S: SubmissionSink + 'static,
{
    tokio::task::spawn_blocking(move || {
        // Already logged by the service.
        let _ = service.record_submission(&submission);
    })
}

fn fetch_failure() -> Response {
    let payload = json!({
        "error": "Failed to fetch courses",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
