use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::matching::evaluation::ScoringConfig;
use crate::matching::router::{self, course_router};
use crate::matching::service::CourseMatchingService;

fn catalog() -> Vec<crate::matching::domain::Course> {
    vec![
        engineering_meng(),
        computer_science_bsc(),
        data_science_msc(),
    ]
}

#[tokio::test]
async fn list_route_returns_the_catalog() {
    let (service, _, _) = build_service(catalog());
    let router = course_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/courses")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let courses = payload.as_array().expect("array payload");
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[1]["studyArea"], json!("Computer Science"));
    assert_eq!(
        courses[1]["requirements"]["minGrades"]["Mathematics"],
        json!("A")
    );
}

#[tokio::test]
async fn level_handler_filters_and_tolerates_unknown_levels() {
    let (service, _, _) = build_service(catalog());
    let service = Arc::new(service);

    let response = router::level_handler::<MemoryCatalog, MemorySink>(
        State(service.clone()),
        Path("postgraduate".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
    assert_eq!(payload[0]["id"], json!("ds-msc"));

    for unknown in ["doctoral", "Postgraduate", " postgraduate"] {
        let response = router::level_handler::<MemoryCatalog, MemorySink>(
            State(service.clone()),
            Path(unknown.to_string()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json_body(response).await, json!([]));
    }
}

#[tokio::test]
async fn list_handlers_return_internal_error_on_catalog_failure() {
    let service = Arc::new(CourseMatchingService::new(
        Arc::new(UnavailableCatalog),
        Arc::new(MemorySink::default()),
        ScoringConfig::default(),
    ));

    let response =
        router::list_handler::<UnavailableCatalog, MemorySink>(State(service.clone())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "Failed to fetch courses" })
    );

    let response = router::level_handler::<UnavailableCatalog, MemorySink>(
        State(service),
        Path("undergraduate".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn match_route_returns_ranked_courses() {
    let (service, _, _) = build_service(catalog());
    let router = course_router(Arc::new(service));
    let body = json!({
        "studyLevel": "undergraduate",
        "country": "United Kingdom",
        "qualifications": [
            { "subject": "Mathematics", "grade": "A" },
            { "subject": "Physics", "grade": "B" }
        ],
        "undergradDegree": "Computer Science"
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/match-courses")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalMatches"], json!(1));
    assert_eq!(payload["matchedCourses"][0]["id"], json!("cs-bsc"));
    assert_eq!(payload["qualificationData"]["studyLevel"], json!("undergraduate"));
    assert_eq!(
        payload["qualificationData"]["undergradDegree"],
        json!("Computer Science")
    );
    assert!(payload["matchedCourses"][0].get("score").is_none());
}

#[tokio::test]
async fn match_route_tolerates_unrecognised_grades() {
    let (service, _, _) = build_service(catalog());
    let router = course_router(Arc::new(service));
    let body = json!({
        "studyLevel": "undergraduate",
        "country": "United Kingdom",
        "qualifications": [
            { "subject": "Mathematics", "grade": "A" },
            { "subject": "Physics", "grade": "B" },
            { "subject": "Art", "grade": "A*" },
            { "subject": "Music", "grade": "" },
            { "subject": "History" }
        ]
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/match-courses")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalMatches"], json!(1));
    assert_eq!(payload["matchedCourses"][0]["id"], json!("cs-bsc"));
}

#[tokio::test]
async fn match_route_returns_no_courses_for_an_unrecognised_level() {
    let (service, _, _) = build_service(catalog());
    let router = course_router(Arc::new(service));
    let body = json!({
        "studyLevel": "Undergraduate",
        "country": "United Kingdom",
        "qualifications": [{ "subject": "Mathematics", "grade": "A" }]
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/match-courses")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalMatches"], json!(0));
    assert_eq!(payload["matchedCourses"], json!([]));
}

#[tokio::test]
async fn match_handler_ignores_submission_store_failures() {
    let service = Arc::new(CourseMatchingService::new(
        Arc::new(MemoryCatalog::with_courses(catalog())),
        Arc::new(FailingSink),
        ScoringConfig::default(),
    ));

    let response = router::match_handler::<MemoryCatalog, FailingSink>(
        State(service),
        axum::Json(postgraduate_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["totalMatches"], json!(1));
    assert_eq!(payload["matchedCourses"][0]["id"], json!("ds-msc"));
}

#[tokio::test]
async fn match_handler_returns_generic_error_when_catalog_fails() {
    let service = Arc::new(CourseMatchingService::new(
        Arc::new(UnavailableCatalog),
        Arc::new(MemorySink::default()),
        ScoringConfig::default(),
    ));

    let response = router::match_handler::<UnavailableCatalog, MemorySink>(
        State(service),
        axum::Json(undergraduate_submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "Failed to match courses" })
    );
}

#[tokio::test]
async fn submission_write_runs_off_the_request_path() {
    let (service, _, sink) = build_service(catalog());

    router::spawn_submission_write(Arc::new(service), undergraduate_submission())
        .await
        .expect("write task completes");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].qualifications.len(), 2);
}
