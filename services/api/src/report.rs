use crate::infra::{build_catalog, load_submission, InMemoryCourseCatalog, InMemorySubmissionSink};
use clap::Args;
use course_match::config::AppConfig;
use course_match::error::AppError;
use course_match::matching::{
    Course, CourseMatchingService, MatchScore, QualificationSubmission, ScoringConfig, StudyLevel,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CoursesArgs {
    /// Only list courses at this study level (undergraduate or postgraduate)
    #[arg(long)]
    pub(crate) level: Option<StudyLevel>,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Questionnaire answers in the same JSON shape the HTTP endpoint accepts
    #[arg(long)]
    pub(crate) submission: PathBuf,
    /// Print the per-rule score breakdown for every matched course
    #[arg(long)]
    pub(crate) show_scores: bool,
}

pub(crate) fn run_course_listing(args: CoursesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config)?;

    let courses = match args.level {
        Some(level) => service.courses_for_level(level)?,
        None => service.courses()?,
    };
    print!("{}", render_course_listing(&courses));
    Ok(())
}

pub(crate) fn run_match_report(args: MatchArgs) -> Result<(), AppError> {
    let submission = load_submission(&args.submission)?;
    let config = AppConfig::load()?;
    let service = build_service(&config)?;

    let courses = service.courses()?;
    let ranked = service.engine().rank_with_scores(&submission, &courses);
    print!(
        "{}",
        render_match_report(&submission, &ranked, args.show_scores)
    );
    Ok(())
}

type CliService = CourseMatchingService<InMemoryCourseCatalog, InMemorySubmissionSink>;

fn build_service(config: &AppConfig) -> Result<CliService, AppError> {
    let catalog = build_catalog(&config.catalog)?;
    Ok(CourseMatchingService::new(
        Arc::new(catalog),
        Arc::new(InMemorySubmissionSink::default()),
        ScoringConfig::default(),
    ))
}

fn render_course_listing(courses: &[Course]) -> String {
    let mut out = String::new();
    if courses.is_empty() {
        out.push_str("No courses in the catalog\n");
        return out;
    }

    let _ = writeln!(out, "{} course(s)", courses.len());
    for course in courses {
        let _ = writeln!(
            out,
            "- [{}] {} | {} ({}, {}) | {} | intake {} | deadline {} | {}",
            course.level,
            course.title,
            course.institution,
            course.city,
            course.country,
            course.study_area,
            course.intake_date,
            course.application_deadline,
            course.tuition_cost
        );
    }
    out
}

fn render_match_report(
    submission: &QualificationSubmission,
    ranked: &[(&Course, MatchScore)],
    show_scores: bool,
) -> String {
    let mut out = String::new();
    let level = submission
        .study_level
        .map_or("unrecognised-level", StudyLevel::label);
    let _ = writeln!(
        out,
        "Study level: {} | country: {}",
        level, submission.country
    );
    if !submission.qualifications.is_empty() {
        let grades: Vec<String> = submission
            .qualifications
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "Qualifications: {}", grades.join(", "));
    }

    if ranked.is_empty() {
        out.push_str("No matching courses\n");
        return out;
    }

    let _ = writeln!(out, "{} matching course(s)", ranked.len());
    for (position, (course, score)) in ranked.iter().enumerate() {
        if show_scores {
            let _ = writeln!(
                out,
                "{}. {} - {} (score {})",
                position + 1,
                course.title,
                course.institution,
                score.total
            );
            for component in &score.components {
                let _ = writeln!(
                    out,
                    "     {:?}: {:+} ({})",
                    component.rule, component.points, component.notes
                );
            }
        } else {
            let _ = writeln!(
                out,
                "{}. {} - {}",
                position + 1,
                course.title,
                course.institution
            );
        }
    }
    out
}
