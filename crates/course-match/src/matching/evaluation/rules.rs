use std::collections::HashMap;

use super::config::ScoringConfig;
use super::{MatchRule, ScoreComponent};
use crate::matching::domain::{Course, Grade, QualificationSubmission, StudyLevel, SubjectGrade};
use crate::matching::requirements::{CourseRequirements, GradeRequirements};

/// Subject to grade lookup built once per submission. A later entry for the same subject
/// replaces an earlier one, even when the later grade is unrecognised.
pub(crate) struct QualificationIndex<'a> {
    grades: HashMap<&'a str, Option<Grade>>,
}

impl<'a> QualificationIndex<'a> {
    pub(crate) fn new(qualifications: &'a [SubjectGrade]) -> Self {
        let mut grades = HashMap::with_capacity(qualifications.len());
        for qualification in qualifications {
            grades.insert(qualification.subject.as_str(), qualification.grade);
        }
        Self { grades }
    }

    pub(crate) fn grade_for(&self, subject: &str) -> Option<Grade> {
        self.grades.get(subject).copied().flatten()
    }
}

/// Score a course whose level already matches the submission.
pub(crate) fn score_course(
    submission: &QualificationSubmission,
    index: &QualificationIndex<'_>,
    course: &Course,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i32) {
    // The engine only calls this once the levels agree.
    match (course.level, &course.requirements) {
        (StudyLevel::Undergraduate, CourseRequirements::Undergraduate(grades)) => {
            score_grade_requirements(submission, index, grades, config)
        }
        (StudyLevel::Postgraduate, requirements) => {
            score_postgraduate(submission, course, requirements, config)
        }
        (StudyLevel::Undergraduate, _) => (
            vec![ScoreComponent {
                rule: MatchRule::OpenEntry,
                points: config.open_entry,
                notes: "level matched with no grade requirements".to_string(),
            }],
            config.open_entry,
        ),
    }
}

fn score_grade_requirements(
    submission: &QualificationSubmission,
    index: &QualificationIndex<'_>,
    requirements: &GradeRequirements,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i32) {
    for (subject, minimum) in &requirements.min_grades {
        let notes = match index.grade_for(subject) {
            Some(grade) if grade.meets(*minimum) => continue,
            Some(grade) => format!("{subject} grade {grade} below required {minimum}"),
            None => format!("no recognised {subject} grade"),
        };

        return (
            vec![ScoreComponent {
                rule: MatchRule::GradeRequirementsUnmet,
                points: 0,
                notes,
            }],
            0,
        );
    }

    let mut components = vec![ScoreComponent {
        rule: MatchRule::GradeRequirementsMet,
        points: config.grade_requirements_met,
        notes: format!(
            "meets {} minimum grade requirement(s)",
            requirements.min_grades.len()
        ),
    }];
    let mut total = config.grade_requirements_met;

    // Every listed qualification counts, duplicates included.
    for qualification in &submission.qualifications {
        if !requirements.counts_subject(&qualification.subject) {
            continue;
        }
        let points = qualification
            .grade
            .map_or(0, |grade| config.grade_points.for_grade(grade));
        components.push(ScoreComponent {
            rule: MatchRule::SubjectBonus,
            points,
            notes: qualification.to_string(),
        });
        total += points;
    }

    (components, total)
}

fn score_postgraduate(
    submission: &QualificationSubmission,
    course: &Course,
    requirements: &CourseRequirements,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i32) {
    let mut components = vec![ScoreComponent {
        rule: MatchRule::PostgraduateBase,
        points: config.postgraduate_base,
        notes: "postgraduate level matched".to_string(),
    }];
    let mut total = config.postgraduate_base;

    if let Some(degree) = submission.undergrad_degree_completed.as_deref() {
        if degree
            .to_lowercase()
            .contains(&course.study_area.to_lowercase())
        {
            components.push(ScoreComponent {
                rule: MatchRule::StudyAreaMatch,
                points: config.study_area_match,
                notes: format!("'{degree}' covers {}", course.study_area),
            });
            total += config.study_area_match;
        }
    }

    let has_experience = submission
        .work_experience
        .as_deref()
        .is_some_and(|experience| !experience.is_empty());
    if requirements.mentions_work_experience() && has_experience {
        components.push(ScoreComponent {
            rule: MatchRule::WorkExperience,
            points: config.work_experience_match,
            notes: "work experience supplied for a course that asks for it".to_string(),
        });
        total += config.work_experience_match;
    }

    if let Some(classification) = submission.undergrad_grade_received.as_deref() {
        if is_strong_classification(classification, config) {
            components.push(ScoreComponent {
                rule: MatchRule::StrongClassification,
                points: config.strong_classification,
                notes: format!("classification '{classification}'"),
            });
            total += config.strong_classification;
        }
    }

    (components, total)
}

/// Substring heuristic for strong honours or a 3.x GPA; nothing is parsed numerically.
pub(crate) fn is_strong_classification(classification: &str, config: &ScoringConfig) -> bool {
    let lowered = classification.to_lowercase();
    config
        .strong_classification_markers
        .iter()
        .any(|marker| lowered.contains(marker.as_str()))
        || config
            .strong_gpa_markers
            .iter()
            .any(|marker| classification.contains(marker.as_str()))
}
