mod config;
mod rules;

pub use config::{GradePoints, ScoringConfig};

use super::domain::{Course, CourseId, QualificationSubmission};
use rules::{score_course, QualificationIndex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless matcher ranking catalog courses against a submission.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: ScoringConfig,
}

impl MatchingEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Courses the submission qualifies for, best match first.
    ///
    /// Courses at another study level or scoring zero are dropped. Equal scores keep their
    /// catalog order.
    pub fn rank(&self, submission: &QualificationSubmission, courses: &[Course]) -> Vec<Course> {
        self.scored(submission, courses)
            .into_iter()
            .map(|(course, _)| course.clone())
            .collect()
    }

    /// Same ordering as [`MatchingEngine::rank`], keeping the score breakdown.
    pub fn rank_with_scores<'c>(
        &self,
        submission: &QualificationSubmission,
        courses: &'c [Course],
    ) -> Vec<(&'c Course, MatchScore)> {
        self.scored(submission, courses)
    }

    /// Score a single course, including level mismatches (which score zero).
    pub fn score(&self, submission: &QualificationSubmission, course: &Course) -> MatchScore {
        let index = QualificationIndex::new(&submission.qualifications);
        self.score_with_index(submission, &index, course)
    }

    fn scored<'c>(
        &self,
        submission: &QualificationSubmission,
        courses: &'c [Course],
    ) -> Vec<(&'c Course, MatchScore)> {
        let index = QualificationIndex::new(&submission.qualifications);

        let mut matched: Vec<(&'c Course, MatchScore)> = courses
            .iter()
            .filter(|course| submission.study_level == Some(course.level))
            .map(|course| (course, self.score_with_index(submission, &index, course)))
            .filter(|(_, score)| score.total > 0)
            .collect();

        // `sort_by` is stable, so ties stay in catalog order.
        matched.sort_by(|(_, left), (_, right)| right.total.cmp(&left.total));

        debug!(
            level = ?submission.study_level,
            candidates = courses.len(),
            matched = matched.len(),
            "ranked courses for submission"
        );

        matched
    }

    fn score_with_index(
        &self,
        submission: &QualificationSubmission,
        index: &QualificationIndex<'_>,
        course: &Course,
    ) -> MatchScore {
        if submission.study_level != Some(course.level) {
            return MatchScore {
                course_id: course.id.clone(),
                total: 0,
                components: vec![ScoreComponent {
                    rule: MatchRule::LevelMismatch,
                    points: 0,
                    notes: match submission.study_level {
                        Some(level) => {
                            format!("course is {} but submission is {level}", course.level)
                        }
                        None => format!(
                            "course is {} but submission level is unrecognised",
                            course.level
                        ),
                    },
                }],
            };
        }

        let (components, total) = score_course(submission, index, course, &self.config);
        MatchScore {
            course_id: course.id.clone(),
            total,
            components,
        }
    }
}

/// Rule that produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    LevelMismatch,
    GradeRequirementsMet,
    GradeRequirementsUnmet,
    SubjectBonus,
    PostgraduateBase,
    StudyAreaMatch,
    WorkExperience,
    StrongClassification,
    OpenEntry,
}

/// Discrete contribution to a course score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: MatchRule,
    pub points: i32,
    pub notes: String,
}

/// Ranking key for one course plus the trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub course_id: CourseId,
    pub total: i32,
    pub components: Vec<ScoreComponent>,
}

impl MatchScore {
    pub fn is_match(&self) -> bool {
        self.total > 0
    }
}
