use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::requirements::CourseRequirements;

/// Level of study a course is offered at and a submission is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyLevel {
    Undergraduate,
    Postgraduate,
}

impl StudyLevel {
    pub const fn ordered() -> [Self; 2] {
        [Self::Undergraduate, Self::Postgraduate]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Postgraduate => "postgraduate",
        }
    }

    /// Exact wire-name lookup, unlike the forgiving [`FromStr`] used for CLI and CSV input.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == value)
    }
}

impl fmt::Display for StudyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudyLevel {
    type Err = UnknownStudyLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "undergraduate" => Ok(Self::Undergraduate),
            "postgraduate" => Ok(Self::Postgraduate),
            _ => Err(UnknownStudyLevel(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown study level '{0}' (expected undergraduate or postgraduate)")]
pub struct UnknownStudyLevel(pub String);

/// Letter grade, best (`A`) to worst (`E`).
///
/// The derived ordering follows declaration order, so `Grade::A < Grade::E`: a smaller value is
/// a better grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const fn ordered() -> [Self; 5] {
        [Self::A, Self::B, Self::C, Self::D, Self::E]
    }

    /// True when this grade is at least as good as `minimum`.
    pub fn meets(self, minimum: Grade) -> bool {
        self <= minimum
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Accepts any JSON value; anything that is not a `T` decodes as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Known(value)) => Some(value),
        Some(Lenient::Other(_)) | None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Known(T),
    Other(IgnoredAny),
}

/// One subject/grade pair from the questionnaire.
///
/// `grade` is `None` when the answer is missing or not one of the letters; such an entry fails
/// every minimum and earns no bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGrade {
    #[serde(default)]
    pub subject: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub grade: Option<Grade>,
}

impl SubjectGrade {
    pub fn new(subject: impl Into<String>, grade: Grade) -> Self {
        Self {
            subject: subject.into(),
            grade: Some(grade),
        }
    }
}

impl fmt::Display for SubjectGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grade {
            Some(grade) => write!(f, "{} {}", self.subject, grade),
            None => write!(f, "{} (unrecognised grade)", self.subject),
        }
    }
}

/// Questionnaire answers submitted for a single matching request.
///
/// Level-specific fields are all optional; absent values never satisfy a scoring rule. A
/// `studyLevel` other than the two wire names decodes as `None` and matches no course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationSubmission {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub study_level: Option<StudyLevel>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub qualifications: Vec<SubjectGrade>,
    // undergraduate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undergrad_degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undergrad_grade: Option<String>,
    // postgraduate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undergrad_degree_completed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undergrad_grade_received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undergrad_institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_interest: Option<String>,
}

impl QualificationSubmission {
    pub fn new(study_level: StudyLevel, country: impl Into<String>) -> Self {
        Self {
            study_level: Some(study_level),
            country: country.into(),
            qualifications: Vec::new(),
            undergrad_degree: None,
            undergrad_grade: None,
            undergrad_degree_completed: None,
            undergrad_grade_received: None,
            undergrad_institution: None,
            work_experience: None,
            research_interest: None,
        }
    }

    pub fn with_qualification(mut self, subject: impl Into<String>, grade: Grade) -> Self {
        self.qualifications.push(SubjectGrade::new(subject, grade));
        self
    }

    /// Questionnaire fields that are stored alongside the submission but not keyed on.
    pub fn additional_info(&self) -> AdditionalInfo {
        AdditionalInfo {
            undergrad_degree: self.undergrad_degree.clone(),
            undergrad_grade: self.undergrad_grade.clone(),
            undergrad_degree_completed: self.undergrad_degree_completed.clone(),
            undergrad_grade_received: self.undergrad_grade_received.clone(),
            undergrad_institution: self.undergrad_institution.clone(),
            work_experience: self.work_experience.clone(),
            research_interest: self.research_interest.clone(),
        }
    }
}

/// Identifier wrapper for catalog courses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A course before the catalog has assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub institution: String,
    pub country: String,
    pub city: String,
    pub level: StudyLevel,
    pub study_area: String,
    pub intake_date: String,
    pub application_deadline: String,
    pub tuition_cost: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: CourseRequirements,
}

impl CourseDraft {
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            title: self.title,
            institution: self.institution,
            country: self.country,
            city: self.city,
            level: self.level,
            study_area: self.study_area,
            intake_date: self.intake_date,
            application_deadline: self.application_deadline,
            tuition_cost: self.tuition_cost,
            description: self.description,
            requirements: self.requirements,
        }
    }
}

/// Catalog course record as served to clients and scored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub institution: String,
    pub country: String,
    pub city: String,
    pub level: StudyLevel,
    pub study_area: String,
    pub intake_date: String,
    pub application_deadline: String,
    pub tuition_cost: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: CourseRequirements,
}

/// Identifier wrapper for stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfo {
    pub undergrad_degree: Option<String>,
    pub undergrad_grade: Option<String>,
    pub undergrad_degree_completed: Option<String>,
    pub undergrad_grade_received: Option<String>,
    pub undergrad_institution: Option<String>,
    pub work_experience: Option<String>,
    pub research_interest: Option<String>,
}

/// What the sink is asked to keep for later analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    pub study_level: Option<StudyLevel>,
    pub country: String,
    pub qualifications: Vec<SubjectGrade>,
    pub additional_info: AdditionalInfo,
}

impl From<&QualificationSubmission> for SubmissionDraft {
    fn from(submission: &QualificationSubmission) -> Self {
        Self {
            study_level: submission.study_level,
            country: submission.country.clone(),
            qualifications: submission.qualifications.clone(),
            additional_info: submission.additional_info(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    pub study_level: Option<StudyLevel>,
    pub country: String,
    pub qualifications: Vec<SubjectGrade>,
    pub additional_info: AdditionalInfo,
}

impl SubmissionRecord {
    pub fn from_draft(id: SubmissionId, submitted_at: DateTime<Utc>, draft: SubmissionDraft) -> Self {
        Self {
            id,
            submitted_at,
            study_level: draft.study_level,
            country: draft.country,
            qualifications: draft.qualifications,
            additional_info: draft.additional_info,
        }
    }
}
