//! Course requirement payloads.
//!
//! Catalog records carry requirements as loosely-shaped JSON. They are decoded once, when a
//! course is deserialized or imported, into [`CourseRequirements`] so scoring never has to probe
//! the payload again.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::Grade;

/// Requirement shapes recognized by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CourseRequirements {
    /// School-leaver entry: minimum grades per subject plus the subjects that earn bonus points.
    Undergraduate(GradeRequirements),
    /// Graduate entry described in prose.
    Postgraduate(DegreeRequirements),
    /// No stated requirements.
    #[default]
    Open,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeRequirements {
    pub min_grades: BTreeMap<String, Grade>,
    pub subjects: Vec<String>,
    /// Kept when a graded payload also asks for experience; only postgraduate scoring reads it.
    pub work_experience: Option<String>,
}

impl GradeRequirements {
    pub fn counts_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|candidate| candidate == subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeRequirements {
    pub undergrad_requirement: Option<String>,
    pub work_experience: Option<String>,
}

impl CourseRequirements {
    pub fn grades(&self) -> Option<&GradeRequirements> {
        match self {
            Self::Undergraduate(grades) => Some(grades),
            _ => None,
        }
    }

    /// True when the course asks for professional experience.
    pub fn mentions_work_experience(&self) -> bool {
        match self {
            Self::Undergraduate(grades) => grades.work_experience.is_some(),
            Self::Postgraduate(degree) => degree.work_experience.is_some(),
            Self::Open => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    fn from_raw(raw: RawRequirements) -> Self {
        let RawRequirements {
            min_grades,
            subjects,
            undergrad_requirement,
            work_experience,
        } = raw;

        if let Some(min_grades) = min_grades {
            return Self::Undergraduate(GradeRequirements {
                min_grades,
                subjects: subjects.unwrap_or_default(),
                work_experience,
            });
        }

        if undergrad_requirement.is_some() || work_experience.is_some() {
            return Self::Postgraduate(DegreeRequirements {
                undergrad_requirement,
                work_experience,
            });
        }

        Self::Open
    }

    fn to_raw(&self) -> Option<RawRequirements> {
        match self {
            Self::Undergraduate(grades) => Some(RawRequirements {
                min_grades: Some(grades.min_grades.clone()),
                subjects: Some(grades.subjects.clone()),
                undergrad_requirement: None,
                work_experience: grades.work_experience.clone(),
            }),
            Self::Postgraduate(degree) => Some(RawRequirements {
                min_grades: None,
                subjects: None,
                undergrad_requirement: degree.undergrad_requirement.clone(),
                work_experience: degree.work_experience.clone(),
            }),
            Self::Open => None,
        }
    }
}

impl<'de> Deserialize<'de> for CourseRequirements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawRequirements>::deserialize(deserializer)?;
        Ok(raw.map(Self::from_raw).unwrap_or_default())
    }
}

impl Serialize for CourseRequirements {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

/// Wire form; unknown keys are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_grades: Option<BTreeMap<String, Grade>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subjects: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    undergrad_requirement: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    work_experience: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.is_empty()))
}
