use serde::{Deserialize, Serialize};

use crate::matching::domain::Grade;

/// Weights applied by the matching rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub grade_requirements_met: i32,
    pub grade_points: GradePoints,
    pub postgraduate_base: i32,
    pub study_area_match: i32,
    pub work_experience_match: i32,
    pub strong_classification: i32,
    pub open_entry: i32,
    /// Lower-cased needles looked for in the reported degree classification.
    pub strong_classification_markers: Vec<String>,
    /// Needles matched against the classification exactly as reported.
    pub strong_gpa_markers: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            grade_requirements_met: 100,
            grade_points: GradePoints::default(),
            postgraduate_base: 50,
            study_area_match: 30,
            work_experience_match: 20,
            strong_classification: 15,
            open_entry: 25,
            strong_classification_markers: vec!["first".to_string(), "2:1".to_string()],
            strong_gpa_markers: vec!["3.".to_string()],
        }
    }
}

/// Bonus awarded per counted subject, by grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradePoints {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
}

impl GradePoints {
    pub fn for_grade(&self, grade: Grade) -> i32 {
        match grade {
            Grade::A => self.a,
            Grade::B => self.b,
            Grade::C => self.c,
            Grade::D => self.d,
            Grade::E => self.e,
        }
    }
}

impl Default for GradePoints {
    fn default() -> Self {
        Self {
            a: 20,
            b: 15,
            c: 10,
            d: 5,
            e: 2,
        }
    }
}
