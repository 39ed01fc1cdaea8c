//! CSV catalog import.
//!
//! Expected headers: `Title, Institution, Country, City, Level, Study Area, Intake Date,
//! Application Deadline, Tuition Cost, Description, Requirements`. The `Requirements` column holds
//! the JSON requirements payload and may be blank.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{CourseDraft, StudyLevel, UnknownStudyLevel};
use super::requirements::CourseRequirements;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Level {
        row: usize,
        source: UnknownStudyLevel,
    },
    Requirements {
        row: usize,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read course catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid course catalog CSV: {}", err),
            CatalogImportError::Level { row, source } => {
                write!(f, "row {}: {}", row, source)
            }
            CatalogImportError::Requirements { row, source } => {
                write!(f, "row {}: invalid requirements payload: {}", row, source)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Level { source, .. } => Some(source),
            CatalogImportError::Requirements { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct CourseCatalogImporter;

impl CourseCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CourseDraft>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CourseDraft>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut drafts = Vec::new();

        for (offset, record) in csv_reader.deserialize::<CourseRow>().enumerate() {
            // Header is line 1.
            let row = offset + 2;
            drafts.push(record?.into_draft(row)?);
        }

        Ok(drafts)
    }
}

#[derive(Debug, Deserialize)]
struct CourseRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Institution")]
    institution: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Level")]
    level: String,
    #[serde(rename = "Study Area")]
    study_area: String,
    #[serde(rename = "Intake Date")]
    intake_date: String,
    #[serde(rename = "Application Deadline")]
    application_deadline: String,
    #[serde(rename = "Tuition Cost")]
    tuition_cost: String,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
    #[serde(
        rename = "Requirements",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    requirements: Option<String>,
}

impl CourseRow {
    fn into_draft(self, row: usize) -> Result<CourseDraft, CatalogImportError> {
        let level = self
            .level
            .parse::<StudyLevel>()
            .map_err(|source| CatalogImportError::Level { row, source })?;

        let requirements = match self.requirements.as_deref() {
            Some(payload) => serde_json::from_str::<CourseRequirements>(payload)
                .map_err(|source| CatalogImportError::Requirements { row, source })?,
            None => CourseRequirements::Open,
        };

        Ok(CourseDraft {
            title: self.title,
            institution: self.institution,
            country: self.country,
            city: self.city,
            level,
            study_area: self.study_area,
            intake_date: self.intake_date,
            application_deadline: self.application_deadline,
            tuition_cost: self.tuition_cost,
            description: self.description,
            requirements,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
