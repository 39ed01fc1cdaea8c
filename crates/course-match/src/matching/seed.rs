//! Built-in sample catalog used when no external catalog is configured.

use super::domain::{CourseDraft, Grade, StudyLevel};
use super::requirements::{CourseRequirements, DegreeRequirements, GradeRequirements};

struct Listing {
    title: &'static str,
    institution: &'static str,
    country: &'static str,
    city: &'static str,
    level: StudyLevel,
    study_area: &'static str,
    intake_date: &'static str,
    application_deadline: &'static str,
    tuition_cost: &'static str,
    description: &'static str,
}

impl Listing {
    fn into_draft(self, requirements: CourseRequirements) -> CourseDraft {
        CourseDraft {
            title: self.title.to_string(),
            institution: self.institution.to_string(),
            country: self.country.to_string(),
            city: self.city.to_string(),
            level: self.level,
            study_area: self.study_area.to_string(),
            intake_date: self.intake_date.to_string(),
            application_deadline: self.application_deadline.to_string(),
            tuition_cost: self.tuition_cost.to_string(),
            description: Some(self.description.to_string()),
            requirements,
        }
    }
}

fn grades(min_grades: &[(&str, Grade)], subjects: &[&str]) -> CourseRequirements {
    CourseRequirements::Undergraduate(GradeRequirements {
        min_grades: min_grades
            .iter()
            .map(|(subject, grade)| (subject.to_string(), *grade))
            .collect(),
        subjects: subjects.iter().map(|subject| subject.to_string()).collect(),
        work_experience: None,
    })
}

fn degree(undergrad_requirement: &str, work_experience: Option<&str>) -> CourseRequirements {
    CourseRequirements::Postgraduate(DegreeRequirements {
        undergrad_requirement: Some(undergrad_requirement.to_string()),
        work_experience: work_experience.map(str::to_string),
    })
}

/// Sample programs spanning both study levels and every requirement shape the matcher grades.
pub fn sample_courses() -> Vec<CourseDraft> {
    vec![
        Listing {
            title: "Computer Science BSc",
            institution: "University of Cambridge",
            country: "United Kingdom",
            city: "Cambridge",
            level: StudyLevel::Undergraduate,
            study_area: "Computer Science",
            intake_date: "September 2024",
            application_deadline: "January 15, 2024",
            tuition_cost: "£9,250/year",
            description: "A comprehensive computer science program covering algorithms, software engineering, and artificial intelligence.",
        }
        .into_draft(grades(
            &[("Mathematics", Grade::A), ("Physics", Grade::B)],
            &["Mathematics", "Physics"],
        )),
        Listing {
            title: "Engineering MEng",
            institution: "Imperial College London",
            country: "United Kingdom",
            city: "London",
            level: StudyLevel::Undergraduate,
            study_area: "Engineering",
            intake_date: "September 2024",
            application_deadline: "January 15, 2024",
            tuition_cost: "£9,250/year",
            description: "Four-year integrated masters program in engineering with specialization options.",
        }
        .into_draft(grades(
            &[("Mathematics", Grade::A), ("Physics", Grade::A)],
            &["Mathematics", "Physics"],
        )),
        Listing {
            title: "Business Management BA",
            institution: "University of Oxford",
            country: "United Kingdom",
            city: "Oxford",
            level: StudyLevel::Undergraduate,
            study_area: "Business",
            intake_date: "September 2024",
            application_deadline: "January 15, 2024",
            tuition_cost: "£9,250/year",
            description: "Strategic business management program with focus on leadership and innovation.",
        }
        .into_draft(grades(
            &[("Mathematics", Grade::B), ("English", Grade::B)],
            &["Mathematics", "English"],
        )),
        Listing {
            title: "Psychology BSc",
            institution: "University College London",
            country: "United Kingdom",
            city: "London",
            level: StudyLevel::Undergraduate,
            study_area: "Psychology",
            intake_date: "September 2024",
            application_deadline: "January 15, 2024",
            tuition_cost: "£9,250/year",
            description: "Evidence-based psychology program covering cognitive, social, and clinical psychology.",
        }
        .into_draft(grades(
            &[("Biology", Grade::B), ("Psychology", Grade::B)],
            &["Biology", "Psychology"],
        )),
        Listing {
            title: "Data Science MSc",
            institution: "University of Edinburgh",
            country: "United Kingdom",
            city: "Edinburgh",
            level: StudyLevel::Postgraduate,
            study_area: "Computer Science",
            intake_date: "September 2024",
            application_deadline: "March 31, 2024",
            tuition_cost: "£25,000/year",
            description: "Advanced data science program focusing on machine learning and big data analytics.",
        }
        .into_draft(degree(
            "Upper Second Class or equivalent in Computer Science, Mathematics, or related field",
            None,
        )),
        Listing {
            title: "MBA Executive",
            institution: "London Business School",
            country: "United Kingdom",
            city: "London",
            level: StudyLevel::Postgraduate,
            study_area: "Business",
            intake_date: "January 2024",
            application_deadline: "October 31, 2023",
            tuition_cost: "£87,900/year",
            description: "Executive MBA program for senior professionals with significant management experience.",
        }
        .into_draft(degree(
            "Any bachelor degree",
            Some("5+ years management experience"),
        )),
        Listing {
            title: "Medicine MBBS",
            institution: "University of Toronto",
            country: "Canada",
            city: "Toronto",
            level: StudyLevel::Undergraduate,
            study_area: "Medicine",
            intake_date: "September 2024",
            application_deadline: "October 1, 2023",
            tuition_cost: "CAD $58,160/year",
            description: "Six-year medical degree program leading to medical licensure in Canada.",
        }
        .into_draft(grades(
            &[
                ("Biology", Grade::A),
                ("Chemistry", Grade::A),
                ("Physics", Grade::B),
                ("Mathematics", Grade::B),
            ],
            &["Biology", "Chemistry", "Physics", "Mathematics"],
        )),
        Listing {
            title: "Artificial Intelligence MS",
            institution: "Stanford University",
            country: "United States",
            city: "Stanford",
            level: StudyLevel::Postgraduate,
            study_area: "Computer Science",
            intake_date: "September 2024",
            application_deadline: "December 15, 2023",
            tuition_cost: "$58,080/year",
            description: "Cutting-edge AI program covering machine learning, neural networks, and robotics.",
        }
        .into_draft(degree(
            "Bachelor's in Computer Science, Mathematics, or Engineering with 3.5+ GPA",
            None,
        )),
    ]
}
