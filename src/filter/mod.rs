//! List-query filtering.
//!
//! Narrows a student listing by optional name substring, major substring,
//! and minimum GPA. Criteria compose with logical AND; absent or blank
//! criteria impose no constraint, and the listing keeps the store's order.

use serde::Deserialize;

use crate::models::Student;

/// Optional criteria for narrowing a student listing, taken straight from
/// the query string. `gpa` is the minimum GPA, still as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCriteria {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

/// Apply the criteria to a listing, filtering in place.
pub fn apply(students: Vec<Student>, criteria: &ListCriteria) -> Vec<Student> {
    let name = normalized(&criteria.name);
    let major = normalized(&criteria.major);
    // An unparseable minimum is ignored rather than rejected.
    let min_gpa = criteria
        .gpa
        .as_deref()
        .and_then(|raw| raw.trim().parse::<f64>().ok());

    students
        .into_iter()
        .filter(|student| {
            name.as_deref()
                .map_or(true, |needle| student.name.to_lowercase().contains(needle))
                && major
                    .as_deref()
                    .map_or(true, |needle| student.major.to_lowercase().contains(needle))
                && min_gpa.map_or(true, |min| student.gpa >= min)
        })
        .collect()
}

/// Lowercase a substring criterion, treating blank input as absent.
fn normalized(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, major: &str, gpa: f64) -> Student {
        Student {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            registration_number: "202400000".to_string(),
            major: major.to_string(),
            dob: "2001-01-01".to_string(),
            gpa,
        }
    }

    fn roster() -> Vec<Student> {
        vec![
            student("John Doe", "Computer Science", 3.8),
            student("Jane Smith", "Mechanical Engineering", 3.6),
            student("Peter Jones", "Physics", 3.9),
        ]
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_returns_everything() {
        let filtered = apply(roster(), &ListCriteria::default());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_blank_criteria_impose_no_constraint() {
        let criteria = ListCriteria {
            name: Some(String::new()),
            major: Some("  ".to_string()),
            gpa: Some(String::new()),
        };
        assert_eq!(apply(roster(), &criteria).len(), 3);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let criteria = ListCriteria {
            name: Some("JANE".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&apply(roster(), &criteria)), vec!["Jane Smith"]);
    }

    #[test]
    fn test_major_substring_is_case_insensitive() {
        let criteria = ListCriteria {
            major: Some("computer".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&apply(roster(), &criteria)), vec!["John Doe"]);
    }

    #[test]
    fn test_minimum_gpa_keeps_order() {
        let criteria = ListCriteria {
            gpa: Some("3.7".to_string()),
            ..Default::default()
        };
        assert_eq!(
            names(&apply(roster(), &criteria)),
            vec!["John Doe", "Peter Jones"]
        );
    }

    #[test]
    fn test_unparseable_minimum_gpa_is_ignored() {
        let criteria = ListCriteria {
            gpa: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(apply(roster(), &criteria).len(), 3);
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let criteria = ListCriteria {
            name: Some("j".to_string()),
            major: Some("engineering".to_string()),
            gpa: Some("3.5".to_string()),
        };
        assert_eq!(names(&apply(roster(), &criteria)), vec!["Jane Smith"]);
    }

    #[test]
    fn test_gpa_threshold_is_inclusive() {
        let criteria = ListCriteria {
            gpa: Some("3.9".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&apply(roster(), &criteria)), vec!["Peter Jones"]);
    }
}
