//! Student model matching the frontend Student interface.

use serde::{Deserialize, Serialize};

/// A student record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Opaque identifier assigned by the store at creation; never reused.
    pub id: String,
    pub name: String,
    pub registration_number: String,
    pub major: String,
    /// Calendar date as text (e.g. "2000-01-01"); no time-of-day semantics.
    pub dob: String,
    /// Grade Point Average, constrained to [0.0, 4.0].
    pub gpa: f64,
}

/// A validated creation candidate: every field a [`Student`] needs except
/// the id, which the store assigns. Produced only by create-validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub registration_number: String,
    pub major: String,
    pub dob: String,
    pub gpa: f64,
}

/// Request body for creating a new student.
///
/// Every field is optional at the wire level so the validator can report
/// all missing fields together instead of serde rejecting the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// Request body for updating an existing student. Only supplied fields are
/// validated and merged over the stored record; the id is never part of
/// the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
}
