//! Field validation for student create and update payloads.
//!
//! Violations are collected, never fail-fast: every broken rule in a payload
//! is reported together, in field order. Errors are structured (field,
//! reason) pairs; text is rendered only at the response boundary.

use crate::models::{CreateStudentRequest, NewStudent, UpdateStudentRequest};

/// Inclusive GPA bounds.
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// The validated fields of a student record, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    RegistrationNumber,
    Major,
    Dob,
    Gpa,
}

impl Field {
    /// Human-readable label used in rendered messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::RegistrationNumber => "Registration Number",
            Field::Major => "Major",
            Field::Dob => "Date of Birth",
            Field::Gpa => "GPA",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Required on create but not usable (absent or blank).
    Missing,
    /// Supplied on update but blank.
    Empty,
    /// Supplied but outside [`GPA_MIN`]..=[`GPA_MAX`].
    OutOfRange,
}

/// A single field-rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub reason: Reason,
}

impl FieldError {
    fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// Render the boundary message for this violation.
    pub fn message(&self) -> String {
        match self.reason {
            Reason::Missing => format!("{} is required.", self.field.label()),
            Reason::Empty => format!("{} cannot be empty.", self.field.label()),
            Reason::OutOfRange => format!(
                "{} must be a number between {:.1} and {:.1}.",
                self.field.label(),
                GPA_MIN,
                GPA_MAX
            ),
        }
    }
}

/// One or more field-rule violations, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// The structured violations.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The violations rendered as boundary messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::message).collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}

/// Validate a creation payload.
///
/// On success returns the fully-populated candidate ready for
/// [`crate::store::StudentStore::insert`], so an unvalidated record cannot
/// reach the store by construction. A required text field that is absent or
/// blank reports [`Reason::Missing`]; the GPA must be supplied and within
/// bounds.
pub fn validate_create(request: &CreateStudentRequest) -> Result<NewStudent, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required_text(&request.name, Field::Name, &mut errors);
    let registration_number = required_text(
        &request.registration_number,
        Field::RegistrationNumber,
        &mut errors,
    );
    let major = required_text(&request.major, Field::Major, &mut errors);
    let dob = required_text(&request.dob, Field::Dob, &mut errors);

    let gpa = match request.gpa {
        Some(value) if gpa_in_range(value) => Some(value),
        Some(_) => {
            errors.push(FieldError::new(Field::Gpa, Reason::OutOfRange));
            None
        }
        None => {
            errors.push(FieldError::new(Field::Gpa, Reason::Missing));
            None
        }
    };

    // Every accumulator is Some exactly when its check pushed no error.
    match (name, registration_number, major, dob, gpa) {
        (Some(name), Some(registration_number), Some(major), Some(dob), Some(gpa)) => {
            Ok(NewStudent {
                name,
                registration_number,
                major,
                dob,
                gpa,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate an update payload. Only supplied fields are checked; the merge
/// itself happens in the store.
pub fn validate_update(request: &UpdateStudentRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    supplied_text(&request.name, Field::Name, &mut errors);
    supplied_text(&request.registration_number, Field::RegistrationNumber, &mut errors);
    supplied_text(&request.major, Field::Major, &mut errors);
    supplied_text(&request.dob, Field::Dob, &mut errors);

    if let Some(value) = request.gpa {
        if !gpa_in_range(value) {
            errors.push(FieldError::new(Field::Gpa, Reason::OutOfRange));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Check a required text field: present and non-blank. Returns the owned
/// value when it passes.
fn required_text(
    value: &Option<String>,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => {
            errors.push(FieldError::new(field, Reason::Missing));
            None
        }
    }
}

/// Check an optional text field: if supplied, it must not be blank.
fn supplied_text(value: &Option<String>, field: Field, errors: &mut Vec<FieldError>) {
    if let Some(text) = value {
        if text.trim().is_empty() {
            errors.push(FieldError::new(field, Reason::Empty));
        }
    }
}

fn gpa_in_range(value: f64) -> bool {
    (GPA_MIN..=GPA_MAX).contains(&value)
}
