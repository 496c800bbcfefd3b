//! In-memory record store.
//!
//! The store owns the canonical student collection and is the only code
//! that mutates it. All access goes through a single `RwLock`; operations
//! are synchronous and never hold the lock across an await point, so the
//! collection stays effectively sequential under the async server. Nothing
//! survives a restart.

use parking_lot::RwLock;

use crate::models::{NewStudent, Student, UpdateStudentRequest};

/// Demonstration dataset loaded when seeding is enabled.
const DEMO_STUDENTS: [(&str, &str, &str, &str, f64); 10] = [
    ("John Doe", "202401234", "Computer Science", "2001-05-05", 3.8),
    ("Jane Smith", "202401245", "Mechanical Engineering", "2002-05-21", 3.6),
    ("Peter Jones", "202401267", "Physics", "2003-01-15", 3.9),
    ("Mary Johnson", "202401288", "Biology", "2001-11-20", 3.5),
    ("David Lee", "202401301", "Chemical Engineering", "2002-07-10", 3.7),
    ("Sarah Brown", "202401323", "Mathematics", "2003-03-03", 4.0),
    ("Michael Davis", "202401345", "Electrical Engineering", "2001-09-18", 3.4),
    ("Jessica Wilson", "202401366", "Psychology", "2002-12-01", 3.9),
    ("Chris Green", "202401389", "Sociology", "2003-06-25", 3.2),
    ("Emily White", "202401400", "Architecture", "2001-04-11", 3.75),
];

/// The canonical in-memory student collection.
///
/// Backed by a `Vec` so listings keep insertion order, which makes UI
/// rendering stable across requests.
#[derive(Debug, Default)]
pub struct StudentStore {
    students: RwLock<Vec<Student>>,
}

impl StudentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order. Callers get clones; the canonical
    /// collection is never handed out.
    pub fn list(&self) -> Vec<Student> {
        self.students.read().clone()
    }

    /// Look up a record by id. Absence is a valid result, not an error.
    pub fn get(&self, id: &str) -> Option<Student> {
        let found = self
            .students
            .read()
            .iter()
            .find(|student| student.id == id)
            .cloned();
        tracing::debug!(id = %id, found = found.is_some(), "student lookup");
        found
    }

    /// Store a validated candidate under a fresh unique id and return the
    /// full record. UUIDs cannot collide under rapid sequential creation,
    /// and deleted ids are never reused.
    pub fn insert(&self, candidate: NewStudent) -> Student {
        let student = Student {
            id: uuid::Uuid::new_v4().to_string(),
            name: candidate.name,
            registration_number: candidate.registration_number,
            major: candidate.major,
            dob: candidate.dob,
            gpa: candidate.gpa,
        };
        self.students.write().push(student.clone());
        tracing::info!(id = %student.id, "student created");
        student
    }

    /// Merge the supplied fields over an existing record and return the
    /// result, or `None` when the id is absent. The id itself is never
    /// overwritten.
    pub fn update(&self, id: &str, changes: &UpdateStudentRequest) -> Option<Student> {
        let mut students = self.students.write();
        let student = students.iter_mut().find(|student| student.id == id)?;

        if let Some(name) = &changes.name {
            student.name = name.clone();
        }
        if let Some(registration_number) = &changes.registration_number {
            student.registration_number = registration_number.clone();
        }
        if let Some(major) = &changes.major {
            student.major = major.clone();
        }
        if let Some(dob) = &changes.dob {
            student.dob = dob.clone();
        }
        if let Some(gpa) = changes.gpa {
            student.gpa = gpa;
        }

        tracing::info!(id = %id, "student updated");
        Some(student.clone())
    }

    /// Remove a record, reporting whether one was actually removed. A
    /// second delete of the same id returns `false` rather than an error.
    pub fn delete(&self, id: &str) -> bool {
        let mut students = self.students.write();
        let before = students.len();
        students.retain(|student| student.id != id);
        let removed = students.len() < before;
        if removed {
            tracing::info!(id = %id, "student deleted");
        }
        removed
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.students.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Populate the store with the demonstration dataset, going through the
    /// normal insert path so the records get store-assigned ids. Seeding a
    /// non-empty store is a no-op.
    pub fn seed_demo_records(&self) {
        if !self.is_empty() {
            return;
        }
        for (name, registration_number, major, dob, gpa) in DEMO_STUDENTS {
            self.insert(NewStudent {
                name: name.to_string(),
                registration_number: registration_number.to_string(),
                major: major.to_string(),
                dob: dob.to_string(),
                gpa,
            });
        }
        tracing::info!(count = self.len(), "seeded demonstration students");
    }
}
