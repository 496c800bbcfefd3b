//! Data models for the student records application.
//!
//! These models match the frontend Student interface exactly; wire shapes
//! are camelCase JSON.

mod student;

pub use student::*;
