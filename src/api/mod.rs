//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.
//! Success bodies carry the entity (or entity sequence) directly; failures
//! render through the [`crate::errors::ErrorResponse`] envelope.

mod login;
mod students;

pub use login::*;
pub use students::*;

use crate::errors::AppError;

/// Response type for all handlers: a successful payload or an [`AppError`]
/// mapped to its status code and envelope.
pub type ApiResult<T> = Result<T, AppError>;
