//! Error taxonomy for the service layer.
//!
//! Three failure classes cross the service boundary:
//!
//! - [`ServiceError::Validation`] — the input shape is wrong (blank name,
//!   non-positive id). Raised before any storage access; the caller can
//!   recover by re-prompting.
//! - [`ServiceError::NotFound`] — the input is well-formed but a lookup
//!   determined the target does not exist.
//! - [`ServiceError::Storage`] — the underlying SQLite call failed. Wrapped
//!   transparently and never translated on the way up; only the presentation
//!   layer catches and prints it.

use crate::libs::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(Message),
    #[error("{0}")]
    NotFound(Message),
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}
