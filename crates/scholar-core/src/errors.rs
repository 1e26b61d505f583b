//! Cross-cutting error types for the scholarship tracker.
//!
//! Derived-state queries never fail; these errors only surface when a caller
//! asks to save or look up a record. Storage errors live in `scholar-store`
//! and wrap [`CoreError`] for rejected saves.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required text field is empty or whitespace.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Record lookup by id returned nothing.
    #[error("Scholarship not found: {id}")]
    NotFound { id: String },

    /// Data failed validation (duplicate id, bad format, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}
