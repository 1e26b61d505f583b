//! # scholar-core
//!
//! Record model and derived state for the scholarship tracker.
//!
//! This crate holds everything that can be answered from a single record
//! without touching storage:
//! - The `ScholarshipRecord` entity and its closed vocabulary enums
//! - The fixed 14-slot document checklist
//! - Deadline parsing, urgency and section classification
//! - Keyword-based document detection over requirement text
//! - Id generation and cross-cutting error types

pub mod deadline;
pub mod detect;
pub mod documents;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
