//! Entity structs for the scholarship tracker.
//!
//! The record derives `Serialize`, `Deserialize`, and `JsonSchema`; field
//! names are camelCase on the wire so previously stored collections decode
//! unchanged.

mod scholarship;

pub use scholarship::ScholarshipRecord;
