//! Query error types.
//!
//! Running a query never fails. Errors only come from turning user text into
//! a query.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort key '{0}' (expected deadline_asc, deadline_desc, name_asc, name_desc or status)")]
    UnknownSortKey(String),
}
