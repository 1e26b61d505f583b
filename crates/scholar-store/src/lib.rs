//! # scholar-store
//!
//! Persistence for the scholarship collection. The whole collection is one
//! JSON array stored as a string under a slot key in a [`SettingsStore`].
//!
//! [`FileSettingsStore`] keeps settings in a JSON object file on disk;
//! [`MemorySettingsStore`] keeps them in memory for tests.

pub mod error;
pub mod repository;
pub mod settings;

pub use error::StoreError;
pub use repository::ScholarshipRepository;
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore};
