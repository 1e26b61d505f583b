//! The record collection stored as one JSON array in a settings slot.
//!
//! Every mutation is load, change, save of the whole collection. Reads are
//! lenient: anything that cannot be decoded is logged and left out rather
//! than failing the caller. Mutations work on the raw stored entries so a
//! record this version cannot decode is written back as it was, and they
//! refuse to write over a collection they cannot read.

use serde_json::Value;

use scholar_config::StoreConfig;
use scholar_core::entities::ScholarshipRecord;
use scholar_core::enums::ApplicationStatus;
use scholar_core::errors::CoreError;
use scholar_core::ids::new_scholarship_id;

use crate::error::StoreError;
use crate::settings::{FileSettingsStore, SettingsStore};

pub struct ScholarshipRepository<S> {
    store: S,
    slot: String,
}

impl ScholarshipRepository<FileSettingsStore> {
    /// Repository over the settings file named in `config`.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(FileSettingsStore::new(&config.path), config.slot.clone())
    }
}

impl<S: SettingsStore> ScholarshipRepository<S> {
    #[must_use]
    pub fn new(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Every stored record in stored order.
    ///
    /// An absent slot, an unreadable store or a blob that is not a JSON array
    /// yields an empty collection. Records that fail to decode are skipped
    /// here but stay in storage.
    #[must_use]
    pub fn load_all(&self) -> Vec<ScholarshipRecord> {
        let entries = match self.load_entries() {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(slot = %self.slot, %error, "stored collection unreadable");
                return Vec::new();
            }
        };

        let total = entries.len();
        let records: Vec<ScholarshipRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                serde_json::from_value(value)
                    .map_err(|error| {
                        tracing::warn!(index, %error, "skipping undecodable record");
                    })
                    .ok()
            })
            .collect();

        tracing::debug!(slot = %self.slot, total, loaded = records.len(), "loaded records");
        records
    }

    /// Replace the stored collection with `records`.
    ///
    /// Entries that [`load_all`](Self::load_all) skipped are not carried over;
    /// use [`add`](Self::add), [`update`](Self::update) or
    /// [`delete`](Self::delete) to change one record and keep the rest.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or writing fails.
    pub fn save_all(&mut self, records: &[ScholarshipRecord]) -> Result<(), StoreError> {
        let entries = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.save_entries(&entries)
    }

    /// Validate, normalize and append `record`, assigning an id when it has none.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a missing name or organization or an
    /// id already in the collection; the stored collection is left unchanged.
    /// Returns `StoreError` without writing when the stored collection cannot
    /// be read.
    pub fn add(&mut self, mut record: ScholarshipRecord) -> Result<ScholarshipRecord, StoreError> {
        record.validate()?;
        record.normalize();

        let mut entries = self.load_entries()?;
        if record.id.trim().is_empty() {
            record.id = new_scholarship_id();
        } else if entries.iter().any(|e| entry_id(e) == Some(record.id.as_str())) {
            return Err(CoreError::Validation(format!("duplicate id: {}", record.id)).into());
        }

        entries.push(serde_json::to_value(&record)?);
        self.save_entries(&entries)?;
        Ok(record)
    }

    /// Replace the stored record with the same id as `record`.
    ///
    /// Returns `false` without writing when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a missing name or organization, or
    /// `StoreError` if the stored collection cannot be read or written.
    pub fn update(&mut self, mut record: ScholarshipRecord) -> Result<bool, StoreError> {
        record.validate()?;
        record.normalize();

        let mut entries = self.load_entries()?;
        let Some(entry) = entries
            .iter_mut()
            .find(|e| entry_id(e) == Some(record.id.as_str()))
        else {
            tracing::debug!(id = %record.id, "update of unknown id ignored");
            return Ok(false);
        };
        *entry = serde_json::to_value(&record)?;
        self.save_entries(&entries)?;
        Ok(true)
    }

    /// Remove the record with `id`. Returns `false` when there was none.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the stored collection cannot be read or written.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut entries = self.load_entries()?;
        let before = entries.len();
        entries.retain(|e| entry_id(e) != Some(id));
        if entries.len() == before {
            return Ok(false);
        }
        self.save_entries(&entries)?;
        Ok(true)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<ScholarshipRecord> {
        self.load_all().into_iter().find(|r| r.id == id)
    }

    /// Like [`get`](Self::get) but reports a missing id as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no record has `id`.
    pub fn require(&self, id: &str) -> Result<ScholarshipRecord, CoreError> {
        self.get(id).ok_or_else(|| CoreError::NotFound { id: id.to_string() })
    }

    #[must_use]
    pub fn by_status(&self, status: ApplicationStatus) -> Vec<ScholarshipRecord> {
        self.load_all()
            .into_iter()
            .filter(|r| r.status == status)
            .collect()
    }

    /// Drop the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if writing fails.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.slot)?;
        tracing::debug!(slot = %self.slot, "cleared records");
        Ok(())
    }

    /// Stored entries as raw JSON, undecodable ones included.
    fn load_entries(&self) -> Result<Vec<Value>, StoreError> {
        match self.store.get_string(&self.slot)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_entries(&mut self, entries: &[Value]) -> Result<(), StoreError> {
        self.store
            .put_string(&self.slot, serde_json::to_string(entries)?)?;
        tracing::debug!(slot = %self.slot, count = entries.len(), "saved records");
        Ok(())
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}
