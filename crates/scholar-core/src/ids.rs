//! Record id generation.
//!
//! Ids look like `sch-a3f8b2c1`: a fixed prefix plus 8 lowercase hex
//! characters drawn from OS randomness. They are assigned once, when a record
//! is first added, and never change.

use std::fmt::Write as _;

pub const PREFIX_SCHOLARSHIP: &str = "sch";

/// Generate a fresh prefixed id, e.g. `"sch-0c9e41d7"`.
///
/// Falls back to the current timestamp's low bits if the OS random source is
/// unavailable.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 4];
    if getrandom::fill(&mut bytes).is_err() {
        let nanos = chrono::Utc::now().timestamp_subsec_nanos();
        bytes = nanos.to_le_bytes();
    }

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    id
}

/// Generate a scholarship record id.
#[must_use]
pub fn new_scholarship_id() -> String {
    generate_id(PREFIX_SCHOLARSHIP)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn id_has_prefix_and_hex_suffix() {
        let id = new_scholarship_id();
        let (prefix, suffix) = id.split_once('-').unwrap();
        assert_eq!(prefix, "sch");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<String> = (0..200).map(|_| new_scholarship_id()).collect();
        assert_eq!(ids.len(), 200);
    }
}
