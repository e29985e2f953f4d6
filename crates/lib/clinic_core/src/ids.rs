//! Business-key generation for clinic records.
//!
//! Record routes address rows by a short prefixed key (`PAT_1a2b3c4d`)
//! rather than the store-assigned uuid primary key.

use uuid::Uuid;

/// Length of the random suffix appended to the prefix.
const SUFFIX_LEN: usize = 8;

/// Generate a prefixed business key, e.g. `record_id("PAT")` -> `PAT_9f8a2c41`.
pub fn record_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &suffix[..SUFFIX_LEN])
}
