//! Priority list: the ordered set of assets that pin pair orientation.
//!
//! ## Semantics
//!
//! Position is the only thing that matters. Lookups use first-match (lowest
//! index) equality, so a duplicated entry only ever reports its first slot.
//!
//! ## Storage
//!
//! The identifiers live in an `Arc<[String]>`. Cloning a list shares the
//! allocation, and there is no API that mutates a list after construction.
//!
//! ## Loading
//!
//! Priority lists are published as JSON arrays of asset records. Only the
//! `id` field is read; everything else in a record is ignored.
//!
//! ```
//! use asset_pair_order::PriorityList;
//!
//! let list = PriorityList::from_json_records(r#"[
//!     { "id": "USD", "name": "US Dollar" },
//!     { "id": "DCC", "name": "DecentralChain" }
//! ]"#).unwrap();
//!
//! assert_eq!(list.position("DCC"), Some(1));
//! assert_eq!(list.position("BTC"), None);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::DataError;

/// One record of a published priority list file
#[derive(Debug, Deserialize)]
struct AssetRecord {
    id: String,
}

/// Immutable, cheaply cloneable ordered list of asset identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityList {
    ids: Arc<[String]>,
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::empty()
    }
}

impl PriorityList {
    /// Build a list from identifiers in priority order
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// A list with no entries; every pair then falls back to byte order
    pub fn empty() -> Self {
        Self { ids: Arc::from(Vec::new()) }
    }

    /// Parse a JSON array of records and project each record's `id`
    ///
    /// # Errors
    ///
    /// [`DataError::Json`] if the input is not an array of objects that each
    /// carry a string `id`.
    pub fn from_json_records(json: &str) -> Result<Self, DataError> {
        let records: Vec<AssetRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records.into_iter().map(|r| r.id)))
    }

    /// Read and parse a priority list file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_records(&json)
    }

    /// Index of the first entry equal to `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|entry| entry == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

impl<S: Into<String>> FromIterator<S> for PriorityList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_position_first_match() {
        let list = PriorityList::new(["A", "B", "A"]);
        assert_eq!(list.position("A"), Some(0));
        assert_eq!(list.position("B"), Some(1));
        assert_eq!(list.position("C"), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let list = PriorityList::empty();
        assert!(list.is_empty());
        assert!(!list.contains("DCC"));
        assert_eq!(list, PriorityList::default());
    }

    #[test]
    fn test_clone_shares_storage() {
        let list = PriorityList::new(["A", "B"]);
        let copy = list.clone();
        assert!(Arc::ptr_eq(&list.ids, &copy.ids));
        assert_eq!(copy.iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_from_json_records_ignores_extra_fields() {
        let list = PriorityList::from_json_records(
            r#"[{"id":"1","ticker":"ONE","precision":8},{"id":"2"}]"#,
        )
        .unwrap();
        assert_eq!(list.as_slice(), &["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_from_json_records_rejects_missing_id() {
        let err = PriorityList::from_json_records(r#"[{"name":"no id"}]"#).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));

        let err = PriorityList::from_json_records(r#"{"id":"not an array"}"#).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"X"}},{{"id":"Y"}}]"#).unwrap();

        let list = PriorityList::from_json_file(file.path()).unwrap();
        assert_eq!(list.position("Y"), Some(1));

        let missing = PriorityList::from_json_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(DataError::Io(_))));
    }
}
