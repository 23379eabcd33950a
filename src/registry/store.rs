//! Generic record collection
//!
//! Every feature domain in the console owns a flat list of records with the
//! same operation set: insert, list, get, update, remove, and substring
//! search. `Collection<T>` factors that pattern out once.
//!
//! Thread-safe via Tokio's async RwLock; a collection is the unit of mutual
//! exclusion. Records live in insertion order and ids are assigned on insert
//! and never reused within a process lifetime. Nothing is persisted: the
//! whole registry resets when the process restarts.

use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

use super::error::{RegistryError, RegistryResult};

/// A record that can live in a [`Collection`]
///
/// Implementations declare their display kind (used in error messages),
/// expose their id for lookup, validate required fields before any write,
/// and provide the text that substring search matches against.
pub trait Record: Clone + Send + Sync + 'static {
    /// Display name used in errors ("doctor", "blood issue", ...)
    const KIND: &'static str;

    /// Current record id (0 until inserted)
    fn id(&self) -> u32;

    /// Assign the record id (called by the collection on insert/update)
    fn set_id(&mut self, id: u32);

    /// Required-field presence check, run before insert and update
    fn validate(&self) -> RegistryResult<()>;

    /// Text matched by case-insensitive substring search
    fn search_text(&self) -> String;
}

/// An in-memory list of records with CRUD and search
pub struct Collection<T: Record> {
    records: RwLock<Vec<T>>,
    next_id: AtomicU32,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection; ids start at 1
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Validate and insert a record, assigning the next id
    ///
    /// Returns the stored record with its id filled in.
    pub async fn insert(&self, mut record: T) -> RegistryResult<T> {
        record.validate()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.set_id(id);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    /// Snapshot of all records in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Look up a record by id
    pub async fn get(&self, id: u32) -> Option<T> {
        self.records.read().await.iter().find(|r| r.id() == id).cloned()
    }

    /// Validate and replace the record with the given id
    pub async fn update(&self, id: u32, mut record: T) -> RegistryResult<T> {
        record.set_id(id);
        record.validate()?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(RegistryError::NotFound { kind: T::KIND, id }),
        }
    }

    /// Remove and return the record with the given id
    pub async fn remove(&self, id: u32) -> RegistryResult<T> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id() == id) {
            Some(pos) => Ok(records.remove(pos)),
            None => Err(RegistryError::NotFound { kind: T::KIND, id }),
        }
    }

    /// Case-insensitive substring search over each record's search text
    ///
    /// An empty or whitespace-only query returns the full list.
    pub async fn search(&self, query: &str) -> Vec<T> {
        let needle = query.trim().to_lowercase();
        let records = self.records.read().await;
        if needle.is_empty() {
            return records.clone();
        }
        records
            .iter()
            .filter(|r| r.search_text().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Number of records currently stored
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True if the collection holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Drop all records (ids keep counting up)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::error::require;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        title: String,
    }

    impl Record for Note {
        const KIND: &'static str = "note";

        fn id(&self) -> u32 {
            self.id
        }

        fn set_id(&mut self, id: u32) {
            self.id = id;
        }

        fn validate(&self) -> RegistryResult<()> {
            require(Self::KIND, "title", &self.title)
        }

        fn search_text(&self) -> String {
            self.title.clone()
        }
    }

    fn note(title: &str) -> Note {
        Note {
            id: 0,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let col = Collection::new();
        let a = col.insert(note("first")).await.unwrap();
        let b = col.insert(note("second")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(col.len().await, 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_required_field() {
        let col = Collection::new();
        let err = col.insert(note("  ")).await.unwrap_err();
        assert!(matches!(err, RegistryError::MissingField { field: "title", .. }));
        assert!(col.is_empty().await, "rejected record must not be stored");
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let col = Collection::new();
        col.insert(note("draft")).await.unwrap();
        let updated = col.update(1, note("final")).await.unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.id, 1);

        let listed = col.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "final");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let col: Collection<Note> = Collection::new();
        let err = col.update(42, note("ghost")).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn test_remove() {
        let col = Collection::new();
        col.insert(note("keep")).await.unwrap();
        col.insert(note("drop")).await.unwrap();

        let removed = col.remove(2).await.unwrap();
        assert_eq!(removed.title, "drop");
        assert_eq!(col.len().await, 1);
        assert!(col.get(2).await.is_none());
        assert!(col.remove(2).await.is_err());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let col = Collection::new();
        col.insert(note("Ward round")).await.unwrap();
        col.insert(note("Pharmacy restock")).await.unwrap();
        col.insert(note("ward transfer")).await.unwrap();

        let hits = col.search("WARD").await;
        assert_eq!(hits.len(), 2);

        let hits = col.search("restock").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pharmacy restock");

        // Empty query returns everything
        assert_eq!(col.search("").await.len(), 3);
        assert_eq!(col.search("   ").await.len(), 3);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let col = Collection::new();
        col.insert(note("a")).await.unwrap();
        col.remove(1).await.unwrap();
        let b = col.insert(note("b")).await.unwrap();
        assert_eq!(b.id, 2);
    }
}
