//! Persistent page → schema cache.
//!
//! The cache is one JSON document mapping page identities to schemas:
//!
//! ```json
//! {
//!   "https://example.com/careers": {
//!     "title": "html > body > ul.jobs > li.job > h3",
//!     "link": "html > body > ul.jobs > li.job > a",
//!     "location": "html > body > ul.jobs > li.job > span.loc"
//!   }
//! }
//! ```
//!
//! It is loaded fully into memory once and shared between requests. Every
//! update re-reads the persisted document, sets one key and replaces the file
//! through a rename, so readers of the file never see a half-written document
//! and entries written by other processes since load are kept.

use crate::error::Result;
use crate::schema::Schema;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

type SchemaDocument = BTreeMap<String, Schema>;

/// Page identity → schema store, safe to share between threads.
///
/// ```rust
/// use jobscout::{Schema, SchemaCache, Selector};
///
/// let cache = SchemaCache::in_memory();
/// let schema = Schema {
///     title: Some(Selector::from("html > body > h2")),
///     ..Schema::default()
/// };
///
/// cache.put("https://example.com/careers", schema.clone()).unwrap();
/// assert_eq!(cache.get("https://example.com/careers"), Some(schema));
/// assert_eq!(cache.get("https://example.com/careers/"), None);
/// ```
#[derive(Debug)]
pub struct SchemaCache {
    /// Backing document, `None` for a memory-only cache.
    path: Option<PathBuf>,
    entries: RwLock<HashMap<String, Schema>>,
    /// Serializes read-modify-write cycles on the backing document.
    write_lock: Mutex<()>,
}

impl SchemaCache {
    /// A cache that is never persisted.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: RwLock::new(HashMap::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Loads the cache document at `path`. A missing file is an empty cache.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or is not a schema document.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = read_document(&path)?;
        log::debug!(
            "Loaded {} cached schemas from {}",
            document.len(),
            path.display()
        );

        Ok(Self {
            path: Some(path),
            entries: RwLock::new(document.into_iter().collect()),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, page: &str) -> Option<Schema> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(page)
            .cloned()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(page)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `schema` for `page`, replacing any previous entry.
    ///
    /// The backing document is updated before memory, so a failed write leaves
    /// both unchanged.
    pub fn put(&self, page: &str, schema: Schema) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(path) = &self.path {
            let mut document = read_document(path)?;
            document.insert(page.to_string(), schema.clone());
            write_document(path, &document)?;
            log::info!("Cached schema for {} in {}", page, path.display());
        }

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(page.to_string(), schema);
        Ok(())
    }

    /// Drops the entry for `page` so the next lookup infers again.
    pub fn remove(&self, page: &str) -> Result<Option<Schema>> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(path) = &self.path {
            let mut document = read_document(path)?;
            if document.remove(page).is_some() {
                write_document(path, &document)?;
            }
        }

        Ok(self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(page))
    }

    /// Writes every in-memory entry to the backing document.
    ///
    /// Entries other handles stored since this cache was loaded are kept; for
    /// pages present in both, the in-memory schema wins.
    pub fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = read_document(path)?;
        document.extend(
            self.entries
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .map(|(page, schema)| (page.clone(), schema.clone())),
        );
        write_document(path, &document)
    }
}

fn read_document(path: &Path) -> Result<SchemaDocument> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Ok(SchemaDocument::new()),
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(SchemaDocument::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_document(path: &Path, document: &SchemaDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    fs::write(&staging, serde_json::to_string_pretty(document)?)?;
    fs::rename(&staging, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Selector;

    fn schema(title: &str) -> Schema {
        Schema {
            title: Some(Selector::from(title)),
            link: Some(Selector::from("html > body > a")),
            location: None,
        }
    }

    #[test]
    fn memory_cache_never_touches_disk() {
        let cache = SchemaCache::in_memory();
        assert!(cache.is_empty());
        cache.put("a", schema("html > body > h1")).unwrap();
        cache.flush().unwrap();
        assert!(cache.path().is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_replaces_existing_entry() {
        let cache = SchemaCache::in_memory();
        cache.put("a", schema("html > body > h1")).unwrap();
        cache.put("a", schema("html > body > h2")).unwrap();
        assert_eq!(cache.get("a"), Some(schema("html > body > h2")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn remove_returns_previous_entry() {
        let cache = SchemaCache::in_memory();
        cache.put("a", schema("html > body > h1")).unwrap();
        assert_eq!(cache.remove("a").unwrap(), Some(schema("html > body > h1")));
        assert_eq!(cache.remove("a").unwrap(), None);
        assert!(!cache.contains("a"));
    }
}
