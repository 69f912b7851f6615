//! # Catalog Cache
//!
//! Holds one catalog, fetched from a [`CatalogSource`] the first time it is
//! needed and kept until refreshed or invalidated. There is no expiry and no
//! locking: the cache belongs to whoever created it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::cache::{BuiltinSource, CatalogCache};
//!
//! let mut cache = CatalogCache::new(BuiltinSource);
//! assert!(!cache.is_loaded());
//! let count = cache.get()?.len();
//! assert_eq!(count, 12);
//! assert!(cache.is_loaded());
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::errors::CalcResult;
use crate::file_io;

/// Somewhere a catalog can be fetched from.
pub trait CatalogSource {
    fn fetch(&self) -> CalcResult<Catalog>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// The catalog compiled into the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn fetch(&self) -> CalcResult<Catalog> {
        Ok(Catalog::builtin().clone())
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// A catalog JSON file, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> CalcResult<Catalog> {
        file_io::load_catalog(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct CatalogCache<S: CatalogSource> {
    source: S,
    catalog: Option<Catalog>,
}

impl<S: CatalogSource> CatalogCache<S> {
    pub fn new(source: S) -> Self {
        CatalogCache { source, catalog: None }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Cached catalog, fetching it first if nothing is cached.
    ///
    /// A failed fetch leaves the cache empty.
    pub fn get(&mut self) -> CalcResult<&Catalog> {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => {
                let catalog = self.source.fetch()?;
                debug!(source = %self.source.describe(), calculators = catalog.len(), "catalog cached");
                catalog
            }
        };
        Ok(self.catalog.insert(catalog))
    }

    /// Fetch again and replace the cached catalog.
    ///
    /// On failure the previously cached catalog is kept.
    pub fn refresh(&mut self) -> CalcResult<&Catalog> {
        let catalog = self.source.fetch()?;
        info!(source = %self.source.describe(), calculators = catalog.len(), "catalog refreshed");
        Ok(self.catalog.insert(catalog))
    }

    /// Drop the cached catalog; the next `get` fetches again
    pub fn invalidate(&mut self) {
        self.catalog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::errors::CalcError;

    struct CountingSource {
        fetches: Cell<u32>,
        fail: Cell<bool>,
    }

    impl CountingSource {
        fn new() -> Self {
            CountingSource {
                fetches: Cell::new(0),
                fail: Cell::new(false),
            }
        }
    }

    impl CatalogSource for CountingSource {
        fn fetch(&self) -> CalcResult<Catalog> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail.get() {
                return Err(CalcError::file_error("read", "test", "unavailable"));
            }
            Ok(Catalog::new(format!("fetch {}", self.fetches.get()), Vec::new()))
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[test]
    fn test_loads_once() {
        let mut cache = CatalogCache::new(CountingSource::new());
        cache.get().unwrap();
        cache.get().unwrap();
        assert_eq!(cache.source().fetches.get(), 1);
    }

    #[test]
    fn test_refresh_replaces() {
        let mut cache = CatalogCache::new(CountingSource::new());
        assert_eq!(cache.get().unwrap().meta.source, "fetch 1");
        assert_eq!(cache.refresh().unwrap().meta.source, "fetch 2");
        assert_eq!(cache.get().unwrap().meta.source, "fetch 2");
    }

    #[test]
    fn test_failed_refresh_keeps_previous() {
        let mut cache = CatalogCache::new(CountingSource::new());
        cache.get().unwrap();
        cache.source().fail.set(true);
        assert!(cache.refresh().is_err());
        assert!(cache.is_loaded());
        assert_eq!(cache.get().unwrap().meta.source, "fetch 1");
    }

    #[test]
    fn test_invalidate_forces_fetch() {
        let mut cache = CatalogCache::new(CountingSource::new());
        cache.get().unwrap();
        cache.invalidate();
        assert!(!cache.is_loaded());
        cache.get().unwrap();
        assert_eq!(cache.source().fetches.get(), 2);
    }

    #[test]
    fn test_failed_get_stays_empty() {
        let source = CountingSource::new();
        source.fail.set(true);
        let mut cache = CatalogCache::new(source);
        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());
    }
}
