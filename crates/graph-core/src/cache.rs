// File: crates/graph-core/src/cache.rs
// Summary: Explicit preview-image cache keyed by chart kind.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::kind::ChartKind;

/// Byte cache for chart preview images.
///
/// Constructed by the caller and passed where needed; there is no process
/// global. Cloned handles share the same storage and may be used from
/// multiple threads.
#[derive(Clone, Debug, Default)]
pub struct PreviewCache {
    entries: Arc<RwLock<HashMap<ChartKind, Arc<[u8]>>>>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached bytes for `kind`, or run `load` and cache its result.
    ///
    /// The read lock covers the hit path; a miss re-checks under the write
    /// lock so concurrent callers load at most once. A loader failure is
    /// returned as-is and nothing is cached for that kind.
    pub fn get_or_load<E>(
        &self,
        kind: ChartKind,
        load: impl FnOnce() -> Result<Vec<u8>, E>,
    ) -> Result<Arc<[u8]>, E> {
        if let Some(data) = self.entries.read().expect("cache lock poisoned").get(&kind) {
            return Ok(Arc::clone(data));
        }

        let mut entries = self.entries.write().expect("cache lock poisoned");
        if let Some(data) = entries.get(&kind) {
            return Ok(Arc::clone(data));
        }

        let data: Arc<[u8]> = load()?.into();
        entries.insert(kind, Arc::clone(&data));
        Ok(data)
    }

    /// Bytes for `kind` if already cached.
    pub fn get(&self, kind: ChartKind) -> Option<Arc<[u8]>> {
        self.entries
            .read()
            .expect("cache lock poisoned")
            .get(&kind)
            .map(Arc::clone)
    }

    /// Number of kinds with cached bytes.
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
