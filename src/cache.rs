//! Compiled pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use crate::error::PatternError;

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

type Compiled<P> = Result<Arc<P>, PatternError>;

/// LRU of compiled patterns keyed by pattern text.
///
/// Failed compiles are cached too, so a bad pattern is reported once.
pub(crate) struct PatternCache<P> {
    entries: Mutex<LruCache<String, Compiled<P>>>,
}

impl<P> PatternCache<P> {
    pub fn new() -> Self {
        PatternCache {
            entries: Mutex::new(LruCache::new(CACHE_SIZE)),
        }
    }

    /// Get or compile a pattern, using the cache.
    ///
    /// The flag is `true` when `compile` ran for this call.
    pub fn get_or_compile<F>(&self, pattern: &str, compile: F) -> (Compiled<P>, bool)
    where
        F: FnOnce(&str) -> Result<P, PatternError>,
    {
        let Ok(mut cache) = self.entries.lock() else {
            return (compile(pattern).map(Arc::new), true);
        };

        if let Some(entry) = cache.get(pattern) {
            return (entry.clone(), false);
        }

        tracing::debug!(pattern, "compiling format pattern");
        let entry = compile(pattern).map(Arc::new);
        cache.put(pattern.to_string(), entry.clone());
        (entry, true)
    }
}

impl<P> Default for PatternCache<P> {
    fn default() -> Self {
        Self::new()
    }
}
