use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shareable in-memory mapping from short key to target URL
///
/// Cloning the store is cheap and every clone refers to the same map.
/// Reads take the shared lock, writes take the exclusive lock, and nothing
/// performs I/O while holding either.
#[derive(Clone, Default)]
pub struct UrlStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping for `key`
    ///
    /// The caller is expected to pass a key obtained from [`UrlStore::next_key`].
    /// An existing entry with the same key is overwritten.
    pub fn put(&self, key: String, target: String) {
        tracing::debug!("Storing short key: {}", key);
        self.inner.write().insert(key, target);
    }

    /// Look up the target URL for `key`
    ///
    /// # Returns
    /// * `Some(target)` - Key is registered
    /// * `None` - Key was never issued
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).cloned()
    }

    /// Produce the key the next inserted entry would receive
    ///
    /// Keys are the lower-case hexadecimal rendering of the number of stored
    /// entries. This takes its own lock, so a `next_key` followed by `put` is
    /// two critical sections: concurrent callers can observe the same key and
    /// the later `put` replaces the earlier entry. Use [`UrlStore::shorten`]
    /// when that matters.
    pub fn next_key(&self) -> String {
        format!("{:x}", self.inner.read().len())
    }

    /// Generate a key and store `target` under it in one critical section
    ///
    /// Keys handed out by this method are never reused, regardless of how
    /// many callers race on it.
    pub fn shorten(&self, target: String) -> String {
        let mut entries = self.inner.write();
        let key = format!("{:x}", entries.len());
        entries.insert(key.clone(), target);
        key
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
