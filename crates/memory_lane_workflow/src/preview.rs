//! In-memory preview store.

use memory_lane_core::LocalFile;
use memory_lane_interface::{PreviewHandle, PreviewStore};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Mints `blob:memory-lane/<uuid>` preview URLs and tracks which are live.
///
/// The counters let callers verify that every preview created is revoked
/// exactly once.
#[derive(Debug, Default)]
pub struct InMemoryPreviewStore {
    live: Mutex<HashSet<String>>,
    created: AtomicUsize,
    revoked: AtomicUsize,
}

impl InMemoryPreviewStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self) -> MutexGuard<'_, HashSet<String>> {
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Previews created and not yet revoked.
    pub fn live_count(&self) -> usize {
        self.live().len()
    }

    /// Previews created since the store was built.
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Previews revoked since the store was built.
    pub fn revoked_count(&self) -> usize {
        self.revoked.load(Ordering::SeqCst)
    }

    /// True if `url` is a live preview.
    pub fn is_live(&self, url: &str) -> bool {
        self.live().contains(url)
    }
}

impl PreviewStore for InMemoryPreviewStore {
    fn create(&self, file: &LocalFile) -> PreviewHandle {
        let url = format!("blob:memory-lane/{}", uuid::Uuid::new_v4());
        self.live().insert(url.clone());
        self.created.fetch_add(1, Ordering::SeqCst);
        debug!(name = %file.name(), preview = %url, "Created preview");
        PreviewHandle::new(url)
    }

    fn revoke(&self, handle: PreviewHandle) {
        if self.live().remove(handle.url()) {
            self.revoked.fetch_add(1, Ordering::SeqCst);
            debug!(preview = %handle, "Revoked preview");
        } else {
            warn!(preview = %handle, "Revoked a preview this store does not hold");
        }
    }
}
