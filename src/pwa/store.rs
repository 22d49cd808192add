use std::sync::{Arc, RwLock};

use super::PwaSettings;

/// Process-wide PWA settings store.
///
/// Reconfiguration replaces the whole snapshot in one assignment, so a
/// request that has already read its snapshot keeps it, and a request that
/// reads afterwards sees the new value in full. There is never a
/// partially-applied state visible to a reader.
///
/// Cloning the store clones the handle, not the state; all clones share one
/// snapshot.
#[derive(Clone, Default)]
pub struct PwaStore {
    inner: Arc<RwLock<Arc<PwaSettings>>>,
}

impl PwaStore {
    pub fn new(settings: PwaSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(settings))),
        }
    }

    /// Replace the active settings wholesale.
    ///
    /// Fields the caller left at their defaults reset rather than retaining
    /// previous values, which keeps repeated reloads from accumulating stale
    /// flags. Always succeeds.
    pub fn configure(&self, settings: PwaSettings) {
        tracing::info!(
            enabled = settings.enabled,
            noop = settings.noop,
            escape_hatch = settings.escape_hatch,
            scope = ?settings.scope,
            "PWA reconfigured"
        );

        let snapshot = Arc::new(settings);
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = snapshot;
    }

    /// The active snapshot. Callers must not rely on it staying current past
    /// the request that read it.
    pub fn current(&self) -> Arc<PwaSettings> {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clone()
    }
}
