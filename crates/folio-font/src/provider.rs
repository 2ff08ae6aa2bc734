//! Load-once metrics cache
//!
//! Metrics are loaded the first time an identity is asked for and shared
//! from then on. Each identity owns a `OnceLock` slot, so concurrent first
//! requests for the same font run a single load and the others wait on it.
//! A failed load is cached too and is not retried.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::builtin;
use crate::identity::FontIdentity;
use crate::loader::{FontLoader, TtfLoader};
use crate::metrics::Metrics;
use crate::Result;

type Slot = Arc<OnceLock<Result<Arc<Metrics>>>>;

/// Memoized metrics source keyed by [`FontIdentity`]
pub struct MetricsProvider {
    loader: Box<dyn FontLoader>,
    slots: Mutex<HashMap<FontIdentity, Slot>>,
    loads: AtomicUsize,
}

impl MetricsProvider {
    /// Create a provider that loads external fonts with [`TtfLoader`]
    pub fn new() -> Self {
        Self::with_loader(TtfLoader::new())
    }

    pub fn with_loader(loader: impl FontLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            slots: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Process-wide provider shared by documents that don't bring their own
    pub fn global() -> Arc<MetricsProvider> {
        static GLOBAL: OnceLock<Arc<MetricsProvider>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(MetricsProvider::new())))
    }

    pub fn loader(&self) -> &dyn FontLoader {
        self.loader.as_ref()
    }

    /// Metrics for `identity`, loading them on first use
    pub fn metrics(&self, identity: &FontIdentity) -> Result<Arc<Metrics>> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(identity.clone()).or_default())
        };

        slot.get_or_init(|| self.load(identity)).clone()
    }

    /// Whether a load for `identity` has completed (successfully or not)
    pub fn is_loaded(&self, identity: &FontIdentity) -> bool {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(identity).is_some_and(|slot| slot.get().is_some())
    }

    /// Number of loads performed so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Acquire)
    }

    fn load(&self, identity: &FontIdentity) -> Result<Arc<Metrics>> {
        self.loads.fetch_add(1, Ordering::AcqRel);

        match identity {
            FontIdentity::Builtin(face) => {
                tracing::debug!("Loading built-in metrics for {}", face);
                Ok(Arc::new(builtin::metrics(*face)))
            }
            FontIdentity::External(path) => {
                tracing::info!("Loading font file {}", path.display());
                self.loader.load(path).map(Arc::new).map_err(|e| {
                    tracing::warn!("Font load failed: {}", e);
                    e
                })
            }
        }
    }
}

impl Default for MetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MetricsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsProvider")
            .field("load_count", &self.load_count())
            .finish_non_exhaustive()
    }
}
