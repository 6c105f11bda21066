//! Single-slot selection store.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use serde::{Deserialize, Serialize};

/// Lightweight pointer to a Pokemon resource held elsewhere.
///
/// Neither field is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

impl PokemonRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Holds the currently selected Pokemon, if any.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    slot: Arc<ArcSwapOption<PokemonRef>>,
}

impl SelectionStore {
    /// Create a store with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection.
    pub fn set_selected(&self, pokemon: PokemonRef) {
        tracing::debug!(name = %pokemon.name, url = %pokemon.url, "Selection updated");
        self.slot.store(Some(Arc::new(pokemon)));
        crate::observability::metrics::record_selection_update();
    }

    /// Snapshot of the current selection.
    ///
    /// The returned value is not affected by later calls to `set_selected`.
    pub fn selected(&self) -> Option<Arc<PokemonRef>> {
        self.slot.load_full()
    }
}
