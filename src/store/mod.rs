//! Application state shared between views.
//!
//! # Data Flow
//! ```text
//! PUT /api/selection (or any caller)
//!     → SelectionStore::set_selected (atomic wholesale swap)
//!     → later renders read SelectionStore::selected (snapshot)
//! ```
//!
//! # Design Decisions
//! - One store handle is created at startup and injected wherever it is
//!   needed; there is no global instance
//! - The slot starts empty and has no clear operation

pub mod selection;

pub use selection::{PokemonRef, SelectionStore};
