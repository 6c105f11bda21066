//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign x-request-id)
//!     → /api/selection → api.rs (selection store JSON API)
//!     → anything else  → server.rs page handler
//!         → routing (resolve) → views (render)
//!     → Send to client
//! ```

pub mod api;
pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
