//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! Shutdown::subscribe → HttpServer::run
//!     → Ctrl+C (main) or Shutdown::trigger (tests)
//!     → axum drains in-flight requests, run returns
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
