//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (navigation and selection counters)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings
//! - Request ID (x-request-id) attached to every HTTP span
//! - Metrics recording is a no-op until an exporter is installed

pub mod logging;
pub mod metrics;
