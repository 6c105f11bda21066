//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → passed to the server and observability setup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Route declarations live in code, not in the config file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ShellConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
