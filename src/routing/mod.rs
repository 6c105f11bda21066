//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteEntry tree (routes.rs)
//!     → matcher.rs (tokenize and join path patterns)
//!     → router.rs (flatten depth-first, children before parent)
//!     → Freeze as immutable RouteTable
//!
//! Incoming path:
//!     → router.rs (linear scan in declaration order)
//!     → matcher.rs (segment match, capture params)
//!     → Return: RouteMatch (layout chain + params), never a miss
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment-wise matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod error;
pub mod matcher;
pub mod router;
pub mod routes;

pub use error::RouteTableError;
pub use matcher::{Params, PathPattern, Segment};
pub use router::{RouteEntry, RouteMatch, RouteSummary, RouteTable};
pub use routes::app_routes;
