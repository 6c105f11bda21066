//! Pokedex application shell library.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod store;
pub mod views;

pub use client::ShellClient;
pub use config::ShellConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{app_routes, RouteTable};
pub use store::{PokemonRef, SelectionStore};
