//! The application's route table.

use std::sync::Arc;

use crate::routing::error::RouteTableError;
use crate::routing::router::{RouteEntry, RouteTable};
use crate::views::layout::MainLayout;
use crate::views::pages::{ErrorNotFound, HomePage, PokemonDetailsPage};
use crate::views::{ComponentRef, View};

pub const HOME_PAGE: &str = "HomePage";
pub const POKEMON_DETAILS_PAGE: &str = "PokemonDetailsPage";

/// Build the route table served by the shell.
///
/// The not-found page is only constructed the first time an unknown path
/// is rendered.
pub fn app_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(vec![
        RouteEntry::new("/", ComponentRef::eager(MainLayout))
            .named(HOME_PAGE)
            .with_children(vec![
                RouteEntry::new("", ComponentRef::eager(HomePage)).named(HOME_PAGE)
            ]),
        RouteEntry::new("/pokemon-details/:name", ComponentRef::eager(MainLayout))
            .named(POKEMON_DETAILS_PAGE)
            .with_children(vec![RouteEntry::new(
                "",
                ComponentRef::eager(PokemonDetailsPage),
            )
            .named(POKEMON_DETAILS_PAGE)]),
        RouteEntry::new("/:catchAll(.*)*", ComponentRef::lazy(load_not_found)),
    ])
}

fn load_not_found() -> Arc<dyn View> {
    Arc::new(ErrorNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Params;

    #[test]
    fn test_home_route() {
        let table = app_routes().unwrap();
        let route = table.resolve("/");

        assert_eq!(route.name(), Some(HOME_PAGE));
        assert!(!route.is_fallback());
        let views: Vec<_> = route.chain().iter().map(|e| e.component.get().name()).collect();
        assert_eq!(views, vec!["MainLayout", "HomePage"]);
    }

    #[test]
    fn test_details_route_captures_name() {
        let table = app_routes().unwrap();
        let route = table.resolve("/pokemon-details/pikachu");

        assert_eq!(route.name(), Some(POKEMON_DETAILS_PAGE));
        assert_eq!(route.param("name"), Some("pikachu"));
        assert_eq!(route.leaf().component.get().name(), "PokemonDetailsPage");
    }

    #[test]
    fn test_details_route_not_shadowed_by_catch_all() {
        let table = app_routes().unwrap();
        for name in ["pikachu", "bulbasaur", "nidoran-f"] {
            let route = table.resolve(&format!("/pokemon-details/{name}"));
            assert!(!route.is_fallback(), "{name} fell through to the catch-all");
        }
    }

    #[test]
    fn test_unknown_paths_hit_catch_all() {
        let table = app_routes().unwrap();

        let route = table.resolve("/nonexistent/xyz");
        assert!(route.is_fallback());
        assert_eq!(route.chain().len(), 1);
        assert_eq!(route.param("catchAll"), Some("nonexistent/xyz"));

        assert!(table.resolve("/pokemon-details").is_fallback());
        assert!(table.resolve("/pokemon-details/a/b").is_fallback());
    }

    #[test]
    fn test_not_found_view_is_loaded_on_demand() {
        let table = app_routes().unwrap();
        let fallback = &table.entries()[2].component;
        assert!(!fallback.is_loaded());

        table.resolve("/pokemon-details/eevee");
        assert!(!fallback.is_loaded());

        let route = table.resolve("/missing");
        assert_eq!(route.leaf().component.get().name(), "ErrorNotFound");
        assert!(fallback.is_loaded());
    }

    #[test]
    fn test_details_href() {
        let table = app_routes().unwrap();
        let mut params = Params::new();
        params.insert("name".into(), "charmander".into());
        assert_eq!(
            table.href(POKEMON_DETAILS_PAGE, &params).as_deref(),
            Some("/pokemon-details/charmander")
        );
        assert_eq!(table.href(HOME_PAGE, &Params::new()).as_deref(), Some("/"));
    }

    #[test]
    fn test_resolve_summary_for_cli() {
        let table = app_routes().unwrap();

        let details = table
            .resolve("/pokemon-details/pikachu")
            .summary("/pokemon-details/pikachu");
        assert_eq!(details.pattern, "/pokemon-details/:name");
        assert_eq!(details.name.as_deref(), Some(POKEMON_DETAILS_PAGE));
        assert_eq!(details.views, vec!["MainLayout", "PokemonDetailsPage"]);
        assert_eq!(details.params["name"], "pikachu");
        assert!(!details.not_found);

        let missing = table.resolve("/nonexistent/xyz").summary("/nonexistent/xyz");
        assert_eq!(missing.views, vec!["ErrorNotFound"]);
        assert_eq!(missing.params["catchAll"], "nonexistent/xyz");
        assert!(missing.not_found);
    }
}
