//! Routed pages.

use crate::routing::routes::POKEMON_DETAILS_PAGE;
use crate::routing::Params;
use crate::views::layout::document;
use crate::views::{escape, RenderContext, View};

/// Landing page. Shows the current selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl View for HomePage {
    fn name(&self) -> &'static str {
        "HomePage"
    }

    fn render(&self, ctx: &RenderContext<'_>, _outlet: Option<&str>) -> String {
        let selection = match ctx.store.selected() {
            Some(pokemon) => {
                let mut params = Params::new();
                params.insert("name".to_string(), pokemon.name.clone());
                let href = ctx
                    .routes
                    .href(POKEMON_DETAILS_PAGE, &params)
                    .unwrap_or_else(|| "/".to_string());
                format!(
                    "<p>Selected: <a href=\"{}\">{}</a></p>",
                    escape(&href),
                    escape(&pokemon.name)
                )
            }
            None => "<p>No Pokemon selected.</p>".to_string(),
        };
        format!("<h1>Pokedex</h1>\n{selection}")
    }
}

/// Detail page for `/pokemon-details/:name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PokemonDetailsPage;

impl View for PokemonDetailsPage {
    fn name(&self) -> &'static str {
        "PokemonDetailsPage"
    }

    fn render(&self, ctx: &RenderContext<'_>, _outlet: Option<&str>) -> String {
        let name = ctx.route.param("name").unwrap_or_default();

        // Only trust the store when it refers to the Pokemon in the path.
        let details = match ctx.store.selected() {
            Some(pokemon) if pokemon.name == name => format!(
                "<p>Resource: <a href=\"{url}\">{url}</a></p>",
                url = escape(&pokemon.url)
            ),
            _ => "<p>No details selected for this Pokemon.</p>".to_string(),
        };
        format!("<h1>{}</h1>\n{details}", escape(name))
    }
}

/// Rendered when no other route matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNotFound;

impl View for ErrorNotFound {
    fn name(&self) -> &'static str {
        "ErrorNotFound"
    }

    fn render(&self, _ctx: &RenderContext<'_>, _outlet: Option<&str>) -> String {
        document(
            "Not Found",
            "<h1>404</h1>\n<p>Oops. Nothing here...</p>\n<a href=\"/\">Go Home</a>",
        )
    }
}
