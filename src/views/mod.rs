//! Page views and rendering.
//!
//! # Data Flow
//! ```text
//! RouteMatch chain [MainLayout, PokemonDetailsPage]
//!     → leaf renders with no outlet
//!     → each parent renders with the child's markup as its outlet
//!     → HTML document
//! ```
//!
//! # Design Decisions
//! - Views are referenced by identity from the route table
//! - A view may be constructed lazily, once, on first render
//! - All interpolated text goes through `escape`

pub mod layout;
pub mod pages;

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::routing::{RouteMatch, RouteTable};
use crate::store::SelectionStore;

/// Everything a view may read while rendering.
pub struct RenderContext<'a> {
    pub route: &'a RouteMatch<'a>,
    pub routes: &'a RouteTable,
    pub store: &'a SelectionStore,
}

/// A renderable page or layout.
pub trait View: Send + Sync + fmt::Debug {
    /// Stable identifier used in logs and tests.
    fn name(&self) -> &'static str;

    /// Render to HTML. `outlet` holds the rendered child, if any.
    fn render(&self, ctx: &RenderContext<'_>, outlet: Option<&str>) -> String;
}

/// Reference from a route entry to its view.
#[derive(Debug)]
pub enum ComponentRef {
    Eager(Arc<dyn View>),
    Lazy(LazyView),
}

impl ComponentRef {
    pub fn eager(view: impl View + 'static) -> Self {
        Self::Eager(Arc::new(view))
    }

    pub fn lazy(loader: fn() -> Arc<dyn View>) -> Self {
        Self::Lazy(LazyView {
            loader,
            cell: OnceLock::new(),
        })
    }

    /// The view, constructing it first if it is lazy and not yet loaded.
    pub fn get(&self) -> Arc<dyn View> {
        match self {
            Self::Eager(view) => view.clone(),
            Self::Lazy(lazy) => lazy.get(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            Self::Eager(_) => true,
            Self::Lazy(lazy) => lazy.cell.get().is_some(),
        }
    }
}

/// A view constructed on first use.
pub struct LazyView {
    loader: fn() -> Arc<dyn View>,
    cell: OnceLock<Arc<dyn View>>,
}

impl LazyView {
    fn get(&self) -> Arc<dyn View> {
        self.cell
            .get_or_init(|| {
                let view = (self.loader)();
                tracing::debug!(view = view.name(), "Lazy view loaded");
                view
            })
            .clone()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.cell.get().map(|v| v.name()))
            .finish()
    }
}

/// Render a resolved route, innermost view first.
pub fn render(ctx: &RenderContext<'_>) -> String {
    ctx.route
        .chain()
        .iter()
        .rev()
        .fold(None, |outlet: Option<String>, entry| {
            Some(entry.component.get().render(ctx, outlet.as_deref()))
        })
        .unwrap_or_default()
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::app_routes;
    use crate::store::PokemonRef;

    fn render_path(routes: &RouteTable, store: &SelectionStore, path: &str) -> String {
        let route = routes.resolve(path);
        render(&RenderContext {
            route: &route,
            routes,
            store,
        })
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_renders_inside_layout() {
        let routes = app_routes().unwrap();
        let html = render_path(&routes, &SelectionStore::new(), "/");

        assert!(html.starts_with("<!DOCTYPE html>"));
        let main = html.find("<main>").unwrap();
        let heading = html.find("<h1>Pokedex</h1>").unwrap();
        assert!(main < heading);
    }

    #[test]
    fn test_details_page_shows_selected_url() {
        let routes = app_routes().unwrap();
        let store = SelectionStore::new();
        store.set_selected(PokemonRef::new(
            "bulbasaur",
            "https://pokeapi.co/api/v2/pokemon/1/",
        ));

        let html = render_path(&routes, &store, "/pokemon-details/bulbasaur");
        assert!(html.contains("<h1>bulbasaur</h1>"));
        assert!(html.contains("https://pokeapi.co/api/v2/pokemon/1/"));

        let other = render_path(&routes, &store, "/pokemon-details/ivysaur");
        assert!(other.contains("<h1>ivysaur</h1>"));
        assert!(!other.contains("https://pokeapi.co/api/v2/pokemon/1/"));
    }

    #[test]
    fn test_details_param_is_escaped() {
        let routes = app_routes().unwrap();
        let html = render_path(&routes, &SelectionStore::new(), "/pokemon-details/%3Cb%3E");
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_not_found_renders_without_layout() {
        let routes = app_routes().unwrap();
        let html = render_path(&routes, &SelectionStore::new(), "/nope");
        assert!(html.contains("Oops. Nothing here..."));
        assert!(!html.contains("<header>"));
    }
}
