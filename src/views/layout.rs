//! Page shell shared by every routed page.

use crate::views::{escape, RenderContext, View};

const TITLE: &str = "Pokedex";

#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout;

impl View for MainLayout {
    fn name(&self) -> &'static str {
        "MainLayout"
    }

    fn render(&self, _ctx: &RenderContext<'_>, outlet: Option<&str>) -> String {
        document(
            TITLE,
            &format!(
                "<header><a href=\"/\">{}</a></header>\n<main>{}</main>",
                escape(TITLE),
                outlet.unwrap_or_default()
            ),
        )
    }
}

/// Wrap a body fragment in a complete HTML document.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}
