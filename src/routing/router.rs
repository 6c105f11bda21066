//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the declared route tree
//! - Compile it into an ordered candidate list
//! - Look up the matching route chain for a path
//! - Reverse named routes into concrete paths
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - O(n) linear scan in declaration order, first match wins
//! - Children are tried before their parent, so `/` with a `""` child
//!   resolves to the child rendered inside the parent
//! - Construction rejects tables without a trailing catch-all, so
//!   resolution is total

use std::collections::HashSet;

use serde::Serialize;

use crate::routing::error::RouteTableError;
use crate::routing::matcher::{split_path, Params, PathPattern};
use crate::views::ComponentRef;

/// A declarative rule mapping a path pattern to a view.
#[derive(Debug)]
pub struct RouteEntry {
    /// Path pattern, relative to the parent entry for children.
    pub path: String,
    pub name: Option<String>,
    pub component: ComponentRef,
    /// Child entries rendered inside this entry's outlet.
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, component: ComponentRef) -> Self {
        Self {
            path: path.into(),
            name: None,
            component,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug)]
struct Candidate {
    pattern: PathPattern,
    /// Index of each entry from the top level down to the leaf.
    trail: Vec<usize>,
}

/// The result of resolving a path.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    chain: Vec<&'a RouteEntry>,
    pattern: &'a PathPattern,
    params: Params,
    fallback: bool,
}

impl<'a> RouteMatch<'a> {
    /// Matched entries, outermost first.
    pub fn chain(&self) -> &[&'a RouteEntry] {
        &self.chain
    }

    /// The innermost matched entry.
    pub fn leaf(&self) -> &'a RouteEntry {
        // A trail is never empty, so neither is the chain.
        self.chain[self.chain.len() - 1]
    }

    /// Name of the leaf entry, if it has one.
    pub fn name(&self) -> Option<&'a str> {
        self.leaf().name.as_deref()
    }

    /// Full pattern of the matched route.
    pub fn pattern(&self) -> &'a str {
        self.pattern.as_str()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// True if the trailing catch-all matched.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Owned, serializable description of the match.
    ///
    /// Loads lazy views in the chain to report their names.
    pub fn summary(&self, path: &str) -> RouteSummary {
        RouteSummary {
            path: path.to_string(),
            pattern: self.pattern().to_string(),
            name: self.name().map(str::to_string),
            params: self.params.clone(),
            views: self
                .chain
                .iter()
                .map(|entry| entry.component.get().name())
                .collect(),
            not_found: self.fallback,
        }
    }
}

/// What a path resolved to, as printed by `shell-cli resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub pattern: String,
    pub name: Option<String>,
    pub params: Params,
    /// View names, outermost first.
    pub views: Vec<&'static str>,
    pub not_found: bool,
}

/// Ordered route table with first-match resolution.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    candidates: Vec<Candidate>,
}

impl RouteTable {
    /// Compile a route tree.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut candidates = Vec::new();
        compile(&entries, None, &mut Vec::new(), &mut candidates)?;

        // A match-everything route anywhere but last, nested ones included,
        // makes every later candidate unreachable.
        let before_last = candidates.len().saturating_sub(1);
        if let Some(shadowing) = candidates[..before_last]
            .iter()
            .find(|c| c.pattern.is_total())
        {
            return Err(RouteTableError::CatchAllNotLast {
                path: shadowing.pattern.as_str().to_string(),
            });
        }

        let fallback_is_last = candidates
            .last()
            .map(|c| c.pattern.is_total() && c.trail == [entries.len() - 1])
            .unwrap_or(false);
        if !fallback_is_last {
            return Err(RouteTableError::MissingFallback);
        }

        tracing::debug!(
            entries = entries.len(),
            candidates = candidates.len(),
            "Route table compiled"
        );

        Ok(Self {
            entries,
            candidates,
        })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve a request path to exactly one route.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        let segments = split_path(path);
        let fallback = self.candidates.len() - 1;

        let (index, params) = self
            .candidates
            .iter()
            .enumerate()
            .find_map(|(i, c)| c.pattern.matches(&segments).map(|p| (i, p)))
            .unwrap_or_else(|| (fallback, Params::new()));

        let candidate = &self.candidates[index];
        let route = RouteMatch {
            chain: self.chain(&candidate.trail),
            pattern: &candidate.pattern,
            params,
            fallback: index == fallback,
        };

        tracing::trace!(
            path = %path,
            pattern = %route.pattern(),
            fallback = route.fallback,
            "Route resolved"
        );
        route
    }

    /// Find the first route whose leaf carries `name`.
    pub fn by_name(&self, name: &str) -> Option<&PathPattern> {
        self.candidates
            .iter()
            .find(|c| self.leaf(&c.trail).name.as_deref() == Some(name))
            .map(|c| &c.pattern)
    }

    /// Build the path of a named route.
    pub fn href(&self, name: &str, params: &Params) -> Option<String> {
        self.by_name(name)?.build(params)
    }

    fn chain(&self, trail: &[usize]) -> Vec<&RouteEntry> {
        let mut chain = Vec::with_capacity(trail.len());
        let mut level = &self.entries;
        for &i in trail {
            let entry = &level[i];
            chain.push(entry);
            level = &entry.children;
        }
        chain
    }

    fn leaf(&self, trail: &[usize]) -> &RouteEntry {
        self.chain(trail)[trail.len() - 1]
    }
}

fn compile(
    entries: &[RouteEntry],
    parent: Option<&PathPattern>,
    trail: &mut Vec<usize>,
    out: &mut Vec<Candidate>,
) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();

    for (i, entry) in entries.iter().enumerate() {
        let own = PathPattern::parse(&entry.path)?;
        let pattern = match parent {
            Some(parent) => parent.join(&own)?,
            None => own,
        };

        // `/a` and `/a/`, or `:id` and `:name`, match exactly the same paths.
        if !seen.insert(pattern.shape()) {
            return Err(RouteTableError::DuplicatePath {
                path: entry.path.clone(),
            });
        }

        trail.push(i);
        compile(&entry.children, Some(&pattern), trail, out)?;
        out.push(Candidate {
            pattern,
            trail: trail.clone(),
        });
        trail.pop();
    }

    Ok(())
}
