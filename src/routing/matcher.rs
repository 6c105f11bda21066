//! Path pattern matching logic.
//!
//! # Responsibilities
//! - Tokenize route paths into literal, parameter and catch-all segments
//! - Join child patterns onto their parent pattern
//! - Match request path segments and capture parameters
//! - Build concrete paths back from a pattern and parameters
//!
//! # Design Decisions
//! - Literal segments are case-sensitive
//! - Empty segments are ignored (`/a//b/` == `/a/b`)
//! - A catch-all must be the final segment of the joined pattern
//! - No regex: patterns are a flat list of segments, matched in O(n)

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::routing::error::RouteTableError;

/// Characters escaped when a parameter value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// vue-router's spelling of a repeatable "match anything" parameter.
const REPEAT_ANY_SUFFIX: &str = "(.*)*";

/// Captured path parameters, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

/// One token of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// `:name` — captures exactly one segment.
    Param(String),
    /// `*name` or `:name(.*)*` — captures all remaining segments, possibly none.
    CatchAll(String),
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    absolute: bool,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a route path such as `/pokemon-details/:name`.
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        let mut segments = Vec::new();

        for token in raw.split('/').filter(|t| !t.is_empty()) {
            let segment = if let Some(name) = token.strip_prefix(':') {
                match name.strip_suffix(REPEAT_ANY_SUFFIX) {
                    Some(name) => Segment::CatchAll(param_name(raw, name)?),
                    None if name.contains('(') => {
                        return Err(RouteTableError::UnsupportedSyntax {
                            path: raw.to_string(),
                            token: token.to_string(),
                        })
                    }
                    None => Segment::Param(param_name(raw, name)?),
                }
            } else if let Some(name) = token.strip_prefix('*') {
                Segment::CatchAll(param_name(raw, name)?)
            } else {
                Segment::Literal(token.to_string())
            };
            segments.push(segment);
        }

        let pattern = Self {
            raw: raw.to_string(),
            absolute: raw.starts_with('/'),
            segments,
        };
        pattern.check()?;
        Ok(pattern)
    }

    /// Resolve `child` relative to `self`.
    ///
    /// An absolute child path replaces the parent path entirely.
    pub fn join(&self, child: &PathPattern) -> Result<Self, RouteTableError> {
        if child.absolute {
            return Ok(child.clone());
        }
        if child.segments.is_empty() {
            return Ok(self.clone());
        }

        let raw = format!("{}/{}", self.raw.trim_end_matches('/'), child.raw);
        let mut segments = self.segments.clone();
        segments.extend(child.segments.iter().cloned());

        let joined = Self {
            raw,
            absolute: self.absolute,
            segments,
        };
        joined.check()?;
        Ok(joined)
    }

    fn check(&self) -> Result<(), RouteTableError> {
        let last = self.segments.len().saturating_sub(1);
        let mut names = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(_) => continue,
                Segment::CatchAll(_) if i != last => {
                    return Err(RouteTableError::CatchAllNotFinal {
                        path: self.raw.clone(),
                    })
                }
                Segment::Param(name) | Segment::CatchAll(name) => {
                    if names.contains(&name) {
                        return Err(RouteTableError::DuplicateParam {
                            path: self.raw.clone(),
                            param: name.clone(),
                        });
                    }
                    names.push(name);
                }
            }
        }
        Ok(())
    }

    /// The path this pattern was declared with (joined with its parents).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Key shared by every pattern that matches exactly the same paths.
    ///
    /// Parameter names are erased and slashes normalized, so `/x/:id/` and
    /// `/x/:name` have the same shape.
    pub fn shape(&self) -> String {
        let parts: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.as_str(),
                Segment::Param(_) => ":",
                Segment::CatchAll(_) => "*",
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// True if the pattern matches every possible path.
    pub fn is_total(&self) -> bool {
        matches!(self.segments.first(), Some(Segment::CatchAll(_)))
    }

    /// Match split path segments, returning the captured parameters.
    ///
    /// Parameter values are percent-decoded.
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        let mut params = Params::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(literal) => {
                    if path.get(i).copied() != Some(literal.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(i)?;
                    params.insert(name.clone(), decode(value));
                }
                Segment::CatchAll(name) => {
                    let rest: Vec<String> = path[i.min(path.len())..]
                        .iter()
                        .map(|s| decode(s))
                        .collect();
                    params.insert(name.clone(), rest.join("/"));
                    return Some(params);
                }
            }
        }

        (path.len() == self.segments.len()).then_some(params)
    }

    /// Build a concrete path from this pattern.
    ///
    /// Returns `None` if a parameter (other than a catch-all) is missing.
    pub fn build(&self, params: &Params) -> Option<String> {
        let mut parts: Vec<String> = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(literal.clone()),
                Segment::Param(name) => {
                    let value = params.get(name).filter(|v| !v.is_empty())?;
                    parts.push(utf8_percent_encode(value, SEGMENT).to_string());
                }
                Segment::CatchAll(name) => {
                    if let Some(value) = params.get(name) {
                        parts.extend(
                            value
                                .split('/')
                                .filter(|s| !s.is_empty())
                                .map(|s| utf8_percent_encode(s, SEGMENT).to_string()),
                        );
                    }
                }
            }
        }

        Some(format!("/{}", parts.join("/")))
    }
}

/// Split a request path into its non-empty segments.
///
/// Any query string or fragment is dropped first.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn param_name(path: &str, name: &str) -> Result<String, RouteTableError> {
    if name.is_empty() {
        return Err(RouteTableError::EmptyParamName {
            path: path.to_string(),
        });
    }
    Ok(name.to_string())
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
