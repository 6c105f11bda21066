//! Route table construction errors.

use thiserror::Error;

/// Reasons a set of route entries cannot be compiled into a table.
///
/// Resolution itself never fails; every problem is caught here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path '{path}' declared twice at the same level")]
    DuplicatePath { path: String },

    #[error("parameter name missing in route path '{path}'")]
    EmptyParamName { path: String },

    #[error("parameter '{param}' appears more than once in route path '{path}'")]
    DuplicateParam { path: String, param: String },

    #[error("catch-all must be the final segment of route path '{path}'")]
    CatchAllNotFinal { path: String },

    #[error("catch-all route '{path}' shadows the routes declared after it")]
    CatchAllNotLast { path: String },

    #[error("route table has no trailing catch-all route")]
    MissingFallback,

    #[error("unsupported token '{token}' in route path '{path}'")]
    UnsupportedSyntax { path: String, token: String },
}
