//! Generated-code domain model.

use serde::Serialize;

/// Source text produced by the code generator for one query.
///
/// The code is treated as literal text: nothing validates that it is
/// syntactically correct or safe to execute (see DESIGN.md on the
/// unsandboxed editor hand-off).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    /// The query the code was generated for.
    pub query: String,
    /// The generated source, verbatim.
    pub code: String,
}

impl GeneratedCode {
    /// Pairs a query with its generated source.
    #[must_use]
    pub fn new(query: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            code: code.into(),
        }
    }
}
