use std::io;

/// Everything the library can reject.
///
/// A cyclic graph handed to [`crate::topo::topological_sort`] is *not* an
/// error; that operation reports it as `None`.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The header announced zero vertices while empty graphs were rejected.
    #[error("invalid graph size: graph is empty")]
    EmptyGraph,

    /// Wrong token count or type in the text format.
    #[error("malformed input at line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// An edge endpoint outside the graph. `vertex` is reported in the
    /// indexing of the value that rejected it.
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// A traversal source outside `0..vertex_count`.
    #[error("source vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    SourceOutOfRange { vertex: usize, vertex_count: usize },

    /// A distance matrix whose row `row` has `len` entries instead of `rows`.
    #[error("matrix is not square: row {row} has {len} entries, expected {rows}")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GraphError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyGraph => "E1001",
            Self::Malformed { .. } => "E1002",
            Self::VertexOutOfRange { .. } => "E2001",
            Self::SourceOutOfRange { .. } => "E2002",
            Self::NonSquareMatrix { .. } => "E2003",
            Self::Io(_) => "E5001",
        }
    }

    /// Optional remediation hint surfaced by front ends.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EmptyGraph => {
                Some("Provide at least one vertex, or disable `reject_empty` in the config.")
            }
            Self::Malformed { .. } => {
                Some("Expected a `n m` header followed by `m` lines of `source dest`.")
            }
            Self::VertexOutOfRange { .. } => Some("Edge endpoints must be numbered 1..=n."),
            Self::SourceOutOfRange { .. } => Some("Pick a source vertex between 1 and n."),
            Self::NonSquareMatrix { .. } => None,
            Self::Io(_) => Some("Check that the input file exists and is readable."),
        }
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphError;
    use std::collections::HashSet;

    fn all() -> Vec<GraphError> {
        vec![
            GraphError::EmptyGraph,
            GraphError::malformed(1, "x"),
            GraphError::VertexOutOfRange {
                vertex: 9,
                vertex_count: 3,
            },
            GraphError::SourceOutOfRange {
                vertex: 9,
                vertex_count: 3,
            },
            GraphError::NonSquareMatrix {
                rows: 2,
                row: 1,
                len: 3,
            },
            GraphError::Io(std::io::Error::other("boom")),
        ]
    }

    #[test]
    fn all_codes_are_unique() {
        let mut seen = HashSet::new();
        for err in all() {
            assert!(seen.insert(err.code()), "duplicate code {}", err.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        for err in all() {
            let code = err.code();
            assert_eq!(code.len(), 5);
            assert!(code.starts_with('E'));
            assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn empty_graph_message_names_the_size_problem() {
        assert_eq!(
            GraphError::EmptyGraph.to_string(),
            "invalid graph size: graph is empty"
        );
    }
}
