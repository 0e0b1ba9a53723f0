//! Error types for the kirimi core library.
//!
//! Input validation happens once at call entry; the contraction loop is
//! total afterwards, so every variant here describes a malformed input
//! rather than a runtime failure.

use std::fmt;

use thiserror::Error;

/// Identifies which of the two input graphs an error refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphRole {
    /// The sparse graph gating which pairs may be contracted directly.
    Base,
    /// The graph carrying affinity values.
    Lifted,
}

impl fmt::Display for GraphRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Lifted => f.write_str("lifted"),
        }
    }
}

/// Errors returned while validating a contraction problem.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ContractionError {
    /// The base graph reported zero vertices.
    #[error("cannot contract a graph with zero vertices")]
    EmptyGraph,
    /// The two input graphs disagree on the vertex index space.
    #[error("base graph has {base} vertices but lifted graph has {lifted}")]
    VertexCountMismatch {
        /// Vertex count reported by the base graph.
        base: usize,
        /// Vertex count reported by the lifted graph.
        lifted: usize,
    },
    /// The affinity slice is not index-aligned with the lifted edges.
    #[error("{affinities} affinities were supplied for {lifted_edges} lifted edges")]
    AffinityCountMismatch {
        /// Number of affinity values supplied by the caller.
        affinities: usize,
        /// Number of edges reported by the lifted graph.
        lifted_edges: usize,
    },
    /// An edge referenced a vertex outside the shared index space.
    #[error("{graph} edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidEndpoint {
        /// Which input graph contains the offending edge.
        graph: GraphRole,
        /// Index of the offending edge.
        edge: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// The shared vertex count.
        vertex_count: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("{graph} edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Which input graph contains the offending edge.
        graph: GraphRole,
        /// Index of the offending edge.
        edge: usize,
        /// The repeated vertex index.
        vertex: usize,
    },
    /// A lifted edge carried a NaN or infinite affinity.
    #[error("affinity for lifted edge {edge} is not finite")]
    NonFiniteAffinity {
        /// Index of the lifted edge with the invalid value.
        edge: usize,
    },
}

impl ContractionError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ContractionErrorCode {
        match self {
            Self::EmptyGraph => ContractionErrorCode::EmptyGraph,
            Self::VertexCountMismatch { .. } => ContractionErrorCode::VertexCountMismatch,
            Self::AffinityCountMismatch { .. } => ContractionErrorCode::AffinityCountMismatch,
            Self::InvalidEndpoint { .. } => ContractionErrorCode::InvalidEndpoint,
            Self::SelfLoop { .. } => ContractionErrorCode::SelfLoop,
            Self::NonFiniteAffinity { .. } => ContractionErrorCode::NonFiniteAffinity,
        }
    }
}

/// Machine-readable error codes for [`ContractionError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContractionErrorCode {
    /// The base graph reported zero vertices.
    EmptyGraph,
    /// The two input graphs disagree on the vertex index space.
    VertexCountMismatch,
    /// The affinity slice is not index-aligned with the lifted edges.
    AffinityCountMismatch,
    /// An edge referenced a vertex outside the shared index space.
    InvalidEndpoint,
    /// An edge joined a vertex to itself.
    SelfLoop,
    /// A lifted edge carried a NaN or infinite affinity.
    NonFiniteAffinity,
}

impl ContractionErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::VertexCountMismatch => "VERTEX_COUNT_MISMATCH",
            Self::AffinityCountMismatch => "AFFINITY_COUNT_MISMATCH",
            Self::InvalidEndpoint => "INVALID_ENDPOINT",
            Self::SelfLoop => "SELF_LOOP",
            Self::NonFiniteAffinity => "NON_FINITE_AFFINITY",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ContractionError>;
