//! Kirimi core library.
//!
//! Greedy agglomerative balanced edge contraction for the lifted multicut
//! objective: given a sparse base graph gating which vertices may merge
//! and a lifted graph carrying signed affinities, compute a vertex
//! partition that labels every lifted edge as joined or cut.

mod builder;
mod contraction;
mod error;
mod graph;
mod kirimi;
mod partition;
mod result;
mod value;

pub use crate::{
    builder::{ContractionStrategy, KirimiBuilder},
    contraction::{contract_balanced, contract_balanced_minmax},
    error::{ContractionError, ContractionErrorCode, GraphRole, Result},
    graph::{EdgeListGraph, Graph},
    kirimi::Kirimi,
    partition::Partition,
    result::{ClusterId, ContractionResult, EdgeLabel},
    value::AffinityValue,
};
