//! Name-keyed file graph and the deep test count reduction over it.

pub mod reduce;
pub mod store;

pub use reduce::{compute_deep_counts, CyclePolicy, DeepCounter, DeepCounts};
pub use store::{FileNode, NodeId, TestGraph};
