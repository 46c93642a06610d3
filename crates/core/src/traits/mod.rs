//! Capability traits for pluggable backends
//!
//! The retrieval pipeline consumes embedding, similarity search, pairwise
//! scoring, text completion, and SQL execution as abstract capabilities.
//! Concrete transports live in the clients crate; tests substitute in-process
//! fakes.

pub mod completion;
pub mod embedder;
pub mod scorer;
pub mod search;
pub mod sql;

pub use completion::Completion;
pub use embedder::Embedder;
pub use scorer::PairScorer;
pub use search::{Candidate, SimilaritySearch};
pub use sql::SqlExecutor;
