//! Core traits and types for the shop agent
//!
//! This crate provides the foundational pieces used across all other crates:
//! - Capability traits for pluggable backends (embedding, similarity search,
//!   pairwise reranking, text completion, SQL execution)
//! - The product record shape and defensive row coercion
//! - The lookup response contract returned to the agent layer
//! - Error types

pub mod error;
pub mod lookup;
pub mod product;
pub mod traits;

pub use error::{Error, Result};
pub use lookup::{messages, LookupResponse};
pub use product::{parse_storage_gb, ProductRecord};

pub use traits::{
    Candidate, Completion, Embedder, PairScorer, SimilaritySearch, SqlExecutor,
};
