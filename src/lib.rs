#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

//! Approximate deduplication of paired-end sequencing read pairs.
//!
//! Read pairs produced by amplification or re-sequencing of the same
//! fragment differ only by small positional shifts, sequencing errors, or
//! mate-order swaps. This crate groups such near-duplicates and picks one
//! canonical exemplar per group:
//!
//! 1. each read is fingerprinted by strand-canonical minimizer hashes, one
//!    per window ([`minimizer`]);
//! 2. reads sharing a minimizer pair land in a common candidate bucket
//!    ([`bucket`]), bounding the comparison space far below all-pairs;
//! 3. candidates are tested for equivalence under a bounded-offset Hamming
//!    rule ([`equivalence`]) and positive tests become edges of a graph
//!    ([`graph`]);
//! 4. connected components are clustered and the most central member of
//!    each, by eccentricity with deterministic tie-breaks, becomes the
//!    exemplar ([`cluster`]).
//!
//! The engine performs no I/O and holds no state across calls; parsing and
//! writing of read tables belong to the caller.

pub mod bucket;
pub mod cluster;
pub mod dedup;
pub mod equivalence;
pub mod error;
pub mod graph;
pub mod minimizer;
pub mod params;
pub mod read_pair;

pub use dedup::{
    deduplicate_read_pairs, deduplicate_read_pairs_streaming, DedupResult, DedupSummary,
    Deduplicator,
};
pub use error::Error;
pub use minimizer::EMPTY_WINDOW_SENTINEL;
pub use params::{DedupParams, MinimizerParams, Orientation};
pub use read_pair::ReadPair;

/// Crate-wide result alias for configuration validation
pub type Result<T> = std::result::Result<T, Error>;
