//! File system operations with transaction support.
//!
//! Provides a staged manifest write that only reaches the disk on commit.

pub mod transaction;

pub use transaction::Transaction;
