//! Hashing primitives and deposit-data hash-tree-root derivation

pub mod deposit_data;
pub mod sha256;
