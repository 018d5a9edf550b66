//! State account definitions for the deposit registry

pub mod deposit_tree;

pub use deposit_tree::DepositTree;
