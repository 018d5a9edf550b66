//! Instruction handlers for the deposit registry

pub mod deposit;
pub mod get_deposit_count;
pub mod get_deposit_root;
pub mod initialize;

pub use deposit::*;
pub use get_deposit_count::*;
pub use get_deposit_root::*;
pub use initialize::*;
