//! Pure data structures persisted in the ledger.

pub mod contract_state;
pub mod field;
pub mod offer;

pub use contract_state::*;
pub use field::*;
pub use offer::*;
