/// The capped set itself and its error type
pub mod capped_set;

/// Fixed width identifiers for entries
pub mod address;

/// Capacity and logging settings
pub mod config;

/// Logger setup
pub mod logging;

/// Lock guarded handle for sharing one set between tasks
pub mod shared;

#[cfg(test)]
mod tests;

pub use address::Address;
pub use capped_set::{CappedSet, CappedSetError};
pub use config::CappedSetConfig;
pub use shared::SharedCappedSet;

/// A capped set keyed by address with unsigned scores, the shape the set is deployed with
pub type AddressSet = CappedSet<Address, u64>;
