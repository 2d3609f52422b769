//! Player Registry - Resolves typed player names to NBA player IDs
//!
//! Holds the league's player index in memory and answers exact full-name
//! lookups and case-insensitive partial-name searches.

pub mod registry;
pub mod types;

pub use registry::PlayerRegistry;
pub use types::{PlayerEntry, PlayerLookupError};
