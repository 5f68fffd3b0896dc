//! Domain Policies
//!
//! Fixed rules the resolver applies. Pure functions, no catalog access.

mod conflict_policy;
mod fallback;

pub use conflict_policy::{conflict_loser, Contender, Loser};
pub use fallback::fallback_layout;
