//! # Snapshot Testing Support
//!
//! - **`outline`**: renders a parsed comment as a stable, line-per-node text
//!   outline for `insta` snapshots
//! - **`invariants`**: runtime checks for parser correctness (spans in
//!   bounds, blocks in source order, no overlap)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
