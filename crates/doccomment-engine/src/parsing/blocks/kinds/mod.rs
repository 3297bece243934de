//! # Block Kinds
//!
//! Line-level syntax owned by each block type. The classifier asks these
//! types whether a line opens their block; it never hardcodes `#`, bullets,
//! or note markers itself.

pub mod heading;
pub mod indent;
pub mod link_def;
pub mod list;
pub mod note;

pub use heading::Heading;
pub use indent::Indent;
pub use link_def::LinkDef;
pub use list::{List, ListMarker};
pub use note::NoteMarker;
