//! # Block Parsing
//!
//! Two-phase block parsing of a single comment block.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    with local facts only (blank, indented, list marker, note start, heading
//!    or link definition candidate).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups lines into
//!    `BlockNode`s and promotes candidates that are properly blank-isolated.
//!
//! ## Modules
//!
//! - **`types`**: `Node`, `Note`, `BlockNode`
//! - **`kinds`**: per-block syntax (headings, lists, notes, link definitions, indentation)
//! - **`classify`**: `CommentLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - A blank line always closes the open block
//! - Code blocks are raw zones: their lines are never inline-parsed
//! - Block spans are ordered and lie inside the comment's rope

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{CommentLineClassifier, LineClass, LineKind};
pub use types::{BlockNode, Node, Note};
