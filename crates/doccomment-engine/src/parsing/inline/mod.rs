//! # Inline Parsing
//!
//! Cursor-based inline parsing followed by reference resolution.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of paragraphs, headings, list items and
//! notes. Code blocks never reach it.
//!
//! - **`types`**: `InlineNode` (spans) and `Inline` (resolved output)
//! - **`kinds`**: delimiter and grammar owners (`Bracket`, `Url`, `DocLink`)
//! - **`cursor`**: `Cursor` for char-by-char scanning
//! - **`parser`**: `parse_inline()` producing spans
//! - **`resolve`**: `resolve_inline()` turning spans into links or literal text
//!
//! ## Resolution Precedence
//!
//! 1. `[label]` matching a `[label]: url` definition in the same comment
//! 2. `[Name]` / `[Name.Member]` in the local symbol table
//! 3. `[pkg.Name]` / `[import/path.Name]` in the foreign index
//! 4. otherwise the brackets are kept as written

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod resolve;
pub mod types;

pub use parser::parse_inline;
pub use resolve::{LinkDefs, Resolved, resolve_inline};
pub use types::{Inline, InlineNode, LinkKind};
