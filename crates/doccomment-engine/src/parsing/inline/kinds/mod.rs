//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! - **`Bracket`**: `[` / `]` delimiters for link references
//! - **`Url`**: recognized schemes and the bare URL grammar
//! - **`DocLink`**: the identifier grammar inside `[...]`

pub mod bracket;
pub mod doc_link;
pub mod url;

pub use bracket::Bracket;
pub use doc_link::DocLink;
pub use url::Url;
