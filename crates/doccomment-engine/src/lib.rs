pub mod error;
pub mod notes;
pub mod package;
pub mod parsing;
pub mod render;
pub mod symbols;

// Re-export key types for easier usage
pub use error::{DocError, Result};
pub use notes::{NoteSections, SourcedNote, section_title};
pub use package::{
    DeclKind, Declaration, Example, Package, PackageBuilder, RenderedPackage, render_package,
};
pub use parsing::{CommentBlock, ParsedDoc, parse_comment};
pub use render::{
    OutputFormat, RenderOptions, Rendered, UnresolvedRef, render, render_body, render_notes,
};
pub use symbols::{ForeignIndex, SymbolTable};
