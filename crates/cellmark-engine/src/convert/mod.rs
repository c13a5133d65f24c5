//! Bidirectional AST ⇄ cell-document conversion.
//!
//! The forward direction walks the block tree with an explicit
//! [`ConvertContext`] nesting stack that selects per-block presentation
//! (bulleted vs. continuation styles by list depth). The reverse direction
//! folds flat, depth-tagged cells back into nested lists. Both consult the
//! static mapping tables in [`styles`].
//!
//! Failure policy: fail fast and whole. Any single unsupported node or
//! unrecognized cell aborts the call with a structured error carrying the
//! offending node and, where relevant, the nesting-context path. The
//! context stack is call-scoped, so a failed conversion leaves nothing
//! behind for the next call to trip on.

pub mod context;
pub mod from_document;
pub mod styles;
pub mod to_document;

pub use context::{ConvertContext, Frame};
pub use from_document::from_document;
pub use styles::MAX_LIST_DEPTH;
pub use to_document::to_document;

/// Conversion switches.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Convert fenced code blocks whose info string names a known external
    /// evaluation language into input cells instead of program cells.
    pub external_language_cells: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            external_language_cells: true,
        }
    }
}

/// Errors raised by either conversion direction. All are fatal to the
/// current call; no partial document or tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A block kind with no cell representation (block quote, thematic
    /// break).
    #[error("`{kind}` has no cell representation (at {context})")]
    UnsupportedBlock { kind: &'static str, context: String },
    /// A heading somewhere other than the document root.
    #[error("heading outside the document root is not supported (at {context})")]
    HeadingOutsideRoot { context: String },
    /// A paragraph nested in more lists than bulleted styles exist for.
    #[error(
        "list nesting depth {depth} exceeds the bulleted-cell maximum of {max}",
        max = MAX_LIST_DEPTH
    )]
    ListTooDeep { depth: usize },
    /// A cell whose style or shape the reverse direction does not
    /// recognize.
    #[error("unrecognized cell {index}: {reason}")]
    UnrecognizedCell { index: usize, reason: String },
    /// A rich-text run whose attribute stack cannot be expressed as
    /// inline nesting.
    #[error("unsupported style composition in cell {index}: {reason}")]
    UnsupportedRunStyles { index: usize, reason: String },
}
