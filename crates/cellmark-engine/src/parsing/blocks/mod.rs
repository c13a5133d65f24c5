//! Block parsing.
//!
//! Two phases:
//!
//! 1. **Line classification** (`classify`): each line becomes a `LineClass`
//!    of local facts (blank status, indentation, fence signature, quote
//!    prefix).
//! 2. **Block assembly** (`builder`): a state machine walks the classified
//!    lines, tracking the one open leaf block, and emits [`crate::ast::Block`]
//!    values. Container content (quotes, list items) is stripped of its
//!    prefix and re-parsed recursively as an independent sub-document.
//!
//! Syntax knowledge lives in `kinds`: one module per construct so the
//! classifier and builder never hard-code delimiters.

pub mod builder;
pub mod classify;
pub mod kinds;

pub(crate) use builder::build_blocks;
pub use classify::{LineClass, classify};
