//! The external cell-document model.
//!
//! A document is an ordered sequence of typed content cells. Each cell has
//! a style tag and either styled rich text or literal text plus optional
//! language metadata. This is the host application's interchange shape;
//! everything derives serde so the boundary stays plain data.

use serde::{Deserialize, Serialize};

/// An ordered sequence of content cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub cells: Vec<Cell>,
}

/// One content cell: a style tag plus content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub style: CellStyle,
    pub content: CellContent,
    /// Language metadata for literal cells. `None` encodes "no language
    /// tag".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The fixed cell style vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    // Heading family, one per heading level.
    Title,
    Chapter,
    Section,
    Subsection,
    Subsubsection,
    Subsubsubsection,
    /// A plain text unit.
    Text,
    // Bulleted cells by nesting depth.
    Item,
    Subitem,
    Subsubitem,
    // Indented continuation cells (no bullet) by nesting depth.
    ItemParagraph,
    SubitemParagraph,
    SubsubitemParagraph,
    /// A literal code listing with no evaluation semantics.
    Program,
    /// An evaluatable source expression tagged with its language.
    Input,
    /// The result of evaluating an input cell. Ephemeral: regenerable from
    /// its input, and dropped when converting back to an AST.
    Output,
}

/// A cell's payload: styled rich text or literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Rich(Vec<TextRun>),
    Literal(String),
}

/// A run of rich text carrying its style attributes outer-to-inner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<RunStyle>,
}

/// A style attribute on a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStyle {
    Strong,
    Emphasis,
    /// Monospaced code. Always the innermost attribute: code carries no
    /// nested styling.
    Code,
}

impl Cell {
    /// A rich-text cell.
    pub fn rich(style: CellStyle, runs: Vec<TextRun>) -> Self {
        Cell {
            style,
            content: CellContent::Rich(runs),
            language: None,
        }
    }

    /// A literal-text cell with optional language metadata.
    pub fn literal<S: Into<String>>(style: CellStyle, text: S, language: Option<String>) -> Self {
        Cell {
            style,
            content: CellContent::Literal(text.into()),
            language,
        }
    }
}

impl TextRun {
    /// An unstyled run.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        TextRun {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    pub fn styled<S: Into<String>>(text: S, styles: Vec<RunStyle>) -> Self {
        TextRun {
            text: text.into(),
            styles,
        }
    }
}

impl CellStyle {
    /// The style's tag name, as used in error messages and the host
    /// interchange format.
    pub fn name(self) -> &'static str {
        match self {
            CellStyle::Title => "Title",
            CellStyle::Chapter => "Chapter",
            CellStyle::Section => "Section",
            CellStyle::Subsection => "Subsection",
            CellStyle::Subsubsection => "Subsubsection",
            CellStyle::Subsubsubsection => "Subsubsubsection",
            CellStyle::Text => "Text",
            CellStyle::Item => "Item",
            CellStyle::Subitem => "Subitem",
            CellStyle::Subsubitem => "Subsubitem",
            CellStyle::ItemParagraph => "ItemParagraph",
            CellStyle::SubitemParagraph => "SubitemParagraph",
            CellStyle::SubsubitemParagraph => "SubsubitemParagraph",
            CellStyle::Program => "Program",
            CellStyle::Input => "Input",
            CellStyle::Output => "Output",
        }
    }
}
