//! Markdown AST value types.
//!
//! The AST is an immutable value tree: parsing produces it in one shot and
//! callers own the returned tree outright. All variants are closed sum types,
//! so structural rules (a `List` holds only `ListItem`s, a heading level is
//! one of six) are enforced by construction rather than checked at runtime.

/// A structural piece of Markdown content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A run of inline content terminated by a blank line.
    Paragraph(Inlines),
    /// An ATX heading: `#{1,6}` followed by inline content.
    Heading(HeadingLevel, Inlines),
    /// A fenced or indented code block.
    ///
    /// `info` is `Some` for fenced blocks (possibly the empty string) and
    /// `None` for indented blocks.
    CodeBlock {
        info: Option<String>,
        code: String,
    },
    /// A bullet or ordinal list. Every child is a [`ListItem`].
    List(Vec<ListItem>),
    /// A `>`-prefixed region containing a nested sub-document.
    BlockQuote(Vec<Block>),
    /// A horizontal rule line (`---`, `***`, `___`).
    ThematicBreak,
}

/// An item in a [`Block::List`]. Items hold a full block sequence, so a
/// single item can carry several paragraphs or a nested list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem(pub Vec<Block>);

/// An ordered sequence of [`Inline`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inlines(pub Vec<Inline>);

/// An atomic piece of run-level content inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text with all markup resolved (escapes removed).
    Text(String),
    /// A backtick code span. Raw zone: content is never scanned for markup.
    Code(String),
    /// Strong emphasis (`**`/`__` delimited).
    Strong(Inlines),
    /// Emphasis (`*`/`_` delimited).
    Emphasis(Inlines),
    /// An ordinary line break inside a paragraph.
    SoftBreak,
    /// A forced line break (two trailing spaces or a trailing backslash).
    HardBreak,
}

/// ATX heading level. A `#` run longer than six is not a heading and stays
/// literal paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Maps a marker-run length to a level. `None` for runs outside `1..=6`.
    pub fn from_marker_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    /// The number of `#` markers for this level.
    pub fn marker_len(self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

impl Block {
    /// A paragraph from a list of inlines.
    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Block::Paragraph(Inlines(inlines))
    }

    /// A paragraph holding a single piece of plain text.
    pub fn plain_text_paragraph<S: Into<String>>(text: S) -> Self {
        Block::Paragraph(Inlines::plain_text(text))
    }
}

impl Inlines {
    /// A sequence holding a single piece of plain text.
    pub fn plain_text<S: Into<String>>(text: S) -> Self {
        Inlines(vec![Inline::Text(text.into())])
    }
}

impl Inline {
    pub fn plain_text<S: Into<String>>(text: S) -> Self {
        Inline::Text(text.into())
    }

    pub fn code<S: Into<String>>(code: S) -> Self {
        Inline::Code(code.into())
    }

    pub fn emphasis(inner: Inline) -> Self {
        Inline::Emphasis(Inlines(vec![inner]))
    }

    pub fn strong(inner: Inline) -> Self {
        Inline::Strong(Inlines(vec![inner]))
    }
}

impl ListItem {
    /// An item holding a single plain-text paragraph.
    pub fn plain_text<S: Into<String>>(text: S) -> Self {
        ListItem(vec![Block::plain_text_paragraph(text)])
    }
}

impl IntoIterator for Inlines {
    type Item = Inline;
    type IntoIter = std::vec::IntoIter<Inline>;

    fn into_iter(self) -> Self::IntoIter {
        let Inlines(inlines) = self;
        inlines.into_iter()
    }
}
