use super::kinds::{BlockQuote, CodeFence, FenceSig};

/// Classification of a single line: local facts only.
///
/// Phase 1 of block parsing. Each line is classified without reference to
/// surrounding context; the [`super::builder`] state machine combines these
/// facts with the open-block state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub raw: &'a str,
    /// Whitespace-only line.
    pub is_blank: bool,
    /// Leading space count.
    pub indent: usize,
    /// Fence opener signature, if the line looks like one.
    pub fence: Option<FenceSig>,
    /// Remainder after one level of `>` prefix, if the line carries one.
    pub quote: Option<&'a str>,
}

/// Classifies a line into its local facts.
pub fn classify(raw: &str) -> LineClass<'_> {
    let trimmed = raw.trim_start_matches(' ');
    LineClass {
        raw,
        is_blank: raw.trim().is_empty(),
        indent: raw.len() - trimmed.len(),
        fence: CodeFence::sig(raw),
        quote: BlockQuote::strip_prefix(raw),
    }
}
