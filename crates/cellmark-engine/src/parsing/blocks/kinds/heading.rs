use crate::ast::HeadingLevel;

/// ATX heading line knowledge.
///
/// A heading line is `#{1,6}` followed by whitespace and text. A longer `#`
/// run is not special syntax; the line stays paragraph text, markers
/// included.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';

    /// Parses a heading opener, returning the level and the trimmed content.
    ///
    /// Accepts up to three columns of leading indentation. Returns `None`
    /// for marker runs outside `1..=6`, for a run with no following
    /// whitespace, and for a run with no content after it.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return None;
        }

        let run = trimmed.chars().take_while(|&c| c == Self::MARKER).count();
        if run == 0 {
            return None;
        }
        let level = HeadingLevel::from_marker_len(run)?;

        let rest = &trimmed[run..];
        if !rest.starts_with(' ') && !rest.starts_with('\t') {
            return None;
        }

        let content = Self::trim_closing_run(rest.trim());
        if content.is_empty() {
            return None;
        }
        Some((level, content))
    }

    /// Drops an optional closing `#` run (`# Title #` keeps just `Title`).
    ///
    /// The closing run only counts when preceded by whitespace; `# a#b`
    /// keeps its hashes.
    fn trim_closing_run(content: &str) -> &str {
        let without_hashes = content.trim_end_matches(Self::MARKER);
        if without_hashes.len() == content.len() {
            return content;
        }
        let trimmed = without_hashes.trim_end_matches([' ', '\t']);
        if trimmed.len() < without_hashes.len() {
            trimmed
        } else {
            content
        }
    }
}
