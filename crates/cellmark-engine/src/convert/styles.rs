//! The static style mapping tables consulted by both conversion
//! directions, so the vocabulary is data rather than scattered match arms.

use crate::ast::HeadingLevel;
use crate::document::CellStyle;

/// Bulleted cells support three nesting levels.
pub const MAX_LIST_DEPTH: usize = 3;

/// Heading level ⇄ heading-family cell style.
const HEADINGS: [(HeadingLevel, CellStyle); 6] = [
    (HeadingLevel::H1, CellStyle::Title),
    (HeadingLevel::H2, CellStyle::Chapter),
    (HeadingLevel::H3, CellStyle::Section),
    (HeadingLevel::H4, CellStyle::Subsection),
    (HeadingLevel::H5, CellStyle::Subsubsection),
    (HeadingLevel::H6, CellStyle::Subsubsubsection),
];

/// List depth (1-based) → (bulleted style, continuation style).
const ITEMS: [(CellStyle, CellStyle); MAX_LIST_DEPTH] = [
    (CellStyle::Item, CellStyle::ItemParagraph),
    (CellStyle::Subitem, CellStyle::SubitemParagraph),
    (CellStyle::Subsubitem, CellStyle::SubsubitemParagraph),
];

/// Fenced info strings naming a known external evaluation language,
/// mapped to the canonical language name used on input cells.
const EVALUATION_LANGUAGES: &[(&str, &str)] = &[
    ("python", "Python"),
    ("shell", "Shell"),
    ("bash", "Shell"),
    ("sh", "Shell"),
    ("zsh", "Shell"),
    ("julia", "Julia"),
    ("r", "R"),
    ("octave", "Octave"),
    ("java", "Java"),
    ("node", "NodeJS"),
    ("nodejs", "NodeJS"),
    ("js", "NodeJS"),
    ("javascript", "NodeJS"),
    ("jupyter", "Jupyter"),
    ("sql", "SQL"),
    ("sql-jdbc", "SQL-JDBC"),
];

/// Canonical language name → preferred info string for the reverse
/// direction.
const LANGUAGE_INFOS: &[(&str, &str)] = &[
    ("Python", "python"),
    ("Shell", "shell"),
    ("Julia", "julia"),
    ("R", "r"),
    ("Octave", "octave"),
    ("Java", "java"),
    ("NodeJS", "javascript"),
    ("Jupyter", "jupyter"),
    ("SQL", "sql"),
    ("SQL-JDBC", "sql-jdbc"),
];

pub(crate) fn heading_style(level: HeadingLevel) -> CellStyle {
    HEADINGS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, s)| *s)
        .unwrap_or(CellStyle::Title)
}

pub(crate) fn heading_level(style: CellStyle) -> Option<HeadingLevel> {
    HEADINGS
        .iter()
        .find(|(_, s)| *s == style)
        .map(|(l, _)| *l)
}

/// Style for a paragraph at the given list depth. `bullet` selects the
/// bulleted form (first content block) over the indented continuation.
/// `None` past the depth ceiling.
pub(crate) fn item_style(depth: usize, bullet: bool) -> Option<CellStyle> {
    let (item, continuation) = ITEMS.get(depth.checked_sub(1)?)?;
    Some(if bullet { *item } else { *continuation })
}

/// Depth and bulleted-ness of an item-family style. `None` for styles
/// outside the family.
pub(crate) fn item_depth(style: CellStyle) -> Option<(usize, bool)> {
    ITEMS.iter().enumerate().find_map(|(i, (item, cont))| {
        if style == *item {
            Some((i + 1, true))
        } else if style == *cont {
            Some((i + 1, false))
        } else {
            None
        }
    })
}

/// Canonical evaluation-language name for a fenced info string.
pub(crate) fn evaluation_language(info: &str) -> Option<&'static str> {
    let info = info.to_lowercase();
    EVALUATION_LANGUAGES
        .iter()
        .find(|(tag, _)| *tag == info)
        .map(|(_, lang)| *lang)
}

/// Info string to use when converting an input cell's language back.
pub(crate) fn info_for_language(language: &str) -> Option<&'static str> {
    LANGUAGE_INFOS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, info)| *info)
}
