//! Markdown printing (AST → text).
//!
//! The printer is the inverse of [`crate::parsing`]: exactly one blank
//! line between sibling blocks, computed fence lengths, escaped literal
//! text, and marker selection chosen so that re-parsing the output
//! reconstructs the same tree. Two places need active disambiguation:
//!
//! - Directly nested `Strong`/`Emphasis` alternate their marker character
//!   (see [`inlines`]), otherwise the marker runs would merge on re-parse.
//! - Adjacent sibling lists alternate their bullet character, otherwise
//!   two lists would merge into one.

pub mod inlines;

use crate::ast::{Block, ListItem};
use crate::parsing::blocks::kinds::{AtxHeading, BlockQuote, ListMarker, ThematicBreakLine};

use inlines::{longest_run, render_inlines};

/// Renders a block sequence to Markdown text.
pub fn render(blocks: &[Block]) -> String {
    render_blocks(blocks)
}

fn render_blocks(blocks: &[Block]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut prev_bullet: Option<char> = None;
    for block in blocks {
        match block {
            Block::List(items) => {
                let bullet = if prev_bullet == Some('-') { '*' } else { '-' };
                prev_bullet = Some(bullet);
                parts.push(render_list(items, bullet));
            }
            other => {
                prev_bullet = None;
                parts.push(render_block(other));
            }
        }
    }
    parts.join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph(inlines) => guard_line_starts(&render_inlines(inlines, 0)),
        Block::Heading(level, inlines) => format!(
            "{} {}",
            "#".repeat(level.marker_len()),
            render_inlines(inlines, 0)
        ),
        Block::CodeBlock {
            info: Some(info),
            code,
        } => render_fenced(info, code),
        Block::CodeBlock { info: None, code } => render_indented(code),
        Block::List(items) => render_list(items, '-'),
        Block::BlockQuote(blocks) => prefix_quote(&render_blocks(blocks)),
        Block::ThematicBreak => "---".to_string(),
    }
}

/// Fence drawn longer than any run of its character inside the body, so
/// the body can never close it early. Tildes take over when the info
/// string itself carries a backtick.
fn render_fenced(info: &str, code: &str) -> String {
    let ch = if info.contains('`') { '~' } else { '`' };
    let len = (longest_run(code, ch) + 1).max(3);
    let fence: String = std::iter::repeat(ch).take(len).collect();

    let mut out = format!("{fence}{info}\n");
    out.push_str(code);
    if !code.is_empty() && !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out
}

fn render_indented(code: &str) -> String {
    let lines: Vec<String> = code
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect();
    lines.join("\n")
}

fn prefix_quote(inner: &str) -> String {
    let lines: Vec<String> = inner
        .lines()
        .map(|line| {
            if line.is_empty() {
                format!("{}", BlockQuote::PREFIX)
            } else {
                format!("{} {line}", BlockQuote::PREFIX)
            }
        })
        .collect();
    lines.join("\n")
}

/// Items render tight (no blank between single-paragraph items); an
/// item's further blocks follow indented to the content column.
fn render_list(items: &[ListItem], bullet: char) -> String {
    let mut lines: Vec<String> = Vec::new();
    for item in items {
        let content = render_blocks(&item.0);
        let mut first = true;
        for line in content.lines() {
            if first {
                lines.push(format!("{bullet} {line}"));
                first = false;
            } else if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("  {line}"));
            }
        }
        if first {
            lines.push(bullet.to_string());
        }
    }
    lines.join("\n")
}

/// Escapes paragraph lines that would re-parse as a block opener (a list
/// marker, quote prefix, heading or thematic break spelled out in literal
/// text). Emphasis/code markup is already escaped character-wise, so only
/// `#`, `>`, bullet and ordinal lookalikes remain.
fn guard_line_starts(text: &str) -> String {
    let lines: Vec<String> = text.lines().map(guard_line).collect();
    lines.join("\n")
}

fn guard_line(line: &str) -> String {
    let opener = AtxHeading::parse(line).is_some()
        || BlockQuote::strip_prefix(line).is_some()
        || ThematicBreakLine::matches(line)
        || ListMarker::parse(line).is_some();
    if !opener {
        return line.to_string();
    }

    let first = line.chars().next().unwrap_or(' ');
    if first.is_ascii_digit() {
        // Ordinal marker: the delimiter takes the escape (`1\. x`), since
        // a backslash before a digit would stay literal.
        if let Some(pos) = line.find(['.', ')']) {
            return format!("{}\\{}", &line[..pos], &line[pos..]);
        }
    }
    format!("\\{line}")
}
