use crate::ast::{Block, ListItem};
use crate::parsing::inline::parse_inlines;

use super::classify::classify;
use super::kinds::{AtxHeading, CodeFence, FenceSig, ListMarker, ThematicBreakLine};

/// Assembles classified lines into blocks.
///
/// Container content (a quote's stripped lines, a list item's dedented
/// lines) is collected and re-parsed as an independent sub-document, so
/// nesting falls out of recursion instead of a container stack.
struct BlockBuilder<'a> {
    /// Inside a list item's sub-document. Indented code does not open
    /// there; such lines continue the item's paragraph instead.
    in_list_item: bool,
    paragraph: Vec<&'a str>,
    out: Vec<Block>,
}

/// Parses a slice of terminator-free lines into a block sequence.
pub(crate) fn build_blocks(lines: &[&str], in_list_item: bool) -> Vec<Block> {
    BlockBuilder {
        in_list_item,
        paragraph: Vec::new(),
        out: Vec::new(),
    }
    .run(lines)
}

impl<'a> BlockBuilder<'a> {
    fn run(mut self, lines: &[&'a str]) -> Vec<Block> {
        let mut i = 0;
        while i < lines.len() {
            let lc = classify(lines[i]);

            if lc.is_blank {
                self.flush_paragraph();
                i += 1;
                continue;
            }
            if let Some(sig) = &lc.fence {
                self.flush_paragraph();
                i = self.consume_fence(lines, i + 1, sig);
                continue;
            }
            if self.paragraph.is_empty() && !self.in_list_item && lc.indent >= 4 {
                i = self.consume_indented(lines, i);
                continue;
            }
            if lc.quote.is_some() {
                self.flush_paragraph();
                i = self.consume_quote(lines, i);
                continue;
            }
            if ThematicBreakLine::matches(lc.raw) {
                self.flush_paragraph();
                self.out.push(Block::ThematicBreak);
                i += 1;
                continue;
            }
            // A heading only opens with no paragraph in flight; otherwise the
            // line is lazy continuation like any other text line.
            if self.paragraph.is_empty()
                && let Some((level, text)) = AtxHeading::parse(lc.raw)
            {
                self.out.push(Block::Heading(level, parse_inlines(text)));
                i += 1;
                continue;
            }
            if let Some(marker) = ListMarker::parse(lc.raw) {
                self.flush_paragraph();
                i = self.consume_list(lines, i, marker);
                continue;
            }

            self.paragraph.push(lc.raw.trim_start());
            i += 1;
        }
        self.flush_paragraph();
        self.out
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();
        let text = text.trim_end_matches([' ', '\t']);
        self.out.push(Block::Paragraph(parse_inlines(text)));
    }

    /// Collects verbatim lines until the closing fence or end of input.
    /// An unterminated fence is not an error; the block runs to the end.
    fn consume_fence(&mut self, lines: &[&str], mut i: usize, sig: &FenceSig) -> usize {
        let mut code = String::new();
        while i < lines.len() && !CodeFence::closes(sig, lines[i]) {
            code.push_str(lines[i]);
            code.push('\n');
            i += 1;
        }
        if i < lines.len() {
            i += 1; // closing fence line
        }
        self.out.push(Block::CodeBlock {
            info: Some(sig.info.clone()),
            code,
        });
        i
    }

    /// Collects four-space-indented lines until a non-indented, non-blank
    /// line. Interior blank lines stay part of the block; trailing ones do
    /// not.
    fn consume_indented(&mut self, lines: &[&str], mut i: usize) -> usize {
        let mut collected: Vec<&str> = Vec::new();
        while i < lines.len() {
            let lc = classify(lines[i]);
            if lc.is_blank {
                collected.push("");
            } else if lc.indent >= 4 {
                collected.push(&lines[i][4..]);
            } else {
                break;
            }
            i += 1;
        }
        while collected.last().is_some_and(|l| l.is_empty()) {
            collected.pop();
        }

        let mut code = String::new();
        for line in collected {
            code.push_str(line);
            code.push('\n');
        }
        self.out.push(Block::CodeBlock { info: None, code });
        i
    }

    /// Strips one `>` level off consecutive quote lines and re-parses the
    /// remainder as an independent sub-document.
    fn consume_quote(&mut self, lines: &[&'a str], mut i: usize) -> usize {
        let mut inner: Vec<&str> = Vec::new();
        while i < lines.len()
            && let Some(rest) = classify(lines[i]).quote
        {
            inner.push(rest);
            i += 1;
        }
        self.out.push(Block::BlockQuote(build_blocks(&inner, false)));
        i
    }

    /// Collects items of one list. Marker lines of the same style open new
    /// items; a differing style ends the list so the caller starts a new
    /// adjacent one. Lines indented to the content column belong to the
    /// current item and are re-parsed as its own block sequence.
    fn consume_list(&mut self, lines: &[&'a str], start: usize, first: ListMarker) -> usize {
        let style = first.style;
        let mut items: Vec<ListItem> = Vec::new();
        let mut item_lines: Vec<&'a str> = vec![first.content(lines[start])];
        let mut content_col = first.content_col;
        let mut blank_run = 0usize;
        let mut i = start + 1;

        while i < lines.len() {
            let lc = classify(lines[i]);

            if lc.is_blank {
                blank_run += 1;
                i += 1;
                if blank_run >= 2 {
                    break;
                }
                item_lines.push("");
                continue;
            }
            if lc.indent >= content_col {
                blank_run = 0;
                item_lines.push(&lines[i][content_col..]);
                i += 1;
                continue;
            }
            if ThematicBreakLine::matches(lc.raw) {
                break;
            }
            if let Some(marker) = ListMarker::parse(lc.raw) {
                if marker.style != style {
                    break;
                }
                close_item(&mut items, &mut item_lines);
                item_lines.push(marker.content(lines[i]));
                content_col = marker.content_col;
                blank_run = 0;
                i += 1;
                continue;
            }
            if blank_run == 0 && lc.quote.is_none() && lc.fence.is_none() {
                // Lazy continuation of the item's open paragraph.
                item_lines.push(lc.raw.trim_start());
                i += 1;
                continue;
            }
            break;
        }

        close_item(&mut items, &mut item_lines);
        self.out.push(Block::List(items));
        i
    }
}

fn close_item<'a>(items: &mut Vec<ListItem>, item_lines: &mut Vec<&'a str>) {
    while item_lines.last().is_some_and(|l| l.trim().is_empty()) {
        item_lines.pop();
    }
    items.push(ListItem(build_blocks(item_lines, true)));
    item_lines.clear();
}
