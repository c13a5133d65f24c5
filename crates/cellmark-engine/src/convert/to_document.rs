use crate::ast::{Block, Inline, Inlines, ListItem};
use crate::document::{Cell, CellStyle, Document, RunStyle, TextRun};

use super::context::{ConvertContext, Frame};
use super::styles::{evaluation_language, heading_style, item_style};
use super::{ConvertError, ConvertOptions};

/// Converts an AST into the cell-document representation.
///
/// Fails fast and whole: the first unsupported node aborts the call, and
/// the error carries the nesting context it happened in.
pub fn to_document(blocks: &[Block], opts: &ConvertOptions) -> Result<Document, ConvertError> {
    let mut ctx = ConvertContext::new();
    let mut cells = Vec::new();
    for block in blocks {
        block_to_cells(&mut ctx, opts, block, &mut cells)?;
    }
    Ok(Document { cells })
}

fn block_to_cells(
    ctx: &mut ConvertContext,
    opts: &ConvertOptions,
    block: &Block,
    out: &mut Vec<Cell>,
) -> Result<(), ConvertError> {
    match block {
        Block::Heading(level, inlines) => {
            if !ctx.is_root() {
                return Err(ConvertError::HeadingOutsideRoot {
                    context: ctx.path(),
                });
            }
            out.push(Cell::rich(heading_style(*level), inlines_to_runs(inlines)));
            Ok(())
        }
        Block::Paragraph(inlines) => {
            let style = paragraph_style(ctx)?;
            out.push(Cell::rich(style, inlines_to_runs(inlines)));
            Ok(())
        }
        Block::CodeBlock { info, code } => {
            let cell = match info.as_deref().and_then(evaluation_language) {
                Some(language) if opts.external_language_cells => Cell::literal(
                    CellStyle::Input,
                    code.clone(),
                    Some(language.to_string()),
                ),
                _ => Cell::literal(CellStyle::Program, code.clone(), info.clone()),
            };
            out.push(cell);
            Ok(())
        }
        Block::List(items) => {
            ctx.push(Frame::List);
            let result = items_to_cells(ctx, opts, items, out);
            ctx.pop();
            result
        }
        Block::BlockQuote(_) => Err(ConvertError::UnsupportedBlock {
            kind: "block quote",
            context: ctx.path(),
        }),
        Block::ThematicBreak => Err(ConvertError::UnsupportedBlock {
            kind: "thematic break",
            context: ctx.path(),
        }),
    }
}

fn items_to_cells(
    ctx: &mut ConvertContext,
    opts: &ConvertOptions,
    items: &[ListItem],
    out: &mut Vec<Cell>,
) -> Result<(), ConvertError> {
    for ListItem(blocks) in items {
        for (i, block) in blocks.iter().enumerate() {
            ctx.push(Frame::Item { block_index: i + 1 });
            let result = block_to_cells(ctx, opts, block, out);
            ctx.pop();
            result?;
        }
    }
    Ok(())
}

/// A paragraph's cell style from the nesting context: plain text at root,
/// a bulleted style for an item's first content block, an indented
/// continuation style for its later ones. Depth is capped at three.
fn paragraph_style(ctx: &ConvertContext) -> Result<CellStyle, ConvertError> {
    let depth = ctx.list_depth();
    if depth == 0 {
        return Ok(CellStyle::Text);
    }
    let bullet = ctx.item_block_index() == Some(1);
    item_style(depth, bullet).ok_or(ConvertError::ListTooDeep { depth })
}

/// Flattens an inline tree into styled runs, attributes outer-to-inner.
fn inlines_to_runs(inlines: &Inlines) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut styles = Vec::new();
    collect_runs(&inlines.0, &mut styles, &mut runs);
    runs
}

fn collect_runs(inlines: &[Inline], styles: &mut Vec<RunStyle>, out: &mut Vec<TextRun>) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push(TextRun::styled(text.clone(), styles.clone())),
            Inline::Code(code) => {
                styles.push(RunStyle::Code);
                out.push(TextRun::styled(code.clone(), styles.clone()));
                styles.pop();
            }
            Inline::Strong(inner) => {
                styles.push(RunStyle::Strong);
                collect_runs(&inner.0, styles, out);
                styles.pop();
            }
            Inline::Emphasis(inner) => {
                styles.push(RunStyle::Emphasis);
                collect_runs(&inner.0, styles, out);
                styles.pop();
            }
            Inline::SoftBreak => out.push(TextRun::styled(" ", styles.clone())),
            Inline::HardBreak => out.push(TextRun::styled("\n", styles.clone())),
        }
    }
}
