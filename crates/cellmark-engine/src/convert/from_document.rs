use crate::ast::{Block, Inline, Inlines, ListItem};
use crate::document::{Cell, CellContent, CellStyle, Document, RunStyle, TextRun};

use super::ConvertError;
use super::styles::{heading_level, info_for_language, item_depth};

/// Converts a cell document back into an AST.
///
/// Recognizes the fixed style vocabulary from the mapping tables. Runs of
/// item-family cells are folded back into nested lists; an input cell
/// swallows the output cell right behind it (outputs are regenerable).
/// Anything else fails the whole conversion, naming the offending cell.
pub fn from_document(doc: &Document) -> Result<Vec<Block>, ConvertError> {
    let mut blocks = Vec::new();
    let mut lists = ListStack::default();
    let mut i = 0;

    while i < doc.cells.len() {
        let cell = &doc.cells[i];

        if let Some(level) = heading_level(cell.style) {
            lists.close_all(&mut blocks);
            let inlines = runs_to_inlines(i, rich_content(i, cell)?)?;
            blocks.push(Block::Heading(level, inlines));
        } else if let Some((depth, bullet)) = item_depth(cell.style) {
            let paragraph = Block::Paragraph(runs_to_inlines(i, rich_content(i, cell)?)?);
            if bullet {
                lists.open_item(i, depth, paragraph)?;
            } else {
                lists.continue_item(i, depth, paragraph)?;
            }
        } else if cell.style == CellStyle::Text {
            lists.close_all(&mut blocks);
            blocks.push(Block::Paragraph(runs_to_inlines(i, rich_content(i, cell)?)?));
        } else if cell.style == CellStyle::Program {
            lists.close_all(&mut blocks);
            blocks.push(Block::CodeBlock {
                info: cell.language.clone(),
                code: literal_content(i, cell)?.to_string(),
            });
        } else if cell.style == CellStyle::Input {
            lists.close_all(&mut blocks);
            let code = literal_content(i, cell)?.to_string();
            let Some(language) = cell.language.as_deref() else {
                return Err(ConvertError::UnrecognizedCell {
                    index: i,
                    reason: "input cell has no language tag".to_string(),
                });
            };
            let info = info_for_language(language)
                .map(str::to_string)
                .unwrap_or_else(|| language.to_lowercase());
            blocks.push(Block::CodeBlock {
                info: Some(info),
                code,
            });
            // The paired output collapses into the input's conversion.
            if doc
                .cells
                .get(i + 1)
                .is_some_and(|next| next.style == CellStyle::Output)
            {
                i += 1;
            }
        } else if cell.style == CellStyle::Output {
            return Err(ConvertError::UnrecognizedCell {
                index: i,
                reason: "output cell with no preceding input cell".to_string(),
            });
        } else {
            return Err(ConvertError::UnrecognizedCell {
                index: i,
                reason: format!("cell style `{}` is not recognized", cell.style.name()),
            });
        }

        i += 1;
    }

    lists.close_all(&mut blocks);
    Ok(blocks)
}

/// Open lists while folding flat item cells back into nesting.
///
/// `levels[d]` holds the finished items of the list open at depth `d + 1`.
/// Invariant: every open level has at least one item, so a deeper list
/// always has a parent item to attach to.
#[derive(Default)]
struct ListStack {
    levels: Vec<Vec<ListItem>>,
}

impl ListStack {
    fn open_item(&mut self, index: usize, depth: usize, paragraph: Block) -> Result<(), ConvertError> {
        if depth > self.levels.len() + 1 {
            return Err(ConvertError::UnrecognizedCell {
                index,
                reason: format!(
                    "item cell at depth {depth} skips over depth {}",
                    self.levels.len() + 1
                ),
            });
        }
        while self.levels.len() > depth {
            self.pop_inner();
        }
        if self.levels.len() < depth {
            self.levels.push(Vec::new());
        }
        if let Some(level) = self.levels.last_mut() {
            level.push(ListItem(vec![paragraph]));
        }
        Ok(())
    }

    fn continue_item(
        &mut self,
        index: usize,
        depth: usize,
        paragraph: Block,
    ) -> Result<(), ConvertError> {
        if depth > self.levels.len() {
            return Err(ConvertError::UnrecognizedCell {
                index,
                reason: format!("continuation cell at depth {depth} has no open item"),
            });
        }
        while self.levels.len() > depth {
            self.pop_inner();
        }
        match self.levels.last_mut().and_then(|level| level.last_mut()) {
            Some(item) => {
                item.0.push(paragraph);
                Ok(())
            }
            None => Err(ConvertError::UnrecognizedCell {
                index,
                reason: format!("continuation cell at depth {depth} has no open item"),
            }),
        }
    }

    /// Folds the deepest open list into its parent item.
    fn pop_inner(&mut self) {
        let Some(items) = self.levels.pop() else {
            return;
        };
        let list = Block::List(items);
        if let Some(item) = self.levels.last_mut().and_then(|level| level.last_mut()) {
            item.0.push(list);
        }
    }

    /// Closes every open list, emitting the outermost into `out`.
    fn close_all(&mut self, out: &mut Vec<Block>) {
        while self.levels.len() > 1 {
            self.pop_inner();
        }
        if let Some(items) = self.levels.pop() {
            out.push(Block::List(items));
        }
    }
}

fn rich_content<'a>(index: usize, cell: &'a Cell) -> Result<&'a [TextRun], ConvertError> {
    match &cell.content {
        CellContent::Rich(runs) => Ok(runs),
        CellContent::Literal(_) => Err(ConvertError::UnrecognizedCell {
            index,
            reason: format!(
                "cell style `{}` expects styled text content",
                cell.style.name()
            ),
        }),
    }
}

fn literal_content<'a>(index: usize, cell: &'a Cell) -> Result<&'a str, ConvertError> {
    match &cell.content {
        CellContent::Literal(text) => Ok(text),
        CellContent::Rich(_) => Err(ConvertError::UnrecognizedCell {
            index,
            reason: format!(
                "cell style `{}` expects literal text content",
                cell.style.name()
            ),
        }),
    }
}

fn runs_to_inlines(index: usize, runs: &[TextRun]) -> Result<Inlines, ConvertError> {
    let mut inlines = Vec::new();
    for run in runs {
        inlines.push(run_to_inline(index, run)?);
    }
    Ok(Inlines(inlines))
}

/// Rebuilds one run's nesting, applying attributes outer-to-inner.
fn run_to_inline(index: usize, run: &TextRun) -> Result<Inline, ConvertError> {
    let mut styles = run.styles.as_slice();
    let mut inline = if let [rest @ .., RunStyle::Code] = styles {
        styles = rest;
        Inline::Code(run.text.clone())
    } else {
        Inline::Text(run.text.clone())
    };
    for style in styles.iter().rev() {
        inline = match style {
            RunStyle::Strong => Inline::strong(inline),
            RunStyle::Emphasis => Inline::emphasis(inline),
            RunStyle::Code => {
                return Err(ConvertError::UnsupportedRunStyles {
                    index,
                    reason: "code attribute must be the innermost style".to_string(),
                });
            }
        };
    }
    Ok(inline)
}
