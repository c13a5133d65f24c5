//! Markdown parsing.
//!
//! `parse` drives the two stages: the line-oriented block grammar in
//! [`blocks`] and the per-block inline grammar in [`inline`]. The result is
//! an owned [`crate::ast::Block`] tree; malformed input degrades (literal
//! text, fence running to end of input) rather than failing.

pub mod blocks;
pub mod inline;

use crate::ast::Block;
use blocks::build_blocks;

/// Parses a Markdown document into its block sequence.
pub fn parse(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    build_blocks(&lines, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{HeadingLevel, Inline, Inlines, ListItem};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_no_blocks() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n\n"), vec![]);
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(parse("hello"), vec![Block::plain_text_paragraph("hello")]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(
            parse("one\n\ntwo"),
            vec![
                Block::plain_text_paragraph("one"),
                Block::plain_text_paragraph("two"),
            ]
        );
    }

    #[test]
    fn multiline_paragraph_keeps_soft_breaks() {
        assert_eq!(
            parse("line one\nline two"),
            vec![Block::paragraph(vec![
                Inline::Text("line one".into()),
                Inline::SoftBreak,
                Inline::Text("line two".into()),
            ])]
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            parse("## Two"),
            vec![Block::Heading(
                HeadingLevel::H2,
                Inlines::plain_text("Two")
            )]
        );
        assert_eq!(
            parse("###### Six"),
            vec![Block::Heading(
                HeadingLevel::H6,
                Inlines::plain_text("Six")
            )]
        );
    }

    #[test]
    fn heading_with_styled_text() {
        assert_eq!(
            parse("# Hello *world*"),
            vec![Block::Heading(
                HeadingLevel::H1,
                Inlines(vec![
                    Inline::Text("Hello ".into()),
                    Inline::emphasis(Inline::Text("world".into())),
                ])
            )]
        );
    }

    #[test]
    fn eight_hash_marker_run_is_literal_paragraph_text() {
        assert_eq!(
            parse("######## Not a heading"),
            vec![Block::plain_text_paragraph("######## Not a heading")]
        );
    }

    #[test]
    fn heading_line_does_not_interrupt_a_paragraph() {
        assert_eq!(
            parse("text\n# looks like a heading"),
            vec![Block::paragraph(vec![
                Inline::Text("text".into()),
                Inline::SoftBreak,
                Inline::Text("# looks like a heading".into()),
            ])]
        );
    }

    #[test]
    fn fenced_code_block_with_info() {
        assert_eq!(
            parse("```rust\nfn main() {}\n```"),
            vec![Block::CodeBlock {
                info: Some("rust".into()),
                code: "fn main() {}\n".into(),
            }]
        );
    }

    #[test]
    fn fenced_code_keeps_blank_lines_verbatim() {
        assert_eq!(
            parse("```\na\n\nb\n```"),
            vec![Block::CodeBlock {
                info: Some("".into()),
                code: "a\n\nb\n".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end_of_input() {
        assert_eq!(
            parse("```\ncode"),
            vec![Block::CodeBlock {
                info: Some("".into()),
                code: "code\n".into(),
            }]
        );
    }

    #[test]
    fn shorter_closing_run_does_not_close() {
        assert_eq!(
            parse("````\ncode\n```"),
            vec![Block::CodeBlock {
                info: Some("".into()),
                code: "code\n```\n".into(),
            }]
        );
    }

    #[test]
    fn tilde_fence_holds_backticks() {
        assert_eq!(
            parse("~~~\n```\n~~~"),
            vec![Block::CodeBlock {
                info: Some("".into()),
                code: "```\n".into(),
            }]
        );
    }

    #[test]
    fn indented_code_block() {
        assert_eq!(
            parse("    let x = 1;\n    let y = 2;"),
            vec![Block::CodeBlock {
                info: None,
                code: "let x = 1;\nlet y = 2;\n".into(),
            }]
        );
    }

    #[test]
    fn indented_line_continues_an_open_paragraph() {
        assert_eq!(
            parse("text\n    still text"),
            vec![Block::paragraph(vec![
                Inline::Text("text".into()),
                Inline::SoftBreak,
                Inline::Text("still text".into()),
            ])]
        );
    }

    #[test]
    fn thematic_break_forms() {
        assert_eq!(parse("---"), vec![Block::ThematicBreak]);
        assert_eq!(parse("* * *"), vec![Block::ThematicBreak]);
        assert_eq!(parse("_____"), vec![Block::ThematicBreak]);
    }

    #[test]
    fn thematic_break_wins_over_bullet_run() {
        // "* * *" is ambiguous with a bullet list; the break wins.
        assert_eq!(
            parse("* one\n* * *\n* two"),
            vec![
                Block::List(vec![ListItem::plain_text("one")]),
                Block::ThematicBreak,
                Block::List(vec![ListItem::plain_text("two")]),
            ]
        );
    }

    #[test]
    fn block_quote_wraps_a_sub_document() {
        assert_eq!(
            parse("> quoted"),
            vec![Block::BlockQuote(vec![Block::plain_text_paragraph(
                "quoted"
            )])]
        );
    }

    #[test]
    fn block_quote_contains_multiple_blocks() {
        assert_eq!(
            parse("> # Title\n> body"),
            vec![Block::BlockQuote(vec![
                Block::Heading(HeadingLevel::H1, Inlines::plain_text("Title")),
                Block::plain_text_paragraph("body"),
            ])]
        );
    }

    #[test]
    fn nested_block_quote() {
        assert_eq!(
            parse("> > deep"),
            vec![Block::BlockQuote(vec![Block::BlockQuote(vec![
                Block::plain_text_paragraph("deep"),
            ])])]
        );
    }

    #[test]
    fn three_bullets_make_three_items() {
        assert_eq!(
            parse("* one\n* two\n* three"),
            vec![Block::List(vec![
                ListItem::plain_text("one"),
                ListItem::plain_text("two"),
                ListItem::plain_text("three"),
            ])]
        );
    }

    #[test]
    fn ordinal_markers_make_a_list() {
        assert_eq!(
            parse("1. one\n2. two"),
            vec![Block::List(vec![
                ListItem::plain_text("one"),
                ListItem::plain_text("two"),
            ])]
        );
    }

    #[test]
    fn differing_bullet_characters_start_a_new_adjacent_list() {
        assert_eq!(
            parse("- one\n* two"),
            vec![
                Block::List(vec![ListItem::plain_text("one")]),
                Block::List(vec![ListItem::plain_text("two")]),
            ]
        );
    }

    #[test]
    fn blank_separated_items_stay_in_one_list() {
        assert_eq!(
            parse("- one\n\n- two"),
            vec![Block::List(vec![
                ListItem::plain_text("one"),
                ListItem::plain_text("two"),
            ])]
        );
    }

    #[test]
    fn double_blank_line_ends_the_list() {
        assert_eq!(
            parse("- one\n\n\n- two"),
            vec![
                Block::List(vec![ListItem::plain_text("one")]),
                Block::List(vec![ListItem::plain_text("two")]),
            ]
        );
    }

    #[test]
    fn item_with_second_paragraph() {
        assert_eq!(
            parse("* hello\n\n  world"),
            vec![Block::List(vec![ListItem(vec![
                Block::plain_text_paragraph("hello"),
                Block::plain_text_paragraph("world"),
            ])])]
        );
    }

    #[test]
    fn lazy_continuation_joins_the_item_paragraph() {
        assert_eq!(
            parse("* hello\nworld"),
            vec![Block::List(vec![ListItem(vec![Block::paragraph(vec![
                Inline::Text("hello".into()),
                Inline::SoftBreak,
                Inline::Text("world".into()),
            ])])])]
        );
    }

    #[test]
    fn nested_lists_three_levels() {
        let input = "* A\n  - A.A\n    * A.A.A";
        assert_eq!(
            parse(input),
            vec![Block::List(vec![ListItem(vec![
                Block::plain_text_paragraph("A"),
                Block::List(vec![ListItem(vec![
                    Block::plain_text_paragraph("A.A"),
                    Block::List(vec![ListItem::plain_text("A.A.A")]),
                ])]),
            ])])]
        );
    }

    #[test]
    fn sibling_lists_of_differing_style_inside_an_item() {
        let input = "* A\n  - A.A\n  - A.B\n  * A.C";
        assert_eq!(
            parse(input),
            vec![Block::List(vec![ListItem(vec![
                Block::plain_text_paragraph("A"),
                Block::List(vec![
                    ListItem::plain_text("A.A"),
                    ListItem::plain_text("A.B"),
                ]),
                Block::List(vec![ListItem::plain_text("A.C")]),
            ])])]
        );
    }

    #[test]
    fn item_paragraph_between_nested_lists() {
        let input = "* A\n  - A.A\n\n    hello world\n\n    * deeper";
        assert_eq!(
            parse(input),
            vec![Block::List(vec![ListItem(vec![
                Block::plain_text_paragraph("A"),
                Block::List(vec![ListItem(vec![
                    Block::plain_text_paragraph("A.A"),
                    Block::plain_text_paragraph("hello world"),
                    Block::List(vec![ListItem::plain_text("deeper")]),
                ])]),
            ])])]
        );
    }

    #[test]
    fn fenced_code_inside_an_item() {
        assert_eq!(
            parse("- item\n\n  ```\n  code\n  ```"),
            vec![Block::List(vec![ListItem(vec![
                Block::plain_text_paragraph("item"),
                Block::CodeBlock {
                    info: Some("".into()),
                    code: "code\n".into(),
                },
            ])])]
        );
    }

    #[test]
    fn crlf_input_parses_like_lf() {
        assert_eq!(
            parse("# Title\r\n\r\nbody\r\n"),
            vec![
                Block::Heading(HeadingLevel::H1, Inlines::plain_text("Title")),
                Block::plain_text_paragraph("body"),
            ]
        );
    }
}
