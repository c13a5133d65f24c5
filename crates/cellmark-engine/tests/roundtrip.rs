//! Round-trip properties: `parse(render(ast)) == ast` for trees built from
//! the supported block and inline forms, with the ambiguous cases
//! (directly nested emphasis, adjacent same-style lists) exercised
//! explicitly.

use cellmark_engine::ast::{Block, HeadingLevel, Inline, Inlines, ListItem};
use cellmark_engine::{canonicalize, parse, render};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn assert_roundtrip(ast: Vec<Block>) {
    let text = render(&ast);
    assert_eq!(parse(&text), ast, "rendered text was:\n{text}");
}

#[test]
fn emphasis_forms_parse_as_specified() {
    assert_eq!(
        parse("*hello*"),
        vec![Block::paragraph(vec![Inline::emphasis(Inline::plain_text(
            "hello"
        ))])]
    );
    assert_eq!(
        parse("**hello**"),
        vec![Block::paragraph(vec![Inline::strong(Inline::plain_text(
            "hello"
        ))])]
    );
    assert_eq!(
        parse("_**hello**_"),
        vec![Block::paragraph(vec![Inline::emphasis(Inline::strong(
            Inline::plain_text("hello")
        ))])]
    );
}

#[rstest]
#[case::emphasis_only(Inline::emphasis(Inline::plain_text("x")))]
#[case::strong_only(Inline::strong(Inline::plain_text("x")))]
#[case::strong_in_emphasis(Inline::emphasis(Inline::strong(Inline::plain_text("x"))))]
#[case::emphasis_in_strong(Inline::strong(Inline::emphasis(Inline::plain_text("x"))))]
#[case::strong_in_emphasis_in_strong(Inline::strong(Inline::emphasis(Inline::strong(
    Inline::plain_text("x")
))))]
#[case::emphasis_in_strong_in_emphasis(Inline::emphasis(Inline::strong(Inline::emphasis(
    Inline::plain_text("x")
))))]
#[case::emphasis_in_emphasis(Inline::emphasis(Inline::emphasis(Inline::plain_text("x"))))]
#[case::strong_in_strong(Inline::strong(Inline::strong(Inline::plain_text("x"))))]
fn nested_emphasis_round_trips(#[case] inline: Inline) {
    assert_roundtrip(vec![Block::paragraph(vec![inline])]);
}

#[test]
fn emphasis_with_neighbours_round_trips() {
    assert_roundtrip(vec![Block::paragraph(vec![
        Inline::plain_text("before "),
        Inline::Emphasis(Inlines(vec![
            Inline::plain_text("a "),
            Inline::strong(Inline::plain_text("b")),
            Inline::plain_text(" c"),
        ])),
        Inline::plain_text(" after"),
    ])]);
}

#[test]
fn escaped_markup_characters_round_trip() {
    assert_roundtrip(vec![Block::paragraph(vec![Inline::plain_text(
        "literal *stars*, _underscores_, `ticks` and a back\\slash",
    )])]);
}

#[test]
fn marker_lookalike_paragraphs_round_trip() {
    assert_roundtrip(vec![Block::plain_text_paragraph("- not a list")]);
    assert_roundtrip(vec![Block::plain_text_paragraph("1. not a list")]);
    assert_roundtrip(vec![Block::plain_text_paragraph("> not a quote")]);
    assert_roundtrip(vec![Block::plain_text_paragraph("# not a heading")]);
    assert_roundtrip(vec![Block::plain_text_paragraph("---")]);
}

#[test]
fn eight_hash_paragraph_round_trips_verbatim() {
    let ast = parse("######## Not a heading");
    assert_eq!(
        ast,
        vec![Block::plain_text_paragraph("######## Not a heading")]
    );
    assert_roundtrip(ast);
}

#[rstest]
#[case::h1(HeadingLevel::H1)]
#[case::h4(HeadingLevel::H4)]
#[case::h6(HeadingLevel::H6)]
fn headings_round_trip(#[case] level: HeadingLevel) {
    assert_roundtrip(vec![Block::Heading(
        level,
        Inlines(vec![
            Inline::plain_text("Title with "),
            Inline::emphasis(Inline::plain_text("style")),
        ]),
    )]);
}

#[test]
fn soft_and_hard_breaks_round_trip() {
    assert_roundtrip(vec![Block::paragraph(vec![
        Inline::plain_text("one"),
        Inline::SoftBreak,
        Inline::plain_text("two"),
        Inline::HardBreak,
        Inline::plain_text("three"),
    ])]);
}

#[test]
fn code_spans_round_trip() {
    assert_roundtrip(vec![Block::paragraph(vec![
        Inline::plain_text("call "),
        Inline::code("f(x)"),
        Inline::plain_text(" or "),
        Inline::code("g`h"),
    ])]);
}

#[test]
fn fenced_code_round_trips_including_backtick_runs() {
    assert_roundtrip(vec![Block::CodeBlock {
        info: Some("rust".to_string()),
        code: "fn main() {\n    println!(\"```\");\n}\n".to_string(),
    }]);
}

#[test]
fn indented_code_round_trips() {
    assert_roundtrip(vec![Block::CodeBlock {
        info: None,
        code: "let x = 1;\n\nlet y = 2;\n".to_string(),
    }]);
}

#[test]
fn flat_list_round_trips() {
    assert_roundtrip(vec![Block::List(vec![
        ListItem::plain_text("one"),
        ListItem::plain_text("two"),
        ListItem::plain_text("three"),
    ])]);
}

#[test]
fn multi_block_item_round_trips() {
    assert_roundtrip(vec![Block::List(vec![
        ListItem(vec![
            Block::plain_text_paragraph("hello"),
            Block::plain_text_paragraph("world"),
        ]),
        ListItem::plain_text("tail"),
    ])]);
}

#[test]
fn adjacent_lists_round_trip_as_separate_lists() {
    assert_roundtrip(vec![
        Block::List(vec![ListItem::plain_text("a")]),
        Block::List(vec![ListItem::plain_text("b")]),
        Block::List(vec![ListItem::plain_text("c")]),
    ]);
}

#[test]
fn nested_lists_round_trip() {
    assert_roundtrip(vec![Block::List(vec![ListItem(vec![
        Block::plain_text_paragraph("A"),
        Block::List(vec![ListItem(vec![
            Block::plain_text_paragraph("A.A"),
            Block::plain_text_paragraph("middle paragraph"),
            Block::List(vec![ListItem::plain_text("A.A.A")]),
        ])]),
    ])])]);
}

#[test]
fn item_with_paragraph_after_nested_list_round_trips() {
    assert_roundtrip(vec![Block::List(vec![ListItem(vec![
        Block::plain_text_paragraph("first"),
        Block::List(vec![ListItem::plain_text("nested")]),
        Block::plain_text_paragraph("after the nested list"),
    ])])]);
}

#[test]
fn sibling_lists_inside_an_item_round_trip() {
    assert_roundtrip(vec![Block::List(vec![ListItem(vec![
        Block::plain_text_paragraph("A"),
        Block::List(vec![
            ListItem::plain_text("A.A"),
            ListItem::plain_text("A.B"),
        ]),
        Block::List(vec![ListItem::plain_text("A.C")]),
    ])])]);
}

#[test]
fn block_quotes_round_trip() {
    assert_roundtrip(vec![Block::BlockQuote(vec![
        Block::plain_text_paragraph("quoted"),
        Block::BlockQuote(vec![Block::plain_text_paragraph("deeper")]),
    ])]);
}

#[test]
fn fenced_code_inside_an_item_round_trips() {
    assert_roundtrip(vec![Block::List(vec![ListItem(vec![
        Block::plain_text_paragraph("item"),
        Block::CodeBlock {
            info: Some("".to_string()),
            code: "code\n".to_string(),
        },
    ])])]);
}

#[test]
fn whole_document_round_trips() {
    let ast = vec![
        Block::Heading(HeadingLevel::H1, Inlines::plain_text("Overview")),
        Block::paragraph(vec![
            Inline::plain_text("A paragraph with "),
            Inline::strong(Inline::plain_text("bold")),
            Inline::plain_text(" and "),
            Inline::code("code"),
            Inline::plain_text("."),
        ]),
        Block::ThematicBreak,
        Block::List(vec![
            ListItem::plain_text("first"),
            ListItem(vec![
                Block::plain_text_paragraph("second"),
                Block::List(vec![ListItem::plain_text("second.child")]),
            ]),
        ]),
        Block::CodeBlock {
            info: Some("python".to_string()),
            code: "print(1)\n".to_string(),
        },
        Block::BlockQuote(vec![Block::plain_text_paragraph("end quote")]),
    ];
    assert_roundtrip(ast);
}

#[test]
fn canonicalize_is_stable() {
    let once = canonicalize("* one\n* two\n\n\n# Title\n\ntext `code`  *em*");
    let twice = canonicalize(&once);
    assert_eq!(once, twice);
}
