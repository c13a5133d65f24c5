use crate::ast::{Inline, Inlines};

use super::code_span::CodeSpan;
use super::cursor::Cursor;
use super::emphasis::{self, Tok};

/// Parses one block's raw inline text into an inline sequence.
///
/// Code spans are resolved first and are opaque; emphasis pairing runs as
/// a second pass over the collected delimiter runs. Anything unresolvable
/// degrades to literal text, never an error.
pub fn parse_inlines(text: &str) -> Inlines {
    let mut toks = tokenize(text);
    emphasis::resolve(&mut toks);
    Inlines(emphasis::finish(toks))
}

fn tokenize(text: &str) -> Vec<Tok> {
    let mut cur = Cursor::new(text);
    let mut toks: Vec<Tok> = Vec::new();
    let mut literal = String::new();

    while let Some(b) = cur.peek() {
        match b {
            b'\\' => {
                cur.bump();
                match cur.peek() {
                    Some(b'\n') => {
                        cur.bump();
                        flush(&mut toks, &mut literal);
                        toks.push(Tok::Node(Inline::HardBreak));
                    }
                    Some(c) if c.is_ascii_punctuation() => {
                        cur.bump();
                        literal.push(c as char);
                    }
                    _ => literal.push('\\'),
                }
            }
            b'`' => {
                let start = cur.pos();
                match CodeSpan::scan(&mut cur) {
                    Some(content) => {
                        flush(&mut toks, &mut literal);
                        toks.push(Tok::Node(Inline::Code(content)));
                    }
                    None => literal.push_str(&text[start..cur.pos()]),
                }
            }
            b'\n' => {
                cur.bump();
                let trimmed = literal.trim_end_matches(' ').len();
                let hard = literal.len() - trimmed >= 2;
                literal.truncate(trimmed);
                flush(&mut toks, &mut literal);
                toks.push(Tok::Node(if hard {
                    Inline::HardBreak
                } else {
                    Inline::SoftBreak
                }));
            }
            b'*' | b'_' => {
                let start = cur.pos();
                let count = cur.take_run(b);
                let (can_open, can_close) = emphasis::flanking(text, start, cur.pos());
                flush(&mut toks, &mut literal);
                toks.push(Tok::Delim {
                    ch: b,
                    count,
                    can_open,
                    can_close,
                });
            }
            _ => {
                if let Some(c) = cur.bump_char() {
                    literal.push(c);
                }
            }
        }
    }

    flush(&mut toks, &mut literal);
    toks
}

fn flush(toks: &mut Vec<Tok>, literal: &mut String) {
    if !literal.is_empty() {
        toks.push(Tok::Node(Inline::Text(std::mem::take(literal))));
    }
}
