use crate::ast::{Inline, Inlines};

/// A tokenized inline: either a finished node or an unresolved emphasis
/// delimiter run.
#[derive(Debug, Clone)]
pub(crate) enum Tok {
    Node(Inline),
    Delim {
        ch: u8,
        count: usize,
        can_open: bool,
        can_close: bool,
    },
}

/// Computes `(can_open, can_close)` for a delimiter run spanning
/// `start..end` of `text`.
///
/// A run can open when it does not precede whitespace, and — when it
/// precedes punctuation — only from a whitespace or punctuation position.
/// Closing is the mirror image. This keeps `a * b * c` literal and keeps
/// the opening `**` of `**_**x**_**` from closing against the `_`.
pub(crate) fn flanking(text: &str, start: usize, end: usize) -> (bool, bool) {
    let prev = text[..start].chars().next_back();
    let next = text[end..].chars().next();
    let prev_ws = prev.is_none_or(char::is_whitespace);
    let next_ws = next.is_none_or(char::is_whitespace);
    let prev_punct = prev.is_some_and(|c| c.is_ascii_punctuation());
    let next_punct = next.is_some_and(|c| c.is_ascii_punctuation());

    let can_open = !next_ws && (!next_punct || prev_ws || prev_punct);
    let can_close = !prev_ws && (!prev_punct || next_ws || next_punct);
    (can_open, can_close)
}

/// Pairs delimiter runs into `Strong`/`Emphasis` nodes.
///
/// Closers are taken left to right; each one pairs with the nearest
/// preceding opener of the same character. Both runs donate two markers
/// when they can (strong), otherwise one (emphasis), and leftover markers
/// stay on the run for further pairing. Anything still unpaired at the end
/// degrades to literal text in [`finish`].
pub(crate) fn resolve(toks: &mut Vec<Tok>) {
    while let Some((o, c)) = find_pair(toks) {
        let take = match (&toks[o], &toks[c]) {
            (Tok::Delim { count: oc, .. }, Tok::Delim { count: cc, .. })
                if *oc >= 2 && *cc >= 2 =>
            {
                2
            }
            _ => 1,
        };

        let children = merge_text(toks.drain(o + 1..c).map(into_inline).collect());
        let node = if take == 2 {
            Inline::Strong(Inlines(children))
        } else {
            Inline::Emphasis(Inlines(children))
        };

        // After the drain the closer sits right after the opener; the new
        // node goes between them and spent runs disappear.
        toks.insert(o + 1, Tok::Node(node));
        if shrink(&mut toks[o + 2], take) {
            toks.remove(o + 2);
        }
        if shrink(&mut toks[o], take) {
            toks.remove(o);
        }
    }
}

/// Converts the resolved token stream into the final inline sequence.
pub(crate) fn finish(toks: Vec<Tok>) -> Vec<Inline> {
    merge_text(toks.into_iter().map(into_inline).collect())
}

/// Leftmost closer with a matching opener before it.
fn find_pair(toks: &[Tok]) -> Option<(usize, usize)> {
    for c in 0..toks.len() {
        let Tok::Delim {
            ch, can_close: true, ..
        } = toks[c]
        else {
            continue;
        };
        for o in (0..c).rev() {
            if let Tok::Delim {
                ch: och,
                can_open: true,
                ..
            } = toks[o]
                && och == ch
            {
                return Some((o, c));
            }
        }
    }
    None
}

/// Removes `take` markers from a delimiter run; true when spent.
fn shrink(tok: &mut Tok, take: usize) -> bool {
    match tok {
        Tok::Delim { count, .. } => {
            *count -= take;
            *count == 0
        }
        Tok::Node(_) => false,
    }
}

fn into_inline(tok: Tok) -> Inline {
    match tok {
        Tok::Node(inline) => inline,
        Tok::Delim { ch, count, .. } => {
            Inline::Text(std::iter::repeat(ch as char).take(count).collect())
        }
    }
}

/// Joins adjacent text nodes and drops empty ones.
pub(crate) fn merge_text(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) if t.is_empty() => {}
            Inline::Text(t) => {
                if let Some(Inline::Text(prev)) = out.last_mut() {
                    prev.push_str(&t);
                } else {
                    out.push(Inline::Text(t));
                }
            }
            other => out.push(other),
        }
    }
    out
}
