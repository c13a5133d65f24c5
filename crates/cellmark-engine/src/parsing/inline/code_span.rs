use super::cursor::Cursor;

/// Backtick code span knowledge.
///
/// Code spans are raw zones: their content is never re-scanned for
/// emphasis markers, and only a backtick run of exactly the opening length
/// closes one.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Scans a code span with the cursor sitting on the opening backtick.
    ///
    /// On success the cursor ends past the closing run and the normalized
    /// content is returned. When no equal-length closing run exists, the
    /// cursor ends just past the opening run (which then stays literal)
    /// and `None` is returned.
    pub fn scan(cur: &mut Cursor<'_>) -> Option<String> {
        let open = cur.take_run(Self::TICK);
        let saved = cur.clone();
        let start = cur.pos();

        while !cur.eof() {
            if cur.peek() == Some(Self::TICK) {
                let run_start = cur.pos();
                if cur.take_run(Self::TICK) == open {
                    return Some(Self::normalize(&cur.s[start..run_start]));
                }
            } else {
                cur.bump();
            }
        }

        *cur = saved;
        None
    }

    /// Interior line endings become spaces; one space is stripped from both
    /// ends when both are present and the content is not all spaces (so
    /// content that starts or ends with a backtick survives a round trip).
    fn normalize(content: &str) -> String {
        let content = content.replace('\n', " ");
        let bytes = content.as_bytes();
        let padded = bytes.len() >= 2 && bytes[0] == b' ' && bytes[bytes.len() - 1] == b' ';
        if padded && bytes.iter().any(|&b| b != b' ') {
            content[1..content.len() - 1].to_string()
        } else {
            content
        }
    }
}
