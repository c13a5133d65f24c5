/// The character a fence is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceChar {
    Backtick,
    Tilde,
}

impl FenceChar {
    pub fn as_char(self) -> char {
        match self {
            FenceChar::Backtick => '`',
            FenceChar::Tilde => '~',
        }
    }
}

/// An opening fence signature: character, run length, and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub ch: FenceChar,
    pub len: usize,
    pub info: String,
}

/// Fenced code block knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Detects a fence opener, capturing the remainder as the info string.
    ///
    /// Backtick fences reject info strings containing a backtick (the line
    /// is then an inline code-span candidate, not a fence).
    pub fn sig(line: &str) -> Option<FenceSig> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return None;
        }

        let ch = match trimmed.chars().next()? {
            '`' => FenceChar::Backtick,
            '~' => FenceChar::Tilde,
            _ => return None,
        };
        let len = trimmed
            .chars()
            .take_while(|&c| c == ch.as_char())
            .count();
        if len < Self::MIN_LEN {
            return None;
        }

        let info = trimmed[len..].trim();
        if ch == FenceChar::Backtick && info.contains('`') {
            return None;
        }

        Some(FenceSig {
            ch,
            len,
            info: info.to_string(),
        })
    }

    /// True if `line` closes a block opened with `open`: same character, run
    /// at least as long, and nothing else on the line.
    pub fn closes(open: &FenceSig, line: &str) -> bool {
        let trimmed = line.trim();
        let len = trimmed
            .chars()
            .take_while(|&c| c == open.ch.as_char())
            .count();
        len >= open.len && trimmed[len..].is_empty()
    }
}
