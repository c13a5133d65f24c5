use std::fmt;

/// One level of the conversion nesting context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// An open list.
    List,
    /// An open list item, carrying the 1-based position of the content
    /// block currently being emitted.
    Item { block_index: usize },
}

/// The nesting-context stack threaded through one conversion call.
///
/// Constructed at the top-level entry point and passed down every
/// recursive call: a frame is pushed before descending into a nested
/// construct and popped on every exit path, so nothing survives the call
/// — an errored conversion leaves no residue for the next one.
#[derive(Debug, Default)]
pub struct ConvertContext {
    frames: Vec<Frame>,
}

impl ConvertContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// How many lists are currently open.
    pub fn list_depth(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| matches!(f, Frame::List))
            .count()
    }

    /// The innermost item's current content-block position, if any.
    pub fn item_block_index(&self) -> Option<usize> {
        self.frames.iter().rev().find_map(|f| match f {
            Frame::Item { block_index } => Some(*block_index),
            Frame::List => None,
        })
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// The context path for diagnostics, e.g. `{"List", {"ListItem", 2}}`.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConvertContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return write!(f, "document root");
        }
        write!(f, "{{")?;
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match frame {
                Frame::List => write!(f, "\"List\"")?,
                Frame::Item { block_index } => {
                    write!(f, "{{\"ListItem\", {block_index}}}")?
                }
            }
        }
        write!(f, "}}")
    }
}
