pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceChar, FenceSig};
pub use heading::AtxHeading;
pub use list_marker::{ListMarker, ListStyle};
pub use thematic_break::ThematicBreakLine;
