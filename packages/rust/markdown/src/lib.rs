//! Block extraction from markdown lessons.
//!
//! A lexer turns the text of one lesson into labeled blocks of code. The
//! tutorial core only depends on the [`Lexer`] trait; [`FenceLexer`] is the
//! implementation used by the CLI.

mod fence;

use std::collections::HashMap;

use mdtut_shared::{Block, Label};

pub use fence::FenceLexer;

/// Blocks found in one piece of content, grouped by label.
///
/// Each list is in document order. A block carrying several labels appears
/// in several lists.
pub type LabeledBlocks = HashMap<Label, Vec<Block>>;

/// Splits lesson content into labeled blocks.
pub trait Lexer {
    fn parse(&self, content: &str) -> LabeledBlocks;
}
