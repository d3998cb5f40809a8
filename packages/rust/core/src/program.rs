//! A runnable sequence of blocks pulled out of a tutorial.
//!
//! The program renders as a shell script. In preambled form the first N
//! blocks run in the caller's shell and the remainder inside a `( ... )`
//! subshell, so an `exit` in a later block can't take the caller down.

use serde::Serialize;
use tracing::{debug, instrument};

use mdtut_markdown::{FenceLexer, Lexer};
use mdtut_shared::{Block, Label, MdtutError, Result};

use crate::parser::{ContentParser, ParsedFile};
use crate::tutorial::Tutorial;

/// Blocks selected by one label, grouped by the file they came from.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    label: Label,
    files: Vec<ParsedFile>,
}

impl Program {
    pub fn new(label: Label, files: Vec<ParsedFile>) -> Self {
        Self { label, files }
    }

    /// Extract the program for `label` with the default lexer.
    pub fn from_tutorial(label: Label, tutorial: &Tutorial) -> Self {
        Self::from_tutorial_with(label, tutorial, FenceLexer::new())
    }

    #[instrument(skip_all, fields(label = %label))]
    pub fn from_tutorial_with<L: Lexer>(label: Label, tutorial: &Tutorial, lexer: L) -> Self {
        let mut parser = ContentParser::with_lexer(label, lexer);
        tutorial.accept(&mut parser);
        let label = parser.label().clone();
        let files = parser.into_files();
        debug!(files = files.len(), "extracted program");
        Self { label, files }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    pub fn block_count(&self) -> usize {
        self.files.iter().map(|f| f.blocks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }

    /// Every block in order, as one script.
    pub fn render_normal(&self) -> String {
        self.render_preambled(0)
    }

    /// The first `preamble` blocks as-is, the rest inside a subshell.
    ///
    /// A preamble of 0, or one covering every block, emits no subshell.
    pub fn render_preambled(&self, preamble: usize) -> String {
        let mut out = String::new();
        let mut index = 0;
        let mut in_subshell = false;

        for file in &self.files {
            for (i, block) in file.blocks.iter().enumerate() {
                if preamble > 0 && index == preamble {
                    out.push_str("(\n");
                    in_subshell = true;
                }
                if i == 0 {
                    out.push_str(&format!("# ---- {}\n", file.path));
                }
                index += 1;
                write_block(&mut out, index, block);
            }
        }

        if in_subshell {
            out.push_str(")\n");
        }
        out
    }

    /// The program as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MdtutError::Serialize(e.to_string()))
    }
}

fn write_block(out: &mut String, index: usize, block: &Block) {
    let labels: Vec<String> = block.user_labels().map(Label::to_string).collect();
    if labels.is_empty() {
        out.push_str(&format!("# {index}\n"));
    } else {
        out.push_str(&format!("# {index} {}\n", labels.join(" ")));
    }
    out.push_str(&block.code);
    if !block.code.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
}
