//! Lexer for labeled fenced code blocks.
//!
//! A block is extracted when the fence is preceded by a label comment:
//!
//! ~~~text
//! <!-- @setup @test -->
//! ```bash
//! export FOO=1
//! ```
//! ~~~
//!
//! Blank lines may sit between the comment and the fence; any other line
//! drops the pending labels. Unlabeled fences are skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use mdtut_shared::{Block, Label};

use crate::{LabeledBlocks, Lexer};

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// Matches `<!-- @label1 @label2 -->` on a line of its own.
static LABEL_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<!--\s*((?:@[A-Za-z0-9_-]+\s*)+)-->\s*$").expect("label comment regex")
});

/// Matches a single `@label` token.
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_-]+)").expect("label regex"));

/// Matches an opening fence and captures the fence run and the info string.
static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})(.*)$").expect("fence regex"));

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

/// The default [`Lexer`]: labeled fenced code blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceLexer;

impl FenceLexer {
    pub fn new() -> Self {
        Self
    }
}

/// An open fence being accumulated.
struct OpenFence {
    fence_char: char,
    fence_len: usize,
    labels: Vec<Label>,
    language: Option<String>,
    code: String,
}

impl OpenFence {
    fn is_closed_by(&self, line: &str) -> bool {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return false;
        }
        let run = line.trim();
        run.len() >= self.fence_len && run.chars().all(|c| c == self.fence_char)
    }

    fn finish(self) -> Option<Block> {
        if self.labels.is_empty() {
            return None;
        }
        let mut labels = self.labels;
        labels.push(Label::any());
        Some(Block::new(labels, self.language, self.code))
    }
}

impl Lexer for FenceLexer {
    fn parse(&self, content: &str) -> LabeledBlocks {
        let mut blocks = Vec::new();
        let mut pending: Vec<Label> = Vec::new();
        let mut open: Option<OpenFence> = None;

        for line in content.lines() {
            if let Some(fence) = open.as_mut() {
                if fence.is_closed_by(line) {
                    if let Some(block) = open.take().and_then(OpenFence::finish) {
                        blocks.push(block);
                    }
                } else {
                    fence.code.push_str(line);
                    fence.code.push('\n');
                }
                continue;
            }

            if let Some(caps) = LABEL_COMMENT_RE.captures(line) {
                pending = parse_labels(&caps[1]);
                trace!(labels = pending.len(), "label comment");
                continue;
            }

            if let Some(caps) = FENCE_OPEN_RE.captures(line) {
                let run = &caps[1];
                let info = caps[2].trim();
                // Backtick fences can't carry backticks in their info string.
                if !(run.starts_with('`') && info.contains('`')) {
                    open = Some(OpenFence {
                        fence_char: run.chars().next().unwrap_or('`'),
                        fence_len: run.len(),
                        labels: std::mem::take(&mut pending),
                        language: info.split_whitespace().next().map(str::to_string),
                        code: String::new(),
                    });
                    continue;
                }
            }

            if !line.trim().is_empty() {
                pending.clear();
            }
        }

        // An unterminated fence runs to the end of the input.
        if let Some(block) = open.and_then(OpenFence::finish) {
            blocks.push(block);
        }

        debug!(blocks = blocks.len(), "lexed content");
        group_by_label(blocks)
    }
}

/// Labels in first-seen order, without duplicates.
fn parse_labels(text: &str) -> Vec<Label> {
    let mut labels: Vec<Label> = Vec::new();
    for caps in LABEL_RE.captures_iter(text) {
        let label = Label::new(&caps[1]);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn group_by_label(blocks: Vec<Block>) -> LabeledBlocks {
    let mut grouped = LabeledBlocks::new();
    for block in blocks {
        for label in &block.labels {
            grouped
                .entry(label.clone())
                .or_default()
                .push(block.clone());
        }
    }
    grouped
}
