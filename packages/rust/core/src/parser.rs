//! Extracts labeled blocks from every lesson of a tutorial.

use serde::Serialize;
use tracing::trace;

use mdtut_discovery::FilePath;
use mdtut_markdown::{FenceLexer, Lexer};
use mdtut_shared::{Block, Label};

use crate::tutorial::{Course, Lesson, TopCourse, TutVisitor};

/// The blocks one lesson contributed under the selected label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFile {
    pub path: FilePath,
    pub blocks: Vec<Block>,
}

impl ParsedFile {
    pub fn new(path: FilePath, blocks: Vec<Block>) -> Self {
        Self { path, blocks }
    }
}

/// Runs each lesson through a [`Lexer`] and keeps the blocks under one label.
///
/// Lessons with nothing under the label contribute nothing.
#[derive(Debug)]
pub struct ContentParser<L = FenceLexer> {
    label: Label,
    lexer: L,
    files: Vec<ParsedFile>,
}

impl ContentParser<FenceLexer> {
    pub fn new(label: Label) -> Self {
        Self::with_lexer(label, FenceLexer::new())
    }
}

impl<L: Lexer> ContentParser<L> {
    pub fn with_lexer(label: Label, lexer: L) -> Self {
        Self {
            label,
            lexer,
            files: Vec::new(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Parsed files in document order.
    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<ParsedFile> {
        self.files
    }
}

impl<L: Lexer> TutVisitor for ContentParser<L> {
    fn visit_lesson(&mut self, lesson: &Lesson) {
        // Everything not filed under our label is dropped.
        let blocks = self
            .lexer
            .parse(lesson.content())
            .remove(&self.label)
            .unwrap_or_default();
        if blocks.is_empty() {
            return;
        }
        trace!(path = %lesson.path(), blocks = blocks.len(), "lesson contributed blocks");
        self.files.push(ParsedFile::new(lesson.path().clone(), blocks));
    }

    fn visit_course(&mut self, course: &Course) {
        for child in course.children() {
            child.accept(self);
        }
    }

    fn visit_top_course(&mut self, top: &TopCourse) {
        for child in top.children() {
            child.accept(self);
        }
    }
}
