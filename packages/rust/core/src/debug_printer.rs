//! Indented text dump of a tutorial, for eyeballing what the loader built.

use mdtut_shared::sample_string;

use crate::tutorial::{Course, Lesson, TopCourse, TutVisitor};

/// Characters of lesson content shown per line.
const SAMPLE_LEN: usize = 60;

/// Columns added per course level.
const INDENT_STEP: usize = 3;

/// Prints one line per lesson and course.
///
/// ```text
/// 01_history.md --- # History of the Benelux...
/// 03_belgium
///    01_tintin.md --- # Tintin...
/// ```
#[derive(Debug, Default)]
pub struct DebugPrinter {
    indent: usize,
    out: String,
}

impl DebugPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(&" ".repeat(self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl TutVisitor for DebugPrinter {
    fn visit_lesson(&mut self, lesson: &Lesson) {
        let text = format!(
            "{} --- {}...",
            lesson.name(),
            sample_string(lesson.content(), SAMPLE_LEN)
        );
        self.line(&text);
    }

    fn visit_course(&mut self, course: &Course) {
        self.line(&course.name());
        self.indent += INDENT_STEP;
        for child in course.children() {
            child.accept(self);
        }
        self.indent -= INDENT_STEP;
    }

    fn visit_top_course(&mut self, top: &TopCourse) {
        for child in top.children() {
            child.accept(self);
        }
    }
}
