//! HTML left-navigation fragment for a tutorial.
//!
//! The page script wires its handlers to the ids emitted here:
//! `toggle('n<k>')` opens or closes a course body and
//! `assureActive('L<i>')` selects a lesson. The markup therefore has to stay
//! exactly as written below.
//!
//! Every node renders as
//!
//! ```text
//! <div class='lnav1' data-name="NAME">
//!   HANDLE
//!   <div id='nK' style='display: STATE;'>
//!     ...children...
//!   </div>
//! </div>
//! ```
//!
//! Ids `nK` are handed out from 1 in visit order. Nodes with children get a
//! `toggle` handle; nodes without children get an `assureActive` handle
//! carrying the next lesson index. Only the outermost body starts open.

use crate::tutorial::{Course, Lesson, TopCourse, Tutorial, TutVisitor};

/// Spaces per nesting level.
const INDENT: &str = "  ";

/// Renders the left nav of a tutorial.
#[derive(Debug, Default)]
pub struct NavPrinter {
    out: String,
    level: usize,
    /// Last container id handed out.
    last_id: usize,
    /// Index the next lesson handle will carry.
    next_lesson: usize,
}

impl NavPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn line(&mut self, level: usize, text: &str) {
        self.out.push_str(&INDENT.repeat(level));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn render(&mut self, name: &str, children: &[Tutorial]) {
        self.last_id += 1;
        let id = self.last_id;
        let level = self.level;
        let name = display_name(name);
        let state = if level == 0 { "block" } else { "none" };

        self.line(level, &format!("<div class='lnav1' data-name=\"{name}\">"));
        let handle = if children.is_empty() {
            let index = self.next_lesson;
            self.next_lesson += 1;
            format!("<div onclick=\"assureActive('L{index}')\">{name}</div>")
        } else {
            format!("<div onclick=\"toggle('n{id}')\">{name}</div>")
        };
        self.line(level + 1, &handle);
        self.line(
            level + 1,
            &format!("<div id='n{id}' style='display: {state};'>"),
        );

        self.level += 2;
        for child in children {
            child.accept(self);
        }
        self.level -= 2;

        self.line(level + 1, "</div>");
        self.line(level, "</div>");
    }
}

impl TutVisitor for NavPrinter {
    fn visit_lesson(&mut self, lesson: &Lesson) {
        self.render(&lesson.name(), &[]);
    }

    fn visit_course(&mut self, course: &Course) {
        self.render(&course.name(), course.children());
    }

    fn visit_top_course(&mut self, top: &TopCourse) {
        self.render(&top.name(), top.children());
    }
}

/// Escaped name, with `.` standing in for an empty one.
fn display_name(name: &str) -> String {
    if name.is_empty() {
        return ".".to_string();
    }
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
