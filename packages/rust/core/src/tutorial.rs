//! The tutorial tree and the visitor protocol used to traverse it.
//!
//! A tutorial maps onto a directory of markdown files:
//!
//! ```text
//! benelux/
//!   01_history.md        Lesson
//!   03_belgium/          Course
//!     01_tintin.md       Lesson
//!     03_antwerp/        Course
//!       01_diamonds.md   Lesson
//! ```
//!
//! The directory handed to the loader becomes the unnamed [`TopCourse`].
//! Only lessons carry content. Courses exist to group them, and a course
//! with nothing in it is never built.
//!
//! Traversal strategies implement [`TutVisitor`]; `accept` dispatches to the
//! method matching the node's variant, and branch visitors recurse into
//! [`Tutorial::children`] themselves.

use mdtut_discovery::FilePath;

/// Double-dispatch target for walking a [`Tutorial`].
pub trait TutVisitor {
    fn visit_lesson(&mut self, lesson: &Lesson);
    fn visit_course(&mut self, course: &Course);
    fn visit_top_course(&mut self, top: &TopCourse);
}

// ---------------------------------------------------------------------------
// Tutorial
// ---------------------------------------------------------------------------

/// A node of the tutorial tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tutorial {
    Lesson(Lesson),
    Course(Course),
    TopCourse(TopCourse),
}

impl Tutorial {
    pub fn name(&self) -> String {
        match self {
            Self::Lesson(l) => l.name(),
            Self::Course(c) => c.name(),
            Self::TopCourse(t) => t.name(),
        }
    }

    pub fn path(&self) -> &FilePath {
        match self {
            Self::Lesson(l) => l.path(),
            Self::Course(c) => c.path(),
            Self::TopCourse(t) => t.path(),
        }
    }

    /// Full file text for a lesson; empty for branches.
    pub fn content(&self) -> &str {
        match self {
            Self::Lesson(l) => l.content(),
            Self::Course(_) | Self::TopCourse(_) => "",
        }
    }

    /// Children in document order.
    pub fn children(&self) -> &[Tutorial] {
        match self {
            Self::Lesson(_) => &[],
            Self::Course(c) => c.children(),
            Self::TopCourse(t) => t.children(),
        }
    }

    pub fn accept<V: TutVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Lesson(l) => l.accept(visitor),
            Self::Course(c) => c.accept(visitor),
            Self::TopCourse(t) => t.accept(visitor),
        }
    }

    /// Number of lessons in this subtree.
    pub fn lesson_count(&self) -> usize {
        match self {
            Self::Lesson(_) => 1,
            _ => self.children().iter().map(Tutorial::lesson_count).sum(),
        }
    }
}

impl From<Lesson> for Tutorial {
    fn from(l: Lesson) -> Self {
        Self::Lesson(l)
    }
}

impl From<Course> for Tutorial {
    fn from(c: Course) -> Self {
        Self::Course(c)
    }
}

impl From<TopCourse> for Tutorial {
    fn from(t: TopCourse) -> Self {
        Self::TopCourse(t)
    }
}

// ---------------------------------------------------------------------------
// Lesson
// ---------------------------------------------------------------------------

/// A file: a name, content, and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    path: FilePath,
    content: String,
}

impl Lesson {
    pub fn new(path: FilePath, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }

    pub fn name(&self) -> String {
        self.path.base()
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn accept<V: TutVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_lesson(self);
    }
}

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

/// A directory: a name, no content, and a non-empty ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    path: FilePath,
    children: Vec<Tutorial>,
}

impl Course {
    /// Returns `None` for an empty child list; empty courses are dropped.
    pub fn new(path: FilePath, children: Vec<Tutorial>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(Self { path, children })
    }

    pub fn name(&self) -> String {
        self.path.base()
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn children(&self) -> &[Tutorial] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Tutorial> {
        self.children
    }

    pub fn accept<V: TutVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_course(self);
    }
}

// ---------------------------------------------------------------------------
// TopCourse
// ---------------------------------------------------------------------------

/// The root of the tree. Never named, even when it carries the root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCourse {
    path: FilePath,
    children: Vec<Tutorial>,
}

impl TopCourse {
    pub fn new(path: FilePath, children: Vec<Tutorial>) -> Self {
        Self { path, children }
    }

    pub fn name(&self) -> String {
        String::new()
    }

    /// The root path; empty when assembled from several roots.
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn children(&self) -> &[Tutorial] {
        &self.children
    }

    pub fn accept<V: TutVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_top_course(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the variant and name of every node it is handed.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
    }

    impl TutVisitor for Recorder {
        fn visit_lesson(&mut self, lesson: &Lesson) {
            self.seen.push(format!("L:{}", lesson.name()));
        }

        fn visit_course(&mut self, course: &Course) {
            self.seen.push(format!("C:{}", course.name()));
            for child in course.children() {
                child.accept(self);
            }
        }

        fn visit_top_course(&mut self, top: &TopCourse) {
            self.seen.push(format!("T:{}", top.name()));
            for child in top.children() {
                child.accept(self);
            }
        }
    }

    fn lesson(path: &str) -> Tutorial {
        Lesson::new(FilePath::from(path), format!("content of {path}")).into()
    }

    #[test]
    fn empty_course_is_not_constructed() {
        assert!(Course::new(FilePath::from("empty"), vec![]).is_none());
        assert!(Course::new(FilePath::from("full"), vec![lesson("full/a.md")]).is_some());
    }

    #[test]
    fn names_and_content() {
        let l = Lesson::new(FilePath::from("docs/intro.md"), "# Intro");
        assert_eq!(l.name(), "intro.md");
        assert_eq!(l.content(), "# Intro");

        let c = Course::new(FilePath::from("docs/belgium"), vec![l.clone().into()]).unwrap();
        assert_eq!(Tutorial::from(c.clone()).content(), "");
        assert_eq!(c.name(), "belgium");

        let t = TopCourse::new(FilePath::from("docs"), vec![c.into()]);
        assert_eq!(t.name(), "");
        assert_eq!(t.path(), &FilePath::from("docs"));
    }

    #[test]
    fn lesson_has_no_children() {
        assert!(lesson("a.md").children().is_empty());
    }

    #[test]
    fn accept_dispatches_pre_order() {
        let belgium = Course::new(
            FilePath::from("b/belgium"),
            vec![lesson("b/belgium/beer.md"), lesson("b/belgium/tintin.md")],
        )
        .unwrap();
        let tree: Tutorial = TopCourse::new(
            FilePath::from("b"),
            vec![lesson("b/history.md"), belgium.into(), lesson("b/zeeland.md")],
        )
        .into();

        let mut rec = Recorder::default();
        tree.accept(&mut rec);
        assert_eq!(
            rec.seen,
            vec![
                "T:",
                "L:history.md",
                "C:belgium",
                "L:beer.md",
                "L:tintin.md",
                "L:zeeland.md"
            ]
        );
        assert_eq!(tree.lesson_count(), 4);
    }
}
