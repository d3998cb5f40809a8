//! Tutorial trees and the traversals run over them.
//!
//! This crate ties together discovery and block lexing: [`loader`] builds a
//! [`Tutorial`] from disk, and the visitors render it ([`DebugPrinter`],
//! [`NavPrinter`]) or extract its blocks ([`ContentParser`], [`Program`]).

pub mod debug_printer;
pub mod loader;
pub mod nav_printer;
pub mod parser;
pub mod program;
pub mod tutorial;

pub use debug_printer::DebugPrinter;
pub use loader::{load_many, load_one};
pub use nav_printer::NavPrinter;
pub use parser::{ContentParser, ParsedFile};
pub use program::Program;
pub use tutorial::{Course, Lesson, TopCourse, TutVisitor, Tutorial};
