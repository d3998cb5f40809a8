//! Filesystem source and desirability filters.
//!
//! Before a directory becomes part of a tutorial, every candidate entry is
//! run through the filters in [`filter`]. Hidden directories, editor backup
//! files and anything that isn't markdown never make it into the tree.

pub mod filter;
mod source;

pub use filter::{is_desirable_dir, is_desirable_file};
pub use source::FilePath;
