//! Builds a [`Tutorial`] from files and directories on disk.
//!
//! Candidates are filtered with the desirability predicates; a directory
//! whose filtered contents come up empty is pruned rather than turned into
//! an empty course. A read or listing failure aborts the whole build.

use tracing::{debug, instrument};

use mdtut_discovery::{FilePath, is_desirable_dir, is_desirable_file};
use mdtut_shared::{MdtutError, Result};

use crate::tutorial::{Course, Lesson, TopCourse, Tutorial};

/// Load a tutorial from one root, a lesson file or a course directory.
///
/// A directory becomes an unnamed [`TopCourse`] that keeps `root` as its
/// path.
#[instrument(skip_all, fields(root = %root))]
pub fn load_one(root: &FilePath) -> Result<Tutorial> {
    if is_desirable_file(root) {
        return scan_file(root).map(Tutorial::from);
    }
    if is_desirable_dir(root) {
        if let Some(course) = scan_dir(root)? {
            let top = TopCourse::new(root.clone(), course.into_children());
            debug!(children = top.children().len(), "loaded course directory");
            return Ok(top.into());
        }
    }
    Err(MdtutError::no_input(format!("cannot process {root}")))
}

/// Load a tutorial from any number of roots.
///
/// With more than one root, each contributes a lesson or a course to a
/// [`TopCourse`] with an empty path, in argument order.
#[instrument(skip_all, fields(roots = paths.len()))]
pub fn load_many(paths: &[FilePath]) -> Result<Tutorial> {
    match paths {
        [] => Err(MdtutError::no_input("no paths supplied")),
        [root] => load_one(root),
        _ => {
            let mut items = Vec::new();
            for path in paths {
                if let Some(item) = scan(path)? {
                    items.push(item);
                }
            }
            if items.is_empty() {
                return Err(MdtutError::no_input("nothing useful found"));
            }
            debug!(children = items.len(), "loaded multiple roots");
            Ok(TopCourse::new(FilePath::default(), items).into())
        }
    }
}

/// Scan one candidate: a lesson, a course, or nothing.
fn scan(path: &FilePath) -> Result<Option<Tutorial>> {
    if is_desirable_file(path) {
        return scan_file(path).map(|l| Some(l.into()));
    }
    if is_desirable_dir(path) {
        return Ok(scan_dir(path)?.map(Tutorial::from));
    }
    Ok(None)
}

fn scan_file(path: &FilePath) -> Result<Lesson> {
    let content = path.read()?;
    Ok(Lesson::new(path.clone(), content))
}

/// `Ok(None)` when nothing under `dir` survived filtering.
fn scan_dir(dir: &FilePath) -> Result<Option<Course>> {
    let mut items = Vec::new();
    for name in dir.read_dir()? {
        if let Some(item) = scan(&dir.join(name))? {
            items.push(item);
        }
    }
    if items.is_empty() {
        debug!(%dir, "pruned empty directory");
    }
    Ok(Course::new(dir.clone(), items))
}
