//! End-to-end checks over a tutorial loaded from disk: every visitor sees
//! the lessons in the same pre-order.

use std::path::Path;

use mdtut_core::{ContentParser, DebugPrinter, NavPrinter, Program, Tutorial, load_one};
use mdtut_discovery::FilePath;
use mdtut_shared::Label;

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("mkdir");
    }
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let content = format!("# {name}\n\n<!-- @step -->\n```bash\necho {name}\n```\n");
    std::fs::write(path, content).expect("write");
}

/// The Benelux layout: lessons and nested courses, plus noise the filters drop.
fn benelux() -> (tempfile::TempDir, Tutorial) {
    let dir = tempfile::Builder::new()
        .prefix("benelux")
        .tempdir()
        .expect("tempdir");
    for rel in [
        "01_history.md",
        "02_economy.md",
        "03_belgium/01_tintin.md",
        "03_belgium/02_beer.md",
        "03_belgium/03_antwerp/01_diamonds.md",
        "03_belgium/03_antwerp/02_rubens.md",
        "03_belgium/04_brabant.md",
        "04_netherlands/01_drenthe.md",
        "README.md",
    ] {
        write(dir.path(), rel);
    }
    std::fs::create_dir_all(dir.path().join("05_luxembourg/empty")).expect("mkdir");
    std::fs::create_dir_all(dir.path().join(".git")).expect("mkdir");
    std::fs::write(dir.path().join(".git/config.md"), "x").expect("write");
    std::fs::write(dir.path().join("~01_history.md"), "x").expect("write");

    let tree = load_one(&FilePath::from(dir.path())).expect("load");
    (dir, tree)
}

const LESSONS: [&str; 9] = [
    "01_history.md",
    "02_economy.md",
    "01_tintin.md",
    "02_beer.md",
    "01_diamonds.md",
    "02_rubens.md",
    "04_brabant.md",
    "01_drenthe.md",
    "README.md",
];

#[test]
fn debug_printer_lists_lessons_in_pre_order() {
    let (_dir, tree) = benelux();
    let mut p = DebugPrinter::new();
    tree.accept(&mut p);
    let lessons: Vec<&str> = p
        .output()
        .lines()
        .filter_map(|l| l.split_once(" --- "))
        .map(|(name, _)| name.trim_start())
        .collect();
    assert_eq!(lessons, LESSONS);
    assert!(!p.output().contains("05_luxembourg"));
}

#[test]
fn nav_printer_lists_lessons_in_pre_order() {
    let (_dir, tree) = benelux();
    let mut p = NavPrinter::new();
    tree.accept(&mut p);
    let out = p.into_output();
    let lessons: Vec<&str> = out
        .lines()
        .filter(|l| l.contains("assureActive('L"))
        .filter_map(|l| l.split_once("\">"))
        .map(|(_, rest)| rest.trim_end_matches("</div>"))
        .collect();
    assert_eq!(lessons, LESSONS);
    for (i, _) in LESSONS.iter().enumerate() {
        assert!(out.contains(&format!("assureActive('L{i}')")));
    }
}

#[test]
fn content_parser_lists_lessons_in_pre_order() {
    let (_dir, tree) = benelux();
    let mut parser = ContentParser::new(Label::new("step"));
    tree.accept(&mut parser);
    let lessons: Vec<String> = parser.files().iter().map(|f| f.path.base()).collect();
    assert_eq!(lessons, LESSONS);
}

#[test]
fn program_runs_every_step() {
    let (_dir, tree) = benelux();
    let program = Program::from_tutorial(Label::new("step"), &tree);
    assert_eq!(program.block_count(), LESSONS.len());
    let script = program.render_normal();
    let first = script.find("echo 01_history.md").expect("history step");
    let last = script.find("echo README.md").expect("readme step");
    assert!(first < last);
}

#[test]
fn missing_label_yields_empty_program() {
    let (_dir, tree) = benelux();
    let program = Program::from_tutorial(Label::new("nope"), &tree);
    assert!(program.is_empty());
    assert_eq!(program.render_normal(), "");
}
