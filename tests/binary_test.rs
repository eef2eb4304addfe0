#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const DEPENDENCY_FILE: &str = r#"
{
  "class_graph": {
    "nodes": [{"name": "Foo"}, {"name": "Bar"}],
    "edges": [{"begin": "Foo", "end": "Bar"}]
  },
  "package_graph": {
    "nodes": [
      {"name": "org.chromium.base"},
      {"name": "org.chromium.chrome"},
      {"name": "org.chromium.components"},
      {"name": "org.chromium.content"}
    ],
    "edges": [
      {"begin": "org.chromium.chrome", "end": "org.chromium.base"},
      {"begin": "org.chromium.base", "end": "org.chromium.chrome"},
      {"begin": "org.chromium.chrome", "end": "org.chromium.components"},
      {"begin": "org.chromium.components", "end": "org.chromium.content"},
      {"begin": "org.chromium.content", "end": "org.chromium.chrome"}
    ]
  }
}
"#;

fn write_graph(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("deps.json");
    std::fs::write(&path, DEPENDENCY_FILE).unwrap();
    path
}

fn depcycles(file: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_depcycles"))
        .arg("--file")
        .arg(file)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_prints_summary_and_writes_listing() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_graph(&temp_dir);
    let listing = temp_dir.path().join("cycles.txt");

    let output = depcycles(
        &path,
        &["--cycle-length", "3", "--output", listing.to_str().unwrap()],
    );
    assert!(output.status.success(), "{output:?}");

    let summary = stdout(&output);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Found cycles in "));
    assert_eq!(
        &lines[1..],
        [
            "Found 1 cycles of length 2.",
            "Found 1 cycles of length 3.",
            "Found 2 cycles in total.",
        ]
    );

    assert_eq!(
        std::fs::read_to_string(&listing).unwrap(),
        "Cycles of length 2:\n\
         org.chromium.base > org.chromium.chrome\n\
         Cycles of length 3:\n\
         org.chromium.chrome > org.chromium.components > org.chromium.content\n"
    );
}

#[test]
fn test_graph_flag_selects_class_graph() {
    let temp_dir = TempDir::new().unwrap();
    let output = depcycles(&write_graph(&temp_dir), &["--graph", "class", "--cycle-length", "2"]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).ends_with("Found 0 cycles in total.\n"));
}

#[test]
fn test_huge_cycle_length_finishes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_graph(&temp_dir);

    for length in [(1usize << 40).to_string(), usize::MAX.to_string()] {
        let output = depcycles(&path, &["--cycle-length", &length]);
        assert!(output.status.success(), "{output:?}");

        let summary = stdout(&output);
        assert_eq!(summary.lines().count(), 5);
        assert!(summary.contains("Found 0 cycles of length 4."));
        assert!(summary.ends_with("Found 2 cycles in total.\n"));
        assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    }
}

#[test]
fn test_cycle_length_below_two_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = depcycles(&write_graph(&temp_dir), &["--cycle-length", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 2"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = depcycles(&temp_dir.path().join("nope.json"), &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_log_dir_records_run() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("history");
    let output = depcycles(
        &write_graph(&temp_dir),
        &["--cycle-length", "3", "--log-dir", log_dir.to_str().unwrap()],
    );
    assert!(output.status.success(), "{output:?}");

    let records = depcycles::log::JsonlLogger::new(&log_dir)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].counts_by_length, vec![0, 0, 1, 1]);
    assert_eq!(records[0].total_cycles, 2);
}
