//! Integration tests for the file tree walker

mod common;

use std::ffi::OsStr;
use std::path::Path;

use common::write;
use repolens_core::domain::FileNode;
use repolens_core::infrastructure::fs::{count_lines, FileRead, SkipReason, SkippedPath};
use repolens_orchestrator::infrastructure::TreeWalker;

fn walker() -> TreeWalker {
    TreeWalker::new(64)
}

#[test]
fn test_tree_is_sorted_and_counts_lines() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.txt", "one\ntwo\n");
    write(dir.path(), "a.txt", "only line without newline");
    write(dir.path(), "empty.txt", "");
    write(dir.path(), "src/main.py", "print('hi')\n");
    write(dir.path(), "lib/util.py", "x = 1\ny = 2\nz = 3\n");

    let walk = walker().walk(dir.path()).unwrap();

    let root_name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(
        walk.root,
        FileNode::folder(
            root_name,
            vec![
                FileNode::folder("lib", vec![FileNode::file("util.py", 3)]),
                FileNode::folder("src", vec![FileNode::file("main.py", 1)]),
                FileNode::file("a.txt", 1),
                FileNode::file("b.txt", 2),
                FileNode::file("empty.txt", 0),
            ],
        )
    );
    assert!(walk.skipped.is_empty());
}

#[test]
fn test_hidden_entries_and_pycache_are_left_out() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), ".env", "SECRET=1\n");
    write(dir.path(), ".git/HEAD", "ref: refs/heads/main\n");
    write(dir.path(), "__pycache__/mod.pyc", "x");
    write(dir.path(), "app.py", "x\n");

    let walk = walker().walk(dir.path()).unwrap();

    let names: Vec<&str> = walk.root.children().iter().map(FileNode::name).collect();
    assert_eq!(names, vec!["app.py"]);
}

#[test]
fn test_binary_file_has_zero_loc() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "logo.png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\n\n\n");

    let walk = walker().walk(dir.path()).unwrap();

    assert_eq!(walk.root.children()[0].loc(), Some(0));
    assert_eq!(walk.skipped[0].path, "logo.png");
    assert_eq!(walk.skipped[0].reason, SkipReason::Binary);
}

#[test]
fn test_empty_directory_is_a_folder_with_no_children() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("empty")).unwrap();

    let walk = walker().walk(dir.path()).unwrap();

    assert_eq!(walk.root.children(), &[FileNode::folder("empty", vec![])]);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_zero_loc_files_and_not_followed() {
    let outside = tempfile::tempdir().unwrap();
    write(outside.path(), "secret/keys.txt", "a\nb\nc\n");

    let dir = tempfile::tempdir().unwrap();
    std::os::unix::fs::symlink(outside.path().join("secret"), dir.path().join("escape")).unwrap();
    std::os::unix::fs::symlink(
        outside.path().join("secret/keys.txt"),
        dir.path().join("keys.txt"),
    )
    .unwrap();

    let walk = walker().walk(dir.path()).unwrap();

    assert_eq!(
        walk.root.children(),
        &[FileNode::file("escape", 0), FileNode::file("keys.txt", 0)]
    );
    assert!(walk
        .skipped
        .iter()
        .all(|s| s.reason == SkipReason::Symlink));
    assert_eq!(walk.root.total_loc(), 0);
}

/// Line counter that cannot read any file named `locked.txt`
fn locked_file_denied(path: &Path) -> FileRead<u64> {
    if path.file_name() == Some(OsStr::new("locked.txt")) {
        FileRead::Skipped(SkipReason::PermissionDenied)
    } else {
        count_lines(path)
    }
}

#[test]
fn test_unreadable_file_is_listed_with_zero_loc() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "locked.txt", "a\nb\n");
    write(dir.path(), "open.txt", "a\nb\n");

    let walk = walker()
        .with_line_counter(locked_file_denied)
        .walk(dir.path())
        .unwrap();

    assert_eq!(
        walk.root.children(),
        &[FileNode::file("locked.txt", 0), FileNode::file("open.txt", 2)]
    );
    assert_eq!(
        walk.skipped,
        vec![SkippedPath::new("locked.txt", SkipReason::PermissionDenied)]
    );
}

#[test]
fn test_large_tree_with_one_unreadable_file_completes() {
    let dir = tempfile::tempdir().unwrap();
    for d in 0..100 {
        for f in 0..100 {
            let name = if d == 42 && f == 0 {
                "locked.txt".to_string()
            } else {
                format!("file_{f:03}.txt")
            };
            write(dir.path(), &format!("dir_{d:03}/{name}"), "a\nb\n");
        }
    }

    let walk = walker()
        .with_line_counter(locked_file_denied)
        .walk(dir.path())
        .unwrap();

    assert_eq!(walk.root.file_count(), 10_000);
    assert_eq!(walk.root.total_loc(), 9_999 * 2);
    let locked = walk
        .root
        .iter()
        .find(|node| node.name() == "locked.txt")
        .unwrap();
    assert_eq!(locked.loc(), Some(0));
    assert_eq!(
        walk.skipped,
        vec![SkippedPath::new("dir_042/locked.txt", SkipReason::PermissionDenied)]
    );
}

#[cfg(unix)]
#[test]
fn test_unlistable_subdirectory_is_omitted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "private/notes.txt", "x\n");
    write(dir.path(), "public.txt", "x\n");
    let private = dir.path().join("private");
    std::fs::set_permissions(&private, std::fs::Permissions::from_mode(0o000)).unwrap();
    // privileged users list the directory regardless of its mode
    let enforced = std::fs::read_dir(&private).is_err();

    let walk = walker().walk(dir.path()).unwrap();
    std::fs::set_permissions(&private, std::fs::Permissions::from_mode(0o755)).unwrap();

    let names: Vec<&str> = walk.root.children().iter().map(FileNode::name).collect();
    if enforced {
        assert_eq!(names, vec!["public.txt"]);
        assert_eq!(walk.skipped[0].path, "private");
        assert_eq!(walk.skipped[0].reason, SkipReason::PermissionDenied);
    } else {
        assert_eq!(names, vec!["private", "public.txt"]);
        assert!(walk.skipped.is_empty());
    }
}
