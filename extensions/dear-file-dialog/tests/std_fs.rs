mod common;

use std::fs;

use common::{Input, ScriptedSurface, unique_temp_dir};
use dear_file_dialog::{
    DialogMode, DialogSession, FileDialogError, FileSystem, RefreshOutcome, SavePolicy, SortState,
    StdFileSystem, read_snapshot, render_dialog,
};

#[test]
fn std_fs_lists_directories_and_files() {
    let root = unique_temp_dir("list");
    fs::create_dir_all(root.join("reports")).unwrap();
    fs::write(root.join("notes.txt"), vec![b'x'; 120]).unwrap();

    let entries = StdFileSystem.read_dir(&root).unwrap();
    assert_eq!(entries.len(), 2);
    let notes = entries.iter().find(|e| e.name == "notes.txt").unwrap();
    assert!(!notes.is_dir);
    assert_eq!(notes.size, 120);
    assert!(notes.modified.is_some());
    assert!(entries.iter().any(|e| e.name == "reports" && e.is_dir));

    let snapshot = read_snapshot(&StdFileSystem, &root).unwrap();
    assert_eq!(snapshot.directories.len(), 1);
    assert_eq!(snapshot.files.len(), 1);
    assert_eq!(snapshot.files[0].extension, ".txt");

    assert!(StdFileSystem.is_file(&root.join("notes.txt")));
    assert!(StdFileSystem.is_dir(&root.join("reports")));
    assert!(!StdFileSystem.is_file(&root.join("missing")));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn unreadable_directory_lists_nothing() {
    let root = unique_temp_dir("missing");
    let mut session = DialogSession::new("Open file", DialogMode::Open, &root);
    let outcome = session.refresh(&StdFileSystem);
    assert!(matches!(outcome, RefreshOutcome::Unreadable { .. }));
    assert!(session.directories().is_empty());
    assert!(session.files().is_empty());
    assert!(session.should_refresh());
}

#[test]
fn open_real_file_through_dialog() {
    let root = unique_temp_dir("open");
    fs::create_dir_all(root.join("reports")).unwrap();
    fs::write(root.join("notes.txt"), b"hello").unwrap();

    let mut surface = ScriptedSurface::new();
    let mut sort = SortState::new();
    let mut open = true;
    let mut session = DialogSession::new("Open file", DialogMode::Open, &root);

    render_dialog(&mut surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem);
    assert_eq!(surface.rows, ["..", "reports", "notes.txt"]);

    surface.next_frame(Input::click("notes.txt"));
    render_dialog(&mut surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem);
    surface.next_frame(Input::press("Open"));
    let done = render_dialog(&mut surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem);
    assert!(done);
    assert_eq!(session.result_path(), Some(root.join("notes.txt").as_path()));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn confirming_a_directory_is_rejected() {
    let root = unique_temp_dir("dir-target");
    fs::create_dir_all(root.join("reports")).unwrap();

    let mut sort = SortState::new();
    let mut session =
        DialogSession::new("Save as", DialogMode::Save, &root).with_file_name("reports");
    let err = session.confirm(&mut sort, &StdFileSystem).into_result().unwrap_err();
    assert!(matches!(err, FileDialogError::NotAFile(_)));
    assert!(session.last_error().is_some());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn strict_save_policy_requires_existing_file() {
    let root = unique_temp_dir("strict-save");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("existing.txt"), b"1").unwrap();

    let mut sort = SortState::new();
    let strict = SavePolicy {
        require_existing: true,
    };

    let mut session = DialogSession::new("Save as", DialogMode::Save, &root)
        .with_save_policy(strict)
        .with_file_name("new.txt");
    let err = session.confirm(&mut sort, &StdFileSystem).into_result().unwrap_err();
    assert!(matches!(err, FileDialogError::NotFound(_)));

    let mut session = DialogSession::new("Save as", DialogMode::Save, &root)
        .with_save_policy(strict)
        .with_file_name("existing.txt");
    assert!(session.confirm(&mut sort, &StdFileSystem).is_completed());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn blank_named_file_is_listed_and_openable() {
    let root = unique_temp_dir("blank-name");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join(" "), b"blank").unwrap();
    fs::write(root.join("a.txt"), b"a").unwrap();

    let on_disk = fs::read_dir(&root).unwrap().count();
    let snapshot = read_snapshot(&StdFileSystem, &root).unwrap();
    assert_eq!(snapshot.len(), on_disk);
    assert!(snapshot.files.iter().any(|f| f.name == " "));

    let mut surface = ScriptedSurface::new();
    let mut sort = SortState::new();
    let mut open = true;
    let mut session = DialogSession::new("Open file", DialogMode::Open, &root);

    render_dialog(&mut surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem);
    assert_eq!(session.files().len(), on_disk);

    surface.next_frame(Input::click(" "));
    render_dialog(&mut surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem);
    assert_eq!(session.file_name(), " ");

    surface.next_frame(Input::press("Open"));
    let done = render_dialog(&mut surface, &mut open, Some(&mut session), &mut sort, &StdFileSystem);
    assert!(done);
    assert_eq!(session.result_path(), Some(root.join(" ").as_path()));

    let _ = fs::remove_dir_all(&root);
}
