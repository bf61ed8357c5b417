use std::fs;

use predicates::prelude::*;

use super::super::*;

#[test]
fn creates_layout() {
    let tempdir = tempfile::tempdir().unwrap();
    let work_dir = tempdir.path();

    let r = OnDisk::init(work_dir).unwrap();
    let git_dir = work_dir.join(".git");
    assert_eq!(r.git_dir(), git_dir.as_path());

    let is_dir = predicate::path::is_dir();
    for dir in &["branches", "objects", "refs/heads", "refs/tags"] {
        assert!(is_dir.eval(&git_dir.join(dir)), "missing {}", dir);
    }

    assert_eq!(
        fs::read_to_string(git_dir.join("description")).unwrap(),
        "Unnamed repository; edit this file 'description' to name the repository.\n"
    );
    assert_eq!(
        fs::read_to_string(git_dir.join("HEAD")).unwrap(),
        "ref: refs/heads/master\n"
    );
    assert_eq!(
        fs::read_to_string(git_dir.join("config")).unwrap(),
        "[core]\n\trepositoryformatversion = 0\n\tfilemode = false\n\tbare = false\n"
    );

    assert_eq!(r.config(), &Config::new_repository());
}

#[test]
fn objects_dir_is_empty() {
    let tempdir = tempfile::tempdir().unwrap();
    let r = OnDisk::init(tempdir.path()).unwrap();

    let objects_dir = r.resolve_path(&["objects"]);
    assert_eq!(fs::read_dir(objects_dir).unwrap().count(), 0);
}

#[test]
fn creates_missing_work_dir() {
    let tempdir = tempfile::tempdir().unwrap();
    let work_dir = tempdir.path().join("a/b/c");

    let r = OnDisk::init(&work_dir).unwrap();
    assert!(work_dir.join(".git/objects").is_dir());

    // The new repo passes the non-forced checks.
    let r2 = OnDisk::open(r.work_dir(), false).unwrap();
    assert_eq!(r2.git_dir(), r.git_dir());
}

#[test]
fn err_if_git_dir_exists() {
    let tempdir = tempfile::tempdir().unwrap();
    let git_dir = tempdir.path().join(".git");
    fs::create_dir_all(&git_dir).unwrap();

    let err = OnDisk::init(tempdir.path()).unwrap_err();
    if let Error::RepositoryAlreadyExists(path) = err {
        assert_eq!(path, git_dir);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn err_if_already_initialized() {
    let tempdir = tempfile::tempdir().unwrap();
    OnDisk::init(tempdir.path()).unwrap();

    let err = OnDisk::init(tempdir.path()).unwrap_err();
    if let Error::RepositoryAlreadyExists(_) = err {
        // expected case
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn err_if_target_is_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("file");
    fs::write(&path, "not a directory").unwrap();

    let err = OnDisk::init(&path).unwrap_err();
    if let Error::TargetNotDirectory(err_path) = err {
        assert_eq!(err_path, path);
    } else {
        panic!("wrong error: {:?}", err);
    }
}
