use std::{fs, path::Path};

use gitstore::repo::on_disk::OnDisk;

// Create an empty repo in the given directory with a file tree
// rooted at `sub/sub2`, which several tests search upward from.
#[allow(dead_code)]
pub fn init_with_nested_dirs(path: &Path) -> OnDisk {
    let repo = gitstore::init_repository(path).unwrap();
    fs::create_dir_all(path.join("sub/sub2")).unwrap();
    repo
}

// Count the regular files under `path`, recursively.
#[allow(dead_code)]
pub fn count_files(path: &Path) -> usize {
    fs::read_dir(path)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}
