use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::repo::on_disk::OnDisk;

// A TempRepo creates a temporary, empty repo via `OnDisk::init`
// in a directory that is deleted when the struct is dropped.
//
// Because this struct is intended for testing, its functions
// panic instead of returning Result structs.
pub(crate) struct TempRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    repo: OnDisk,
}

impl TempRepo {
    #[allow(dead_code)]
    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let repo = OnDisk::init(tempdir.path()).unwrap();
        TempRepo { tempdir, repo }
    }

    // Return the path for this repo's root (working directory).
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.repo.work_dir()
    }

    #[allow(dead_code)]
    pub fn repo(&self) -> &OnDisk {
        &self.repo
    }

    // Path to the loose object file for a 40-digit hex ID.
    #[allow(dead_code)]
    pub fn object_path(&self, hex: &str) -> PathBuf {
        self.repo.resolve_path(&["objects", &hex[..2], &hex[2..]])
    }

    // Replace the repo's config file with `text`.
    #[allow(dead_code)]
    pub fn write_config(&self, text: &str) {
        fs::write(self.repo.resolve_path(&["config"]), text).unwrap();
    }
}
