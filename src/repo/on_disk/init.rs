use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use super::{Config, OnDisk, GIT_DIR_NAME};
use crate::repo::{Error, Result};

const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

const HEAD: &str = "ref: refs/heads/master\n";

impl OnDisk {
    /// Creates a new, empty git repository on the local file system.
    ///
    /// Analogous to [`git init`](https://git-scm.com/docs/git-init).
    ///
    /// `work_dir` is created if it doesn't exist. It is an error if it exists
    /// and is not a directory, or if it already contains a `.git` directory.
    #[instrument(level = "debug", skip(work_dir), fields(path = %work_dir.as_ref().display()))]
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref();

        if work_dir.exists() {
            if !work_dir.is_dir() {
                return Err(Error::TargetNotDirectory(work_dir.to_path_buf()));
            }

            let git_dir = work_dir.join(GIT_DIR_NAME);
            if git_dir.exists() {
                return Err(Error::RepositoryAlreadyExists(git_dir));
            }
        } else {
            fs::create_dir_all(work_dir)?;
        }

        let mut repo = OnDisk::open(work_dir, true)?;

        // Directories first, so that a partially-created repository is
        // still discoverable. Config goes last.
        repo.create_dir(&["branches"])?;
        repo.create_dir(&["objects"])?;
        repo.create_dir(&["refs", "tags"])?;
        repo.create_dir(&["refs", "heads"])?;

        repo.create_file(&["description"], DESCRIPTION)?;
        repo.create_file(&["HEAD"], HEAD)?;

        let config = Config::new_repository();
        repo.create_file(&["config"], &config.to_string())?;
        repo.config = config;

        debug!(git_dir = %repo.git_dir().display(), "initialized empty repository");
        Ok(repo)
    }

    fn create_dir(&self, segments: &[&str]) -> Result<()> {
        self.resolve_dir(segments, true)?;
        Ok(())
    }

    fn create_file(&self, segments: &[&str], content: &str) -> Result<()> {
        let path = self
            .resolve_file(segments, true)?
            .ok_or_else(|| Error::NotADirectory(self.git_dir().to_path_buf()))?;

        fs::write(path, content).map_err(|e| e.into())
    }
}
