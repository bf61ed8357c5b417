//! Discovers the repository that encloses a given path.

use std::env;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::{OnDisk, GIT_DIR_NAME};
use crate::repo::{Error, Result};

/// Discover a git repo starting from the given path.
///
/// The path is made absolute with symlinks resolved. Then it and each of its
/// parents in turn is checked for a `.git` directory. The first match is
/// opened with all of the usual checks.
///
/// When the filesystem root is reached without a match, returns
/// `Error::RepositoryNotFound` if `required` is set, or `Ok(None)` otherwise.
pub fn from_path<P: AsRef<Path>>(path: P, required: bool) -> Result<Option<OnDisk>> {
    let start = fs::canonicalize(path.as_ref())?;
    let mut dir = start.as_path();

    loop {
        trace!(dir = %dir.display(), "looking for repository");

        if dir.join(GIT_DIR_NAME).is_dir() {
            let repo = OnDisk::open(dir, false)?;
            debug!(work_dir = %dir.display(), "found repository");
            return Ok(Some(repo));
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None if required => return Err(Error::RepositoryNotFound(start.clone())),
            None => return Ok(None),
        }
    }
}

/// Discover a git repo starting from the current working directory.
///
/// See [`from_path`] for the search rules.
pub fn from_current_dir(required: bool) -> Result<Option<OnDisk>> {
    let path = env::current_dir()?;
    from_path(path, required)
}
