//! A repository stored in a `.git` directory on the local file system.
//!
//! Objects are kept as zlib-compressed loose files in the same layout
//! command-line git reads, so a repository created here can be inspected with
//! `git cat-file`. Packfiles, refs beyond `HEAD`, and the index are not handled.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Error, Repo, Result};
use crate::object::{Id, Object};

mod config;
pub use config::{Config, ParseConfigError, SUPPORTED_FORMAT_VERSION};

pub mod find;

mod init;

mod loose;

/// Name of the metadata directory inside a working directory.
pub const GIT_DIR_NAME: &str = ".git";

/// The content of the `HEAD` file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Head {
    /// `HEAD` names a ref, as in `ref: refs/heads/master`.
    Symbolic(String),

    /// `HEAD` holds an object ID directly.
    Detached(Id),
}

/// Handle to an on-disk repository: where its worktree and `.git` directory
/// are, and the config read when it was opened.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
    config: Config,
}

impl OnDisk {
    /// Open an on-disk git repository whose `.git` directory is inside `work_dir`.
    ///
    /// Unless `force` is set, the `.git` directory and its `config` file must
    /// exist and the config must declare a supported repository format version.
    /// `force` skips those checks and is used while a repository is being created.
    pub fn open<P: AsRef<Path>>(work_dir: P, force: bool) -> Result<Self> {
        let work_dir = work_dir.as_ref();
        OnDisk::open_with_git_dir(work_dir, work_dir.join(GIT_DIR_NAME), force)
    }

    /// Open an on-disk git repository whose metadata directory is `git_dir`,
    /// which need not be inside `work_dir`.
    pub fn open_with_git_dir<P: AsRef<Path>, G: Into<PathBuf>>(
        work_dir: P,
        git_dir: G,
        force: bool,
    ) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        let git_dir = git_dir.into();

        if !force && !git_dir.is_dir() {
            return Err(Error::NotARepository(work_dir));
        }

        let config_path = git_dir.join("config");
        let config = if config_path.is_file() {
            read_config(&config_path)?
        } else if force {
            Config::default()
        } else {
            return Err(Error::ConfigMissing(config_path));
        };

        if !force {
            check_format_version(&config, &config_path)?;
        }

        debug!(work_dir = %work_dir.display(), force, "opened repository");

        Ok(OnDisk {
            work_dir,
            git_dir,
            config,
        })
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the configuration read when the repo was opened.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Join `segments` under the `.git` directory. Nothing is checked or created.
    pub fn resolve_path(&self, segments: &[&str]) -> PathBuf {
        let mut path = self.git_dir.clone();
        path.extend(segments);
        path
    }

    /// Resolve `segments` as a directory under the `.git` directory.
    ///
    /// Returns `Ok(None)` if the directory doesn't exist and `create` is false.
    /// Otherwise creates the full chain of directories as needed. It is an error
    /// (`Error::NotADirectory`) if something other than a directory is in the way.
    pub fn resolve_dir(&self, segments: &[&str], create: bool) -> Result<Option<PathBuf>> {
        let path = self.resolve_path(segments);

        if path.exists() {
            return if path.is_dir() {
                Ok(Some(path))
            } else {
                Err(Error::NotADirectory(path))
            };
        }

        if !create {
            return Ok(None);
        }

        match fs::create_dir_all(&path) {
            Ok(()) => Ok(Some(path)),
            // A concurrent creator may have made it between the check and here.
            Err(_) if path.is_dir() => Ok(Some(path)),
            Err(err) => match first_non_dir_ancestor(&path) {
                Some(blocker) => Err(Error::NotADirectory(blocker)),
                None => Err(err.into()),
            },
        }
    }

    /// Resolve `segments` as a file under the `.git` directory.
    ///
    /// The directory containing the file is resolved as with `resolve_dir`
    /// (created if `create_parents` is set). The returned path is that of the
    /// file itself, which may or may not exist yet. Returns `Ok(None)` if the
    /// containing directory is missing and wasn't created.
    pub fn resolve_file(
        &self,
        segments: &[&str],
        create_parents: bool,
    ) -> Result<Option<PathBuf>> {
        let parents = match segments.split_last() {
            Some((_, parents)) => parents,
            None => segments,
        };

        Ok(self
            .resolve_dir(parents, create_parents)?
            .map(|_| self.resolve_path(segments)))
    }

    /// Read and interpret the `HEAD` file.
    pub fn head(&self) -> Result<Head> {
        let path = self.resolve_path(&["HEAD"]);
        let text = fs::read_to_string(&path)?;
        let text = text.trim_end();

        if let Some(name) = text.strip_prefix("ref: ") {
            let name = name.trim();
            if !name.is_empty() {
                return Ok(Head::Symbolic(name.to_string()));
            }
        } else if let Ok(id) = text.parse::<Id>() {
            return Ok(Head::Detached(id));
        }

        Err(Error::InvalidHead(path))
    }
}

impl Repo for OnDisk {
    fn read_object(&self, id: &Id) -> Result<Option<Object>> {
        self.read_loose_object(id)
    }

    fn put_object(&self, object: &Object) -> Result<Id> {
        self.put_loose_object(object)
    }

    fn has_object(&self, id: &Id) -> Result<bool> {
        Ok(self.has_loose_object(id))
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;

    Config::parse(&text).map_err(|err| Error::InvalidConfig {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

fn check_format_version(config: &Config, path: &Path) -> Result<()> {
    let version = config.format_version().ok_or_else(|| Error::InvalidConfig {
        path: path.to_path_buf(),
        reason: "core.repositoryformatversion is not set".to_string(),
    })?;

    match version.parse::<i64>() {
        Ok(SUPPORTED_FORMAT_VERSION) => Ok(()),
        _ => Err(Error::UnsupportedFormatVersion(version.to_string())),
    }
}

fn first_non_dir_ancestor(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|p| p.exists() && !p.is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests;
