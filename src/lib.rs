//! This crate implements a content-addressable git object store and the
//! repository plumbing it sits on.
//!
//! Objects (blobs, trees, commits, tags) are framed, hashed with SHA-1, and
//! stored as zlib-compressed loose objects in the same `.git` layout that
//! command-line git uses.
//!
//! The functions at the top level of the crate are the entry points used by
//! a command-line front end. Everything they do is also reachable through
//! [`repo::on_disk::OnDisk`] and the [`repo::Repo`] trait.

use std::path::Path;

pub mod object;
pub mod repo;

#[cfg(test)]
mod test_support;

use object::{ContentSource, Id, Kind, Object};
use repo::on_disk::{find, OnDisk};
use repo::{Repo, Result};

/// Create a new, empty repository at `path`.
///
/// Analogous to [`git init`](https://git-scm.com/docs/git-init).
pub fn init_repository<P: AsRef<Path>>(path: P) -> Result<OnDisk> {
    OnDisk::init(path)
}

/// Find the repository enclosing `path`.
///
/// If none is found, this is an error when `required` is set and `Ok(None)`
/// otherwise.
pub fn find_repository<P: AsRef<Path>>(path: P, required: bool) -> Result<Option<OnDisk>> {
    find::from_path(path, required)
}

/// Read an object from `repo`. Returns `Ok(None)` if it isn't stored.
pub fn read_object(repo: &dyn Repo, id: &Id) -> Result<Option<Object>> {
    repo.read_object(id)
}

/// Compute an object's ID, storing it in `repo` if one is given.
pub fn write_object(object: &Object, repo: Option<&dyn Repo>) -> Result<Id> {
    repo::write_object(object, repo)
}

/// Resolve an object name to an ID. Only full hex IDs are supported, and the
/// all-zero null ID is rejected.
pub fn resolve_object_name(
    repo: &dyn Repo,
    name: &str,
    expected_kind: Option<Kind>,
) -> Result<Id> {
    repo::resolve_object_name(repo, name, expected_kind)
}

/// Hash content as an object of the given kind, storing it in `repo` if one is given.
pub fn hash_object(
    content_source: &dyn ContentSource,
    kind: Kind,
    repo: Option<&dyn Repo>,
) -> Result<Id> {
    repo::hash_object(content_source, kind, repo)
}
