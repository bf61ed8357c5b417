//! Represents an abstract git repository.
//!
//! ## Design Goals
//!
//! Repositories may be stored in different mechanisms. The crate includes
//! built-in support for local on-disk repositories (see `gitstore::repo::on_disk`),
//! but the object store operations are expressed through the `Repo` trait so
//! other storage (in memory, remote) can sit behind the same calls.

mod error;
pub use error::{Error, Result};

pub mod on_disk;

use crate::object::{ContentSource, Id, Kind, Object};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing git objects.
///
/// Objects are immutable and content-addressed: storing an object whose ID is
/// already present must leave the existing copy untouched.
pub trait Repo {
    /// Read the object with the given ID.
    ///
    /// Returns `Ok(None)` if no such object is stored.
    fn read_object(&self, id: &Id) -> Result<Option<Object>>;

    /// Store an object and return its ID.
    fn put_object(&self, object: &Object) -> Result<Id>;

    /// Returns true if an object with the given ID is stored.
    fn has_object(&self, id: &Id) -> Result<bool>;
}

/// Compute an object's ID, storing it in `repo` if one is given.
///
/// With no repo this is a dry run: the ID is returned and nothing is written.
pub fn write_object(object: &Object, repo: Option<&dyn Repo>) -> Result<Id> {
    match repo {
        Some(repo) => repo.put_object(object),
        None => Ok(object.id()),
    }
}

/// Hash the full content of `content_source` as an object of the given kind,
/// storing it in `repo` if one is given.
///
/// Analogous to [`git hash-object`](https://git-scm.com/docs/git-hash-object),
/// with `repo` standing in for the `-w` option.
pub fn hash_object(
    content_source: &dyn ContentSource,
    kind: Kind,
    repo: Option<&dyn Repo>,
) -> Result<Id> {
    let object = Object::from_content_source(kind, content_source)?;
    write_object(&object, repo)
}

/// Resolve a user-supplied object name to an ID.
///
/// Only full 40-digit hex IDs are understood. Abbreviated IDs, ref names, and
/// `expected_kind` filtering are not implemented, so the name is parsed and
/// returned as-is without consulting the repo.
///
/// The all-zero ID is not accepted (`Error::InvalidObjectId` with
/// `ParseIdError::Zero`). Git uses it as the null ID meaning "no object", and
/// no frame hashes to it.
pub fn resolve_object_name(
    _repo: &dyn Repo,
    name: &str,
    _expected_kind: Option<Kind>,
) -> Result<Id> {
    Ok(name.parse::<Id>()?)
}
