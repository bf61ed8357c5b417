//! Represents the git concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the binary data.

mod content_source;
pub use content_source::{ContentSource, ContentSourceOpenResult, ContentSourceResult};

mod file_content_source;
pub use file_content_source::FileContentSource;

pub mod frame;
pub use frame::FrameError;

mod id;
pub use id::{Id, ParseIdError};

mod kind;
pub use kind::{Kind, UnknownKindError};

pub(crate) mod parse_utils;

mod read_content_source;
pub use read_content_source::{ReadContentSource, MAX_BUFFERED_LEN};

/// Describes a single object stored (or about to be stored) in a git repository.
///
/// The content of tree, commit, and tag objects is carried as opaque bytes.
/// Only the outer frame is interpreted here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new Object.
    pub fn new(kind: Kind, content: Vec<u8>) -> Object {
        Object { kind, content }
    }

    /// Create a new Object by reading the entirety of a content source.
    pub fn from_content_source(
        kind: Kind,
        content_source: &dyn ContentSource,
    ) -> ContentSourceResult<Object> {
        Ok(Object::new(kind, content_source.read_all()?))
    }

    /// Parse an object from its frame.
    pub fn from_frame(frame: &[u8]) -> Result<Object, FrameError> {
        let (kind, content) = frame::decode(frame)?;
        Ok(Object::new(kind, content.to_vec()))
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the content of the object (not including the header).
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the object and return its content.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Return the size (in bytes) of the object's content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode the object as the frame that is hashed and stored.
    pub fn frame(&self) -> Vec<u8> {
        frame::encode(self.kind, &self.content)
    }

    /// Computes the object's ID from its content, size, and type.
    ///
    /// This is functionally equivalent to the
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
    /// without the `-w` option that would write the object to the repo.
    pub fn id(&self) -> Id {
        Id::for_frame(&self.frame())
    }
}
