use std::io::{BufRead, Cursor, Read, Result};
use std::vec::Vec;

/// Result type returned by [`ContentSource`] operations.
pub type ContentSourceResult<T> = Result<T>;

/// Result type returned by [`ContentSource::open`].
pub type ContentSourceOpenResult<'a> = ContentSourceResult<Box<dyn BufRead + 'a>>;

/// Trait used for reading git object content from various sources.
pub trait ContentSource {
    /// Returns the length (in bytes) of the content.
    fn len(&self) -> usize;

    /// Returns true if the content is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a `BufRead` struct which can be used for reading the content.
    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a>;

    /// Reads the full content into memory.
    fn read_all(&self) -> ContentSourceResult<Vec<u8>> {
        let mut content = Vec::with_capacity(self.len());
        self.open()?.read_to_end(&mut content)?;
        Ok(content)
    }
}

impl ContentSource for Vec<u8> {
    fn len(&self) -> usize {
        self.len()
    }

    fn open<'x>(&'x self) -> ContentSourceOpenResult<'x> {
        Ok(Box::new(Cursor::new(self)))
    }
}

impl ContentSource for String {
    fn len(&self) -> usize {
        self.len()
    }

    fn open<'x>(&'x self) -> ContentSourceOpenResult<'x> {
        Ok(Box::new(Cursor::new(self.as_bytes())))
    }
}

impl ContentSource for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn open<'x>(&'x self) -> ContentSourceOpenResult<'x> {
        Ok(Box::new(Cursor::new(self)))
    }
}
