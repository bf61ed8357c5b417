use std::io::{self, Cursor, ErrorKind, Read};

use super::{ContentSource, ContentSourceOpenResult, ContentSourceResult};

/// Largest input [`ReadContentSource::new`] will buffer: 20MB.
pub const MAX_BUFFERED_LEN: usize = 20 * 1024 * 1024;

/// Object content buffered from any [`Read`] (typically `stdin`).
///
/// A stream can only be consumed once, and an object's length must be known
/// before its frame is built, so the whole input is held in memory.
pub struct ReadContentSource {
    content: Vec<u8>,
}

impl ReadContentSource {
    /// Buffer `r` until end of stream, failing past [`MAX_BUFFERED_LEN`] bytes.
    pub fn new<R: Read>(r: R) -> io::Result<ReadContentSource> {
        ReadContentSource::with_limit(r, MAX_BUFFERED_LEN)
    }

    /// Buffer `r` until end of stream, failing past `limit` bytes.
    pub fn with_limit<R: Read>(r: R, limit: usize) -> io::Result<ReadContentSource> {
        let mut content = Vec::new();
        r.take((limit as u64).saturating_add(1)).read_to_end(&mut content)?;

        if content.len() > limit {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("input exceeds {} byte limit", limit),
            ));
        }

        Ok(ReadContentSource { content })
    }

    /// Take the buffered bytes.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

impl ContentSource for ReadContentSource {
    fn len(&self) -> usize {
        self.content.len()
    }

    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        Ok(Box::new(Cursor::new(self.content.as_slice())))
    }

    fn read_all(&self) -> ContentSourceResult<Vec<u8>> {
        Ok(self.content.clone())
    }
}
