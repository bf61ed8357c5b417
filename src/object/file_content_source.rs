use std::fs;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::{ContentSource, ContentSourceOpenResult, ContentSourceResult};

/// Object content read from a regular file.
///
/// The length is taken when the source is created. Reading the whole file
/// fails if it has since grown or shrunk, so the length written into an
/// object's frame always matches the bytes hashed after it.
pub struct FileContentSource {
    path: PathBuf,
    len: usize,
}

impl FileContentSource {
    /// Create a `FileContentSource` for an existing regular file.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<FileContentSource> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;

        if !metadata.is_file() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        Ok(FileContentSource {
            path: path.to_path_buf(),
            len: metadata.len() as usize,
        })
    }

    /// Return the path this content is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for FileContentSource {
    fn len(&self) -> usize {
        self.len
    }

    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        let file = fs::File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file.take(self.len as u64))))
    }

    fn read_all(&self) -> ContentSourceResult<Vec<u8>> {
        let content = fs::read(&self.path)?;

        if content.len() != self.len {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "{} changed size from {} to {} bytes",
                    self.path.display(),
                    self.len,
                    content.len()
                ),
            ));
        }

        Ok(content)
    }
}
