//! Loose object storage: one zlib-compressed frame per file at
//! `objects/<first two hex digits>/<remaining 38 hex digits>`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::debug;

use super::OnDisk;
use crate::object::{Id, Object};
use crate::repo::{Error, Result};

impl OnDisk {
    pub(crate) fn read_loose_object(&self, id: &Id) -> Result<Option<Object>> {
        let (dir, file) = id.fan_out();
        let path = self.resolve_path(&["objects", &dir, &file]);

        let compressed = match fs::read(&path) {
            Ok(compressed) => compressed,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut frame = Vec::new();
        ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut frame)?;

        let object = Object::from_frame(&frame)
            .map_err(|source| Error::MalformedObject { id: *id, source })?;

        Ok(Some(object))
    }

    pub(crate) fn put_loose_object(&self, object: &Object) -> Result<Id> {
        let frame = object.frame();
        let id = Id::for_frame(&frame);

        let (dir, file) = id.fan_out();
        let path = self
            .resolve_file(&["objects", &dir, &file], true)?
            .ok_or_else(|| Error::NotADirectory(self.resolve_path(&["objects", &dir])))?;

        if path.exists() {
            debug!(%id, "object already present");
            return Ok(id);
        }

        let parent = path.parent().unwrap_or_else(|| self.git_dir());
        write_compressed(parent, &path, &frame)?;

        debug!(%id, kind = %object.kind(), len = object.len(), "stored loose object");
        Ok(id)
    }

    pub(crate) fn has_loose_object(&self, id: &Id) -> bool {
        let (dir, file) = id.fan_out();
        self.resolve_path(&["objects", &dir, &file]).exists()
    }
}

// Compress into a temp file beside the destination, then link it into place
// without clobbering. Readers never see a partial object file.
fn write_compressed(dir: &Path, path: &Path, frame: &[u8]) -> Result<()> {
    let temp = NamedTempFile::new_in(dir)?;

    let mut encoder = ZlibEncoder::new(temp, Compression::default());
    encoder.write_all(frame)?;
    let temp = encoder.finish()?;

    match temp.persist_noclobber(path) {
        Ok(_) => Ok(()),
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
            // Another writer stored the same object first.
            debug!(path = %path.display(), "lost race to identical object writer");
            Ok(())
        }
        Err(err) => Err(err.error.into()),
    }
}
