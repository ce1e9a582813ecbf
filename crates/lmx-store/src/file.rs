use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ByteSource, ByteStream};

/// A file on the local filesystem served as a byte object.
///
/// Every stream opens its own file handle, so concurrent readers never share
/// a seek position.
#[derive(Clone, Debug)]
pub struct FileByteSource {
    path: PathBuf,
}

impl FileByteSource {
    /// Serve the file at `path`. The file must exist when the first call is
    /// made, not when the source is created.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileByteSource {
    fn length(&self) -> StoreResult<u64> {
        let len = std::fs::metadata(&self.path)?.len();
        debug!(path = %self.path.display(), len, "file length");
        Ok(len)
    }

    fn open_stream(&self, offset: u64) -> StoreResult<ByteStream> {
        let mut file = File::open(&self.path)?;
        let length = file.metadata()?.len();
        if offset > length {
            return Err(StoreError::OffsetOutOfRange { offset, length });
        }
        file.seek(SeekFrom::Start(offset))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
