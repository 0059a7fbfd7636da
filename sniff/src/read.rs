use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use sniff_common::prelude::*;

use crate::{classify, Error, Format};

/// Streams that can be inspected without changing their position
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Where the header is taken from
pub enum Source<'a> {
    /// File that is opened for reading the header
    Path(&'a Path),
    /// Open stream, the position is restored after reading the header
    Reader(&'a mut dyn ReadSeek),
    /// Header that has already been read
    Bytes(&'a [u8]),
}

impl<'a> Source<'a> {
    pub fn reader(reader: &'a mut dyn ReadSeek) -> Self {
        Self::Reader(reader)
    }
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Reader(_) => f.write_str("Reader"),
            Self::Bytes(data) => f
                .debug_tuple("Bytes")
                .field(&format!("{} bytes", data.len()))
                .finish(),
        }
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(value: &'a Path) -> Self {
        Self::Path(value)
    }
}

impl<'a> From<&'a std::path::PathBuf> for Source<'a> {
    fn from(value: &'a std::path::PathBuf) -> Self {
        Self::Path(value)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Self::Path(Path::new(value))
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(value: &'a String) -> Self {
        Self::Path(Path::new(value))
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

/// Guess the image format of a file, stream, or header
///
/// Returns `Ok(None)` if no format was recognized. Errors are only returned
/// if opening, reading, or seeking failed.
///
/// ```
/// # use std::io::Cursor;
/// # use sniff::{what, Format, Source};
/// assert_eq!(what(b"GIF89a").unwrap(), Some(Format::Gif));
///
/// let mut stream = Cursor::new(b"II*\0".to_vec());
/// assert_eq!(what(Source::reader(&mut stream)).unwrap(), Some(Format::Tiff));
/// ```
pub fn what<'a>(source: impl Into<Source<'a>>) -> Result<Option<Format>, Error> {
    match source.into() {
        Source::Path(path) => from_path(path),
        Source::Reader(reader) => from_reader(reader),
        Source::Bytes(data) => Ok(from_bytes(data)),
    }
}

/// Guess the image format from data that have already been read
///
/// The data are used as they are. They should not be padded since some
/// checks depend on the length of the data.
pub fn from_bytes(data: &[u8]) -> Option<Format> {
    classify(data)
}

/// Guess the image format from the current position of a stream
///
/// Reads up to [`HEADER_LEN`](crate::HEADER_LEN) bytes and seeks back to the
/// original position afterwards, also if reading failed.
pub fn from_reader<R: Read + Seek + ?Sized>(reader: &mut R) -> Result<Option<Format>, Error> {
    let header = reader.peek_header()?;
    let format = classify(&header);

    tracing::debug!("Stream header of {} bytes is {format:?}", header.len());

    Ok(format)
}

/// Guess the image format of a file
///
/// The file is closed before returning.
pub fn from_path(path: impl AsRef<Path>) -> Result<Option<Format>, Error> {
    let path = path.as_ref();

    let header = {
        let mut file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        file.read_header().map_err(Error::Read)?
    };
    let format = classify(&header);

    tracing::debug!("File '{}' is {format:?}", path.display());

    Ok(format)
}
