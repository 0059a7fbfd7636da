use std::io::{Read, Seek, SeekFrom};

use crate::HEADER_LEN;

pub trait ReadExt: Read {
    /// Read up to [`HEADER_LEN`] bytes
    ///
    /// Returns fewer bytes if the source ends earlier.
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use sniff_common::read::*;
    /// let mut s = Cursor::new(b"GIF89a".as_slice());
    /// assert_eq!(s.read_header().unwrap(), b"GIF89a");
    ///
    /// let mut s = Cursor::new([7_u8; 40]);
    /// assert_eq!(s.read_header().unwrap().len(), 32);
    /// ```
    fn read_header(&mut self) -> std::io::Result<Vec<u8>> {
        let mut header = Vec::with_capacity(HEADER_LEN);
        // `read_to_end` already retries on `Interrupted`
        Read::take(&mut *self, HEADER_LEN as u64).read_to_end(&mut header)?;
        Ok(header)
    }
}

impl<T: Read + ?Sized> ReadExt for T {}

pub trait SeekExt: ReadExt + Seek {
    /// Read the header and return to the previous position afterwards
    ///
    /// The position is restored even if reading failed. A failed restore is
    /// reported as [`RestoreError::Seek`].
    ///
    /// ```
    /// # use std::io::{Cursor, Seek, SeekFrom};
    /// # use sniff_common::read::*;
    /// let mut s = Cursor::new(b"xxBM".as_slice());
    /// s.seek(SeekFrom::Start(2)).unwrap();
    /// assert_eq!(s.peek_header().unwrap(), b"BM");
    /// assert_eq!(s.position(), 2);
    /// ```
    fn peek_header(&mut self) -> Result<Vec<u8>, RestoreError> {
        let location = self.stream_position().map_err(RestoreError::Seek)?;
        let header = self.read_header();

        tracing::debug!("Read header at offset {location}, seeking back");
        self.seek(SeekFrom::Start(location))
            .map_err(RestoreError::Seek)?;

        header.map_err(RestoreError::Read)
    }
}

impl<T: Read + Seek + ?Sized> SeekExt for T {}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("Read: {0}")]
    Read(std::io::Error),
    #[error("Seek: {0}")]
    Seek(std::io::Error),
}
