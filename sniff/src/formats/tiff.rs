use sniff_common::image::ImageFormat;

/// Motorola byte order
pub const BE_MAGIC_BYTES: &[u8] = b"MM";
/// Intel byte order
pub const LE_MAGIC_BYTES: &[u8] = b"II";

/// TIFF in either byte order
///
/// Only the byte order mark is checked, not the following version number.
pub struct Tiff;

impl ImageFormat for Tiff {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(LE_MAGIC_BYTES) || data.starts_with(BE_MAGIC_BYTES)
    }
}
