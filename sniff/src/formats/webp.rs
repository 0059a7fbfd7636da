use std::ops::Range;

use sniff_common::image::ImageFormat;

pub const RIFF_MAGIC_BYTES: &[u8] = b"RIFF";
pub const WEBP_MAGIC_BYTES: &[u8] = b"WEBP";

/// Location of the RIFF form type, after the four bytes of file length
pub const FORM_TYPE_RANGE: Range<usize> = 8..12;

/// WebP inside a RIFF container
///
/// The RIFF file length is not checked.
pub struct Webp;

impl ImageFormat for Webp {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(RIFF_MAGIC_BYTES)
            && data.get(FORM_TYPE_RANGE) == Some(WEBP_MAGIC_BYTES)
    }
}
