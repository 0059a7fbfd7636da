use std::ops::Range;

use sniff_common::image::ImageFormat;

pub const JFIF_IDENTIFIER: &[u8] = b"JFIF";
pub const EXIF_IDENTIFIER: &[u8] = b"Exif";

/// Location of the APP0/APP1 identifier after SOI marker and segment length
pub const IDENTIFIER_RANGE: Range<usize> = 6..10;

/// JPEG data in JFIF or Exif format
///
/// Only the identifier of the first application segment is checked. Raw JPEG
/// streams without an JFIF or Exif segment are not recognized.
pub struct Jpeg;

impl ImageFormat for Jpeg {
    fn is_filetype(data: &[u8]) -> bool {
        data.get(IDENTIFIER_RANGE)
            .is_some_and(|x| x == JFIF_IDENTIFIER || x == EXIF_IDENTIFIER)
    }
}
