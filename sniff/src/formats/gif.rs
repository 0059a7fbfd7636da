use sniff_common::image::ImageFormat;

pub const GIF87A_MAGIC_BYTES: &[u8] = b"GIF87a";
pub const GIF89A_MAGIC_BYTES: &[u8] = b"GIF89a";

/// GIF ('87 and '89 variants)
pub struct Gif;

impl ImageFormat for Gif {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(GIF87A_MAGIC_BYTES) || data.starts_with(GIF89A_MAGIC_BYTES)
    }
}
