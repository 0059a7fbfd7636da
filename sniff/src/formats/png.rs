use sniff_common::image::ImageFormat;

pub const PNG_MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

pub struct Png;

impl ImageFormat for Png {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(PNG_MAGIC_BYTES)
    }
}
