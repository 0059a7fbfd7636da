use sniff_common::image::ImageFormat;

pub const BMP_MAGIC_BYTES: &[u8] = b"BM";

pub struct Bmp;

impl ImageFormat for Bmp {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(BMP_MAGIC_BYTES)
    }
}
