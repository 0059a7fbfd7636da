use sniff_common::image::ImageFormat;

pub const EXR_MAGIC_BYTES: &[u8] = &[0x76, 0x2F, 0x31, 0x01];

/// OpenEXR
pub struct Exr;

impl ImageFormat for Exr {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(EXR_MAGIC_BYTES)
    }
}
