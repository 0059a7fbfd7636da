use sniff_common::image::ImageFormat;

pub const RGB_MAGIC_BYTES: &[u8] = &[0x01, 0xDA];
pub const RAST_MAGIC_BYTES: &[u8] = &[0x59, 0xA6, 0x6A, 0x95];
pub const XBM_MAGIC_BYTES: &[u8] = b"#define ";

/// SGI image library
pub struct Rgb;

impl ImageFormat for Rgb {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(RGB_MAGIC_BYTES)
    }
}

/// Sun raster file
pub struct Rast;

impl ImageFormat for Rast {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(RAST_MAGIC_BYTES)
    }
}

/// X bitmap (X10 or X11)
///
/// These are C source files. Only the leading `#define ` is checked.
pub struct Xbm;

impl ImageFormat for Xbm {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(XBM_MAGIC_BYTES)
    }
}
