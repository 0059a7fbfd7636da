use sniff_common::image::ImageFormat;

/// Whitespace that may follow the `P<n>` magic number
pub const NETPBM_WHITESPACE: &[u8] = b" \t\n\r";

/// Checks for `P`, one of the `variants` digits, and whitespace
///
/// ```
/// # use sniff::formats::is_netpbm;
/// assert!(is_netpbm(b"P6\n640 480\n255\n", b"36"));
/// assert!(!is_netpbm(b"P6", b"36"));
/// assert!(!is_netpbm(b"P6x", b"36"));
/// ```
pub fn is_netpbm(data: &[u8], variants: &[u8]) -> bool {
    match data {
        [b'P', variant, whitespace, ..] => {
            variants.contains(variant) && NETPBM_WHITESPACE.contains(whitespace)
        }
        _ => false,
    }
}

/// Portable bitmap, ASCII (`P1`) or binary (`P4`)
pub struct Pbm;

impl ImageFormat for Pbm {
    fn is_filetype(data: &[u8]) -> bool {
        is_netpbm(data, b"14")
    }
}

/// Portable graymap, ASCII (`P2`) or binary (`P5`)
pub struct Pgm;

impl ImageFormat for Pgm {
    fn is_filetype(data: &[u8]) -> bool {
        is_netpbm(data, b"25")
    }
}

/// Portable pixmap, ASCII (`P3`) or binary (`P6`)
pub struct Ppm;

impl ImageFormat for Ppm {
    fn is_filetype(data: &[u8]) -> bool {
        is_netpbm(data, b"36")
    }
}
