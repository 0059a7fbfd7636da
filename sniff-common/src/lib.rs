pub mod image;
pub mod read;

/// Number of leading bytes inspected when reading from a file or stream
pub const HEADER_LEN: usize = 32;

pub mod prelude {
    pub use crate::image::ImageFormat;
    pub use crate::read::{ReadExt, SeekExt};
}
