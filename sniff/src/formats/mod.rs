//! Magic byte checks for all supported formats
//!
//! Every type implements [`ImageFormat`]. The checks never assume a minimum
//! length of the data and return `false` for data that are too short.
//!
//! ```
//! use sniff::formats::*;
//!
//! assert!(Gif::is_filetype(b"GIF87a"));
//! assert!(!Gif::is_filetype(b"GIF8"));
//! ```

mod bmp;
mod exr;
mod gif;
mod jpeg;
mod netpbm;
mod png;
mod tiff;
mod unix;
mod webp;

pub use bmp::*;
pub use exr::*;
pub use gif::*;
pub use jpeg::*;
pub use netpbm::*;
pub use png::*;
pub use sniff_common::image::ImageFormat;
pub use tiff::*;
pub use unix::*;
pub use webp::*;
