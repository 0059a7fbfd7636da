#![doc = include_str!("../README.md")]

mod detector;
mod error;
mod format;
pub mod formats;
mod read;

pub use detector::*;
pub use error::*;
pub use format::*;
pub use read::*;

pub use sniff_common::HEADER_LEN;
