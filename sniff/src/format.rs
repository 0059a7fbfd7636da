use std::str::FromStr;

use crate::UnknownFormatError;

/// Image format recognized by its magic bytes
///
/// The string representation is the short tag returned by
/// [`as_str()`](Self::as_str).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// JPEG data in JFIF or Exif format
    Jpeg,
    Png,
    /// GIF87a and GIF89a
    Gif,
    /// TIFF in Motorola or Intel byte order
    Tiff,
    /// SGI image library
    Rgb,
    /// Portable bitmap
    Pbm,
    /// Portable graymap
    Pgm,
    /// Portable pixmap
    Ppm,
    /// Sun raster file
    Rast,
    /// X bitmap (X10 or X11)
    Xbm,
    Bmp,
    Webp,
    /// OpenEXR
    Exr,
}

impl Format {
    /// All formats in the order in which they are checked
    pub const ALL: [Self; 13] = [
        Self::Jpeg,
        Self::Png,
        Self::Gif,
        Self::Tiff,
        Self::Rgb,
        Self::Pbm,
        Self::Pgm,
        Self::Ppm,
        Self::Rast,
        Self::Xbm,
        Self::Bmp,
        Self::Webp,
        Self::Exr,
    ];

    /// Short tag for the format
    ///
    /// ```
    /// assert_eq!(sniff::Format::Jpeg.as_str(), "jpeg");
    /// assert_eq!(sniff::Format::Rast.to_string(), "rast");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Tiff => "tiff",
            Self::Rgb => "rgb",
            Self::Pbm => "pbm",
            Self::Pgm => "pgm",
            Self::Ppm => "ppm",
            Self::Rast => "rast",
            Self::Xbm => "xbm",
            Self::Bmp => "bmp",
            Self::Webp => "webp",
            Self::Exr => "exr",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = UnknownFormatError;

    /// Parses a tag as returned by [`Format::as_str()`]
    ///
    /// ```
    /// # use sniff::Format;
    /// assert_eq!("webp".parse(), Ok(Format::Webp));
    /// assert!("WEBP".parse::<Format>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownFormatError(s.to_string()))
    }
}
