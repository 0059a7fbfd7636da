use crate::formats::*;
use crate::Format;

/// Checks the header for one format
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    format: Format,
    test: fn(&[u8]) -> bool,
}

impl Detector {
    pub const fn new(format: Format, test: fn(&[u8]) -> bool) -> Self {
        Self { format, test }
    }

    pub const fn format(&self) -> Format {
        self.format
    }

    /// Returns the format if the header matches
    pub fn matches(&self, header: &[u8]) -> Option<Format> {
        (self.test)(header).then_some(self.format)
    }
}

/// Built-in detectors in the order in which they are checked
///
/// The order decides which format is returned if a header matches more than
/// one detector.
pub static DETECTORS: [Detector; Format::ALL.len()] = [
    Detector::new(Format::Jpeg, Jpeg::is_filetype),
    Detector::new(Format::Png, Png::is_filetype),
    Detector::new(Format::Gif, Gif::is_filetype),
    Detector::new(Format::Tiff, Tiff::is_filetype),
    Detector::new(Format::Rgb, Rgb::is_filetype),
    Detector::new(Format::Pbm, Pbm::is_filetype),
    Detector::new(Format::Pgm, Pgm::is_filetype),
    Detector::new(Format::Ppm, Ppm::is_filetype),
    Detector::new(Format::Rast, Rast::is_filetype),
    Detector::new(Format::Xbm, Xbm::is_filetype),
    Detector::new(Format::Bmp, Bmp::is_filetype),
    Detector::new(Format::Webp, Webp::is_filetype),
    Detector::new(Format::Exr, Exr::is_filetype),
];

static_assertions::assert_impl_all!(Detector: Send, Sync, Copy);

/// Ordered list of detectors where the first match wins
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    detectors: &'a [Detector],
}

static_assertions::assert_impl_all!(Matcher<'static>: Send, Sync);

impl Default for Matcher<'static> {
    fn default() -> Self {
        Self::new(&DETECTORS)
    }
}

impl<'a> Matcher<'a> {
    /// Matcher that checks `detectors` in the given order
    ///
    /// ```
    /// # use sniff::{Detector, Format, Matcher};
    /// let detectors = [Detector::new(Format::Xbm, |h| h.starts_with(b"/* XPM */"))];
    /// let matcher = Matcher::new(&detectors);
    ///
    /// assert_eq!(matcher.classify(b"/* XPM */\n"), Some(Format::Xbm));
    /// assert_eq!(matcher.classify(b"#define "), None);
    /// ```
    pub const fn new(detectors: &'a [Detector]) -> Self {
        Self { detectors }
    }

    pub fn detectors(&self) -> &'a [Detector] {
        self.detectors
    }

    /// Returns the format of the first matching detector
    ///
    /// Detectors after the first match are not evaluated. Headers of any
    /// length are accepted, too short headers just don't match.
    pub fn classify(&self, header: &[u8]) -> Option<Format> {
        let format = self.detectors.iter().find_map(|x| x.matches(header));
        tracing::trace!("Header of {} bytes classified as {format:?}", header.len());
        format
    }

    /// All formats whose detectors match, in order of the detectors
    ///
    /// The first item is the result of [`classify()`](Self::classify).
    pub fn candidates<'h>(&self, header: &'h [u8]) -> impl Iterator<Item = Format> + 'h
    where
        'a: 'h,
    {
        let detectors: &'h [Detector] = self.detectors;
        detectors.iter().filter_map(move |x| x.matches(header))
    }
}

/// Classify a header with the built-in [`DETECTORS`]
///
/// ```
/// assert_eq!(sniff::classify(b"BM"), Some(sniff::Format::Bmp));
/// assert_eq!(sniff::classify(b"P"), None);
/// assert_eq!(sniff::classify(b""), None);
/// ```
pub fn classify(header: &[u8]) -> Option<Format> {
    Matcher::default().classify(header)
}
