pub trait ImageFormat {
    /// Usually checks if data start with correct magic bytes
    ///
    /// Must return `false` instead of panicking if `data` is shorter than the
    /// signature.
    fn is_filetype(data: &[u8]) -> bool;
}
