use std::fmt;

/// Raw encoded raster bytes returned by the static map API.
///
/// The bytes are handed to the renderer as-is; decoding is only attempted for
/// diagnostics and never gates display.
#[derive(Clone, PartialEq)]
pub struct SatelliteImage {
    bytes: Vec<u8>,
}

impl SatelliteImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Best-effort pixel dimensions, `None` when the payload is not a
    /// decodable image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        use image::GenericImageView;

        image::load_from_memory(&self.bytes)
            .ok()
            .map(|decoded| decoded.dimensions())
    }
}

impl fmt::Debug for SatelliteImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SatelliteImage({} bytes)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_raw_bytes_untouched() {
        let payload = b"PNGDATA".to_vec();
        let image = SatelliteImage::from_bytes(payload.clone());

        assert_eq!(image.as_bytes(), payload.as_slice());
        assert_eq!(image.len(), 7);
        assert!(!image.is_empty());
    }

    #[test]
    fn test_dimensions_is_none_for_undecodable_payload() {
        let image = SatelliteImage::from_bytes(b"PNGDATA".to_vec());
        assert_eq!(image.dimensions(), None);
    }

    #[test]
    fn test_debug_reports_length_not_contents() {
        let image = SatelliteImage::from_bytes(vec![0u8; 32]);
        assert_eq!(format!("{:?}", image), "SatelliteImage(32 bytes)");
    }
}
