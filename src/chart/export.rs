//! Export Sink Module
//! Serializes a rendered RGB canvas to a PNG byte stream.

use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use thiserror::Error;

/// Suggested file name offered in the save dialog.
pub const EXPORT_FILE_NAME: &str = "graph.png";
/// The one and only export format.
pub const EXPORT_MIME_TYPE: &str = "image/png";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("rgb buffer does not match a {width}x{height} canvas")]
    BufferSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode a raw RGB888 buffer as PNG bytes. No format negotiation and no
/// compression options.
pub fn encode_png(rgb: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let image =
        RgbImage::from_raw(width, height, rgb).ok_or(ExportError::BufferSize { width, height })?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn encodes_rgb_buffer_as_png() {
        let rgb = vec![255u8; 4 * 3 * 3];
        let bytes = encode_png(rgb, 4, 3).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn rejects_buffer_of_wrong_size() {
        let result = encode_png(vec![0u8; 10], 4, 3);
        assert!(matches!(
            result,
            Err(ExportError::BufferSize {
                width: 4,
                height: 3
            })
        ));
    }
}
