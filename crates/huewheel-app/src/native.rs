//! Native platform glue: PNG encoding and the system clipboard.

use huewheel_core::clipboard::{BoxFuture, Clipboard, ClipboardError, ClipboardResult};
use huewheel_core::PixelBuffer;

/// Encode a pixel buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, png::EncodingError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.as_bytes())?;
        writer.finish()?;
    }

    Ok(png_data)
}

/// The operating system clipboard, through `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> BoxFuture<'_, ClipboardResult<()>> {
        let text = text.to_string();
        Box::pin(async move {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let buffer = huewheel_core::render(16);
        let png_data = encode_png(&buffer).unwrap();
        assert_eq!(&png_data[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let buffer = huewheel_core::render(24);
        let png_data = encode_png(&buffer).unwrap();

        let decoder = png::Decoder::new(png_data.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).unwrap();

        assert_eq!((info.width, info.height), (24, 24));
        assert_eq!(&pixels[..info.buffer_size()], buffer.as_bytes());
    }
}
