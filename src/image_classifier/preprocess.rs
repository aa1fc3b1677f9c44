use image::{imageops::FilterType, DynamicImage};
use thiserror::Error;

/// Side length of the square model input.
pub const MODEL_INPUT_SIDE: u32 = 32;

/// Bytes per pixel: one skipped byte followed by R, G and B.
pub const CHANNELS: usize = 4;

/// Rows are padded so every row starts on this boundary.
const ROW_ALIGNMENT: usize = 64;

/// Value written to the skipped leading byte of each pixel.
const SKIP_BYTE: u8 = 0xFF;

#[derive(Debug, Error, PartialEq)]
pub enum PreprocessError {
    #[error("cannot resize an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
    #[error("resized image is {width}x{height}, expected {expected}x{expected}")]
    Conversion {
        width: u32,
        height: u32,
        expected: u32,
    },
    #[error("failed to allocate a {bytes} byte pixel buffer")]
    Allocation { bytes: usize },
}

/// A 32x32 raster in the byte layout the model input expects:
/// 8 bits per channel, alpha-skipped-first (xRGB), device RGB, padded rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    #[cfg(test)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The R, G and B bytes of the pixel at `(x, y)`.
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = self.offset(x, y);
        [
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.bytes_per_row + x as usize * CHANNELS
    }
}

pub fn bytes_per_row(width: u32) -> usize {
    (width as usize * CHANNELS).div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT
}

/// Stretches `image` to 32x32 (aspect ratio is not kept) and packs it into
/// a [`PixelBuffer`]. Translucent pixels are drawn over black.
pub fn preprocess(image: &DynamicImage) -> Result<PixelBuffer, PreprocessError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PreprocessError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let resized = image
        .resize_exact(MODEL_INPUT_SIDE, MODEL_INPUT_SIDE, FilterType::Triangle)
        .to_rgba8();

    let (width, height) = resized.dimensions();
    if width != MODEL_INPUT_SIDE || height != MODEL_INPUT_SIDE {
        return Err(PreprocessError::Conversion {
            width,
            height,
            expected: MODEL_INPUT_SIDE,
        });
    }

    let bytes_per_row = bytes_per_row(width);
    let len = bytes_per_row * height as usize;

    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| PreprocessError::Allocation { bytes: len })?;
    data.resize(len, 0);

    let mut buffer = PixelBuffer {
        width,
        height,
        bytes_per_row,
        data,
    };

    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let offset = buffer.offset(x, y);
        buffer.data[offset] = SKIP_BYTE;
        buffer.data[offset + 1] = over_black(r, a);
        buffer.data[offset + 2] = over_black(g, a);
        buffer.data[offset + 3] = over_black(b, a);
    }

    Ok(buffer)
}

fn over_black(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}
