use crate::errors::ProcessingError;
use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage, RgbaImage};

/// Channel layout of a [`PixelBuffer`], one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
    Rgb8,
    Luma8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Luma8 => 1,
        }
    }
}

/// A width x height grid of 8-bit pixels with an explicit row stride.
///
/// Rows may carry padding after the last pixel (`stride > width * bpp`), which
/// is how decoders and GPU uploads commonly hand buffers around. Every accessor
/// skips the padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw bytes, checking that `stride` covers a full row and that
    /// `data` holds every row.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, ProcessingError> {
        let row_bytes = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| ProcessingError::invalid(format!("row of {} pixels is too large", width)))?;
        if stride < row_bytes {
            return Err(ProcessingError::invalid(format!(
                "stride {} is smaller than a row of {} bytes",
                stride, row_bytes
            )));
        }

        let required = if height == 0 {
            0
        } else {
            stride
                .checked_mul(height as usize - 1)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or_else(|| {
                    ProcessingError::invalid(format!(
                        "stride {} over {} rows does not fit in memory",
                        stride, height
                    ))
                })?
        };
        if data.len() < required {
            return Err(ProcessingError::invalid(format!(
                "buffer holds {} bytes, {}x{} needs {}",
                data.len(),
                width,
                height,
                required
            )));
        }

        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Converts any decoded image into a tightly packed RGBA buffer.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from_rgba(image.to_rgba8())
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self::packed(image.width(), image.height(), PixelFormat::Rgba8, image.into_raw())
    }

    pub fn from_rgb(image: RgbImage) -> Self {
        Self::packed(image.width(), image.height(), PixelFormat::Rgb8, image.into_raw())
    }

    pub fn from_gray(image: GrayImage) -> Self {
        Self::packed(image.width(), image.height(), PixelFormat::Luma8, image.into_raw())
    }

    fn packed(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width as usize * format.bytes_per_pixel(),
            format,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn row_bytes(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Iterates the pixel bytes of each row, without stride padding.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let row_bytes = self.row_bytes();
        (0..self.height as usize).map(move |y| {
            let start = y * self.stride;
            &self.data[start..start + row_bytes]
        })
    }

    /// Channel bytes of the pixel at (x, y).
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let bpp = self.format.bytes_per_pixel();
        let start = y as usize * self.stride + x as usize * bpp;
        &self.data[start..start + bpp]
    }

    /// Copies the pixels into a contiguous vector, dropping row padding.
    pub fn to_packed_vec(&self) -> Vec<u8> {
        if self.stride == self.row_bytes() {
            return self.data[..self.row_bytes() * self.height as usize].to_vec();
        }
        let mut packed = Vec::with_capacity(self.row_bytes() * self.height as usize);
        for row in self.rows() {
            packed.extend_from_slice(row);
        }
        packed
    }

    /// Checks the preconditions shared by both transforms.
    pub(crate) fn ensure_rgba_source(&self) -> Result<(), ProcessingError> {
        if self.is_empty() {
            return Err(ProcessingError::invalid(format!(
                "image is empty ({}x{})",
                self.width, self.height
            )));
        }
        if self.format != PixelFormat::Rgba8 {
            return Err(ProcessingError::invalid(format!(
                "expected 4-channel RGBA input, got {:?}",
                self.format
            )));
        }
        Ok(())
    }

    pub(crate) fn to_rgba_image(&self) -> Result<RgbaImage, ProcessingError> {
        ImageBuffer::from_raw(self.width, self.height, self.to_packed_vec())
            .ok_or_else(|| ProcessingError::failure("RGBA buffer size mismatch"))
    }

    /// Converts to an `image` value for encoding or display.
    pub fn to_dynamic(&self) -> Result<DynamicImage, ProcessingError> {
        let (w, h) = self.dimensions();
        let packed = self.to_packed_vec();
        let image = match self.format {
            PixelFormat::Rgba8 => ImageBuffer::from_raw(w, h, packed).map(DynamicImage::ImageRgba8),
            PixelFormat::Rgb8 => ImageBuffer::from_raw(w, h, packed).map(DynamicImage::ImageRgb8),
            PixelFormat::Luma8 => ImageBuffer::from_raw(w, h, packed).map(DynamicImage::ImageLuma8),
        };
        image.ok_or_else(|| ProcessingError::failure(format!("{:?} buffer size mismatch", self.format)))
    }

    /// RGBA bytes suitable for an `egui::ColorImage`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for row in self.rows() {
            match self.format {
                PixelFormat::Rgba8 => out.extend_from_slice(row),
                PixelFormat::Rgb8 => {
                    for px in row.chunks_exact(3) {
                        out.extend_from_slice(&[px[0], px[1], px[2], 255]);
                    }
                }
                PixelFormat::Luma8 => {
                    for &v in row {
                        out.extend_from_slice(&[v, v, v, 255]);
                    }
                }
            }
        }
        out
    }
}
