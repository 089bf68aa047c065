use crate::core::actions::render_progressive::ports::render_surface::RenderSurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
    InvalidDimensions(PixelRectError),
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of buffer bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
            Self::InvalidDimensions(err) => write!(f, "invalid buffer dimensions: {}", err),
        }
    }
}

impl Error for PixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDimensions(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelRectError> for PixelBufferError {
    fn from(err: PixelRectError) -> Self {
        Self::InvalidDimensions(err)
    }
}

pub type PixelBufferData = Vec<u8>;

/// In-memory RGBA render surface, row-major from the top-left pixel.
#[derive(Debug)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
    presented_frames: u64,
}

impl PixelBuffer {
    /// Zeroed (transparent black) buffer covering `pixel_rect`.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
            presented_frames: 0,
        }
    }

    pub fn with_dimensions(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        Ok(Self::new(PixelRect::new(0, 0, width, height)?))
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            pixel_rect,
            buffer,
            presented_frames: 0,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Number of times the buffer has been presented.
    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    /// Reallocates the buffer for new dimensions, clearing its contents.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelBufferError> {
        let pixel_rect = PixelRect::new(0, 0, width, height)?;

        self.buffer = vec![0; pixel_rect_to_buffer_size(pixel_rect)];
        self.pixel_rect = pixel_rect;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let index = self.index_of(x, y)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour::with_alpha(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = u32::try_from(pixel.x)
            .ok()
            .zip(u32::try_from(pixel.y).ok())
            .and_then(|(x, y)| self.index_of(x, y))
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })?;

        self.write(index, colour);
        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if !self.pixel_rect.contains(x, y) {
            return None;
        }

        let relative_x = (x - self.pixel_rect.left()) as usize;
        let relative_y = (y - self.pixel_rect.top()) as usize;

        Some((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }

    fn write(&mut self, index: usize, colour: Colour) {
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());
    }
}

impl RenderSurface for PixelBuffer {
    fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    fn put_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(index) = self.index_of(x, y) {
            self.write(index, colour);
        }
    }

    fn put_rectangle(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, colour: Colour) {
        let left = x1.max(self.pixel_rect.left());
        let top = y1.max(self.pixel_rect.top());
        let right = x2.min(self.pixel_rect.right());
        let bottom = y2.min(self.pixel_rect.bottom());

        if left >= right || top >= bottom {
            return;
        }

        let rgba = colour.to_rgba();
        let row_bytes = (right - left) as usize * BYTES_PER_PIXEL;

        for y in top..bottom {
            let Some(start) = self.index_of(left, y) else {
                continue;
            };

            self.buffer[start..start + row_bytes]
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .for_each(|pixel| pixel.copy_from_slice(&rgba));
        }
    }

    fn present(&mut self) {
        self.presented_frames += 1;
    }
}
