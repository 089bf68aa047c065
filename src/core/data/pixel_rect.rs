use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    Empty { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "pixel rect must cover at least one pixel: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl PixelRect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self, PixelRectError> {
        if right <= left || bottom <= top {
            return Err(PixelRectError::Empty {
                width: i64::from(right) - i64::from(left),
                height: i64::from(bottom) - i64::from(top),
            });
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// The `step`-sized block whose top-left corner is `(x, y)`, clipped to a
    /// `width` x `height` surface. `(x, y)` must lie on the surface.
    #[must_use]
    pub fn block(x: u32, y: u32, step: u32, width: u32, height: u32) -> Self {
        debug_assert!(x < width && y < height && step > 0);

        Self {
            left: x,
            top: y,
            right: x.saturating_add(step).min(width),
            bottom: y.saturating_add(step).min(height),
        }
    }

    #[must_use]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(2, 3, 10, 7).unwrap();

        assert_eq!(rect.left(), 2);
        assert_eq!(rect.top(), 3);
        assert_eq!(rect.right(), 10);
        assert_eq!(rect.bottom(), 7);
        assert_eq!(rect.width(), 8);
        assert_eq!(rect.height(), 4);
        assert_eq!(rect.size(), 32);
    }

    #[test]
    fn test_pixel_rect_must_not_be_empty() {
        assert_eq!(
            PixelRect::new(5, 0, 5, 10),
            Err(PixelRectError::Empty { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(0, 4, 3, 1),
            Err(PixelRectError::Empty { width: 3, height: -3 })
        );
        assert!(PixelRect::new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn test_block_inside_surface_is_full_size() {
        let block = PixelRect::block(16, 32, 16, 100, 100);

        assert_eq!(block, PixelRect::new(16, 32, 32, 48).unwrap());
    }

    #[test]
    fn test_block_is_clipped_at_surface_edge() {
        let block = PixelRect::block(96, 96, 16, 100, 98);

        assert_eq!(block.width(), 4);
        assert_eq!(block.height(), 2);
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = PixelRect::new(0, 0, 4, 4).unwrap();

        assert!(rect.contains(0, 0));
        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 0));
        assert!(!rect.contains(0, 4));
    }
}
