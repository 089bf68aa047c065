use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use std::error::Error;
use std::fmt;

const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
const DEFAULT_SIZE: f64 = 1.0;
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ExplorerConfigError {
    NonPositiveSize { size: f64 },
    NonFiniteCenter { center: Complex },
    EmptySurface { width: u32, height: u32 },
}

impl fmt::Display for ExplorerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { size } => {
                write!(f, "view size must be positive and finite: {}", size)
            }
            Self::NonFiniteCenter { center } => {
                write!(f, "view centre must be finite: {}{:+}i", center.real, center.imag)
            }
            Self::EmptySurface { width, height } => {
                write!(f, "surface must be at least 1x1 pixels: {}x{}", width, height)
            }
        }
    }
}

impl Error for ExplorerConfigError {}

/// Host-supplied starting parameters for an explorer session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub center: Complex,
    /// Half-height of the view in plane units.
    pub size: f64,
    pub width: u32,
    pub height: u32,
    pub palette_kind: PaletteKind,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            size: DEFAULT_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette_kind: PaletteKind::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn new(
        center: Complex,
        size: f64,
        width: u32,
        height: u32,
        palette_kind: PaletteKind,
    ) -> Result<Self, ExplorerConfigError> {
        let config = Self {
            center,
            size,
            width,
            height,
            palette_kind,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ExplorerConfigError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ExplorerConfigError::NonPositiveSize { size: self.size });
        }

        if !(self.center.real.is_finite() && self.center.imag.is_finite()) {
            return Err(ExplorerConfigError::NonFiniteCenter { center: self.center });
        }

        if self.width == 0 || self.height == 0 {
            return Err(ExplorerConfigError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Same session with the surface dimensions replaced.
    #[must_use]
    pub fn with_dimensions(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    #[must_use]
    pub fn default_center() -> Complex {
        DEFAULT_CENTER
    }

    #[must_use]
    pub fn default_size() -> f64 {
        DEFAULT_SIZE
    }
}
