use crate::core::data::complex::Complex;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::point::Point;

/// Factor applied to `size` by a double-click zoom.
pub const ZOOM_IN_FACTOR: f64 = 0.2;

/// Lower bound on the multiplicative change a single wheel event may apply,
/// keeping `size` positive for very large deltas.
pub const MIN_WHEEL_SCALE: f64 = 0.05;

/// Raw wheel movement as reported by the input device. Positive zooms in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WheelDelta {
    /// Devices reporting in 120-unit notches (one notch = 120).
    Notched(f64),
    /// Devices reporting a continuous delta (trackpads, high resolution wheels).
    Continuous(f64),
}

impl WheelDelta {
    /// Signed zoom step in device-independent units.
    #[must_use]
    pub fn normalized(self) -> f64 {
        match self {
            Self::Notched(delta) if delta % 120.0 == 0.0 => delta / 120.0,
            Self::Notched(delta) => delta / 12.0,
            Self::Continuous(delta) if delta % 3.0 != 0.0 => delta * 10.0,
            Self::Continuous(delta) => delta / 3.0,
        }
    }
}

/// The current view: a centre point, the half-height `size` of the view in
/// plane units, and the pixel dimensions of the surface it is drawn into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    size: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    /// `size` must be positive and both dimensions non-zero.
    #[must_use]
    pub fn new(center: Complex, size: f64, width: u32, height: u32) -> Self {
        Self {
            center,
            size,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn bounds(&self) -> PlaneBounds {
        let half_width = self.size * self.aspect_ratio();

        PlaneBounds {
            re_min: self.center.real - half_width,
            re_max: self.center.real + half_width,
            im_min: self.center.imag - self.size,
            im_max: self.center.imag + self.size,
        }
    }

    #[must_use]
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> Complex {
        self.bounds().pixel_to_plane(px, py, self.width, self.height)
    }

    #[must_use]
    pub fn plane_to_pixel(&self, point: Complex) -> (f64, f64) {
        self.bounds().plane_to_pixel(point, self.width, self.height)
    }

    /// Recentres on the clicked pixel and zooms in by [`ZOOM_IN_FACTOR`].
    pub fn zoom_at(&mut self, click: Point) {
        let width_fraction =
            (f64::from(click.x) - f64::from(self.width) / 2.0) / f64::from(self.width);
        let height_fraction =
            (f64::from(click.y) - f64::from(self.height) / 2.0) / f64::from(self.height);

        self.translate_by_fraction(width_fraction, height_fraction);
        self.size *= ZOOM_IN_FACTOR;
    }

    pub fn wheel_zoom(&mut self, delta: WheelDelta) {
        let scale = 1.0 - delta.normalized() / f64::from(self.height);

        self.size *= scale.max(MIN_WHEEL_SCALE);
    }

    /// Moves the view so the plane point under `from` ends up under `to`.
    pub fn pan(&mut self, from: Point, to: Point) {
        let grabbed = self.pixel_to_plane(f64::from(from.x), f64::from(from.y));
        let released = self.pixel_to_plane(f64::from(to.x), f64::from(to.y));

        self.center = self.center - (released - grabbed);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_view(&mut self, center: Complex, size: f64) {
        self.center = center;
        self.size = size;
    }

    fn translate_by_fraction(&mut self, width_fraction: f64, height_fraction: f64) {
        let bounds = self.bounds();

        self.center = self.center
            + Complex {
                real: bounds.re_span() * width_fraction,
                imag: bounds.im_span() * height_fraction,
            };
    }
}
