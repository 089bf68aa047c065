#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Smooth,
    HueCycle,
    Amber,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Smooth, Self::HueCycle, Self::Amber];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Smooth => "Smooth potential",
            Self::HueCycle => "Hue cycle",
            Self::Amber => "Amber lightness",
        }
    }

    /// Escape radius (not squared) the palette is tuned for.
    #[must_use]
    pub const fn escape_radius(self) -> f64 {
        match self {
            Self::Amber => 2.0,
            Self::Smooth | Self::HueCycle => 10.0,
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        Self::Smooth
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
