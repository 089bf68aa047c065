use crate::core::actions::render_progressive::ports::colour_palette::ColourPalette;
use crate::core::fractals::mandelbrot::colour_palettes::{
    amber::AmberPalette, hue_cycle::HueCyclePalette, kinds::PaletteKind, smooth::SmoothPalette,
};

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Box<dyn ColourPalette> {
    match kind {
        PaletteKind::Smooth => Box::new(SmoothPalette),
        PaletteKind::HueCycle => Box::new(HueCyclePalette),
        PaletteKind::Amber => Box::new(AmberPalette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PaletteKind::ALL.first(), Some(&PaletteKind::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in PaletteKind::ALL {
            let palette = palette_factory(kind);
            assert_eq!(palette.kind(), kind);
            assert_eq!(palette.escape_radius(), kind.escape_radius());
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in PaletteKind::ALL {
            let palette = palette_factory(kind);
            assert_eq!(palette.display_name(), kind.display_name());
            assert_eq!(kind.to_string(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteKind::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
