use crate::core::data::colour::Colour;

/// Accumulates colour samples and averages them channel by channel.
///
/// Only running per-channel totals are kept, so any number of samples can be
/// added.
#[derive(Debug, Clone, Default)]
pub struct ColourBlender {
    totals: [u64; 4],
    count: u64,
}

impl ColourBlender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, colour: Colour) {
        for (total, channel) in self.totals.iter_mut().zip(colour.to_rgba()) {
            *total += u64::from(channel);
        }
        self.count += 1;
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Per-channel mean of every sample added so far, rounded to nearest.
    ///
    /// Returns `None` when nothing has been added.
    #[must_use]
    pub fn resolve(&self) -> Option<Colour> {
        if self.is_empty() {
            return None;
        }

        let n = self.count as f64;
        let [r, g, b, a] = self.totals.map(|total| (total as f64 / n).round() as u8);

        Some(Colour::with_alpha(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_is_none() {
        let blender = ColourBlender::new();

        assert!(blender.is_empty());
        assert_eq!(blender.resolve(), None);
    }

    #[test]
    fn test_identical_samples_resolve_to_same_colour() {
        let colour = Colour::with_alpha(12, 200, 77, 255);
        let mut blender = ColourBlender::new();

        for _ in 0..7 {
            blender.add(colour);
        }

        assert_eq!(blender.len(), 7);
        assert_eq!(blender.resolve(), Some(colour));
    }

    #[test]
    fn test_resolve_averages_and_rounds() {
        let mut blender = ColourBlender::new();
        blender.add(Colour::with_alpha(0, 0, 0, 255));
        blender.add(Colour::with_alpha(255, 1, 10, 0));

        // (0 + 255) / 2 = 127.5 rounds up, (0 + 1) / 2 = 0.5 rounds up
        assert_eq!(
            blender.resolve(),
            Some(Colour::with_alpha(128, 1, 5, 128))
        );
    }

    #[test]
    fn test_clear_discards_samples() {
        let mut blender = ColourBlender::new();
        blender.add(Colour::new(255, 0, 0));
        blender.clear();
        blender.add(Colour::new(0, 0, 255));

        assert_eq!(blender.resolve(), Some(Colour::new(0, 0, 255)));
    }

    #[test]
    fn test_many_bright_samples_do_not_overflow() {
        let white = Colour::new(255, 255, 255);
        let mut blender = ColourBlender::new();

        // 255 * 17M exceeds u32::MAX
        for _ in 0..17_000_000 {
            blender.add(white);
        }

        assert_eq!(blender.len(), 17_000_000);
        assert_eq!(blender.resolve(), Some(white));
    }
}
