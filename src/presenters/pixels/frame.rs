//! Copies the render surface into the window framebuffer.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

pub const SCAN_LINE_COLOUR: Colour = Colour::new(255, 0, 0);

/// Copies RGBA `src` into `dst` and draws the scan indicator across row
/// `scan_line`. Returns false, leaving `dst` untouched, when the two buffers
/// differ in size (a resize is in flight).
pub fn compose_frame(src: &[u8], dst: &mut [u8], width: u32, scan_line: Option<u32>) -> bool {
    if src.len() != dst.len() {
        return false;
    }

    dst.copy_from_slice(src);

    if let Some(row) = scan_line {
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let start = row as usize * row_bytes;

        if let Some(line) = dst.get_mut(start..start + row_bytes) {
            let rgba = SCAN_LINE_COLOUR.to_rgba();
            line.chunks_exact_mut(BYTES_PER_PIXEL)
                .for_each(|pixel| pixel.copy_from_slice(&rgba));
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_matching_buffers() {
        let src: Vec<u8> = (0..16).collect();
        let mut dst = vec![0; 16];

        assert!(compose_frame(&src, &mut dst, 2, None));
        assert_eq!(dst, src);
    }

    #[test]
    fn test_skips_mismatched_buffers() {
        let mut dst = vec![7; 8];

        assert!(!compose_frame(&[0; 16], &mut dst, 2, None));
        assert_eq!(dst, vec![7; 8]);
    }

    #[test]
    fn test_draws_scan_line_over_row() {
        let src = vec![0; 2 * 3 * 4];
        let mut dst = vec![0; 2 * 3 * 4];

        compose_frame(&src, &mut dst, 2, Some(1));

        assert_eq!(&dst[0..8], &[0; 8]);
        assert_eq!(&dst[8..16], &[255, 0, 0, 255, 255, 0, 0, 255]);
        assert_eq!(&dst[16..24], &[0; 8]);
    }

    #[test]
    fn test_scan_line_outside_frame_is_ignored() {
        let src = vec![1; 2 * 2 * 4];
        let mut dst = vec![0; 2 * 2 * 4];

        assert!(compose_frame(&src, &mut dst, 2, Some(5)));
        assert_eq!(dst, src);
    }
}
