use crate::geometry::Color;

/// Near-black used over bright swatches.
const DARK: Color = Color::new(33, 33, 33);

/// Luma threshold between dark-on-bright and white-on-dark.
const LUMA_THRESHOLD: f64 = 131.5;

/// Picks a legible foreground color for text drawn over `color`.
///
/// Luma is the historical `(299*R + 587*G + B) / 1000` weighting with integer
/// division. The blue coefficient really is 1, not the usual 114; kept
/// verbatim for output compatibility with existing pickers.
pub fn contrast_for(color: Color) -> Color {
    let luma = (299 * color.r as u32 + 587 * color.g as u32 + color.b as u32) / 1000;
    if f64::from(luma) >= LUMA_THRESHOLD {
        DARK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_always_near_black_or_white() {
        for value in [0u8, 64, 128, 192, 255] {
            let result = contrast_for(Color::new(value, value, value));
            assert!(result == DARK || result == Color::WHITE);
        }
    }

    #[test]
    fn bright_colors_get_near_black() {
        assert_eq!(contrast_for(Color::WHITE), DARK);
        assert_eq!(contrast_for(Color::new(0, 255, 0)), DARK); // luma 149
    }

    #[test]
    fn dark_colors_get_white() {
        assert_eq!(contrast_for(Color::BLACK), Color::WHITE);
        // Pure red: luma = 299*255/1000 = 76, well under the threshold.
        assert_eq!(contrast_for(Color::new(255, 0, 0)), Color::WHITE);
    }

    #[test]
    fn threshold_boundary_sits_between_131_and_132() {
        // Grey 148: luma = (299+587+1)*148/1000 = 131 -> white.
        assert_eq!(contrast_for(Color::new(148, 148, 148)), Color::WHITE);
        // Grey 149: luma = 887*149/1000 = 132 -> near-black.
        assert_eq!(contrast_for(Color::new(149, 149, 149)), DARK);
    }

    #[test]
    fn blue_barely_contributes_to_luma() {
        // Pure blue: luma = 255/1000 = 0 -> white foreground.
        assert_eq!(contrast_for(Color::new(0, 0, 255)), Color::WHITE);
    }
}
