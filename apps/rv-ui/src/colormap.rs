//! Viridis colormap for field rendering.

use egui::Color32;

/// Anchor colors sampled uniformly from the viridis colormap.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Map a normalized value in `[0, 1]` to a viridis color.
///
/// Non-finite input (a masked grid point) maps to a fully transparent pixel
/// so gaps stay gaps in the rendered field.
pub fn viridis(t: f64) -> Color32 {
    if !t.is_finite() {
        return Color32::TRANSPARENT;
    }

    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - idx as f64;
    let a = VIRIDIS[idx];
    let b = VIRIDIS[idx + 1];

    let lerp = |lo: u8, hi: u8| (lo as f64 + frac * (hi as f64 - lo as f64)).round() as u8;
    Color32::from_rgb(lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_anchors() {
        assert_eq!(viridis(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(viridis(1.0), Color32::from_rgb(253, 231, 37));
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(viridis(-0.5), viridis(0.0));
        assert_eq!(viridis(1.5), viridis(1.0));
    }

    #[test]
    fn nan_is_transparent() {
        assert_eq!(viridis(f64::NAN), Color32::TRANSPARENT);
    }
}
