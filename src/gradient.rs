// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps an escape count to a color.  The palette is a fixed set of
//! Bernstein-like polynomials in t and (1 - t): blue peaks early, green
//! in the middle, red late, which gives the blue-to-gold fade around
//! the edge of the set.

/// One RGB pixel, in the order the encoder expects.
pub type Rgb = [u8; 3];

/// Color of points that never escaped.
pub const INSIDE: Rgb = [0, 0, 0];

/// Weight of the red channel, 9·(1−t)·t³.
pub const RED_WEIGHT: f64 = 9.0;
/// Weight of the green channel, 15·(1−t)²·t².
pub const GREEN_WEIGHT: f64 = 15.0;
/// Weight of the blue channel, 8.5·(1−t)³·t.
pub const BLUE_WEIGHT: f64 = 8.5;

const CHANNEL_MAX: f64 = 255.0;

/// The untruncated channel intensities for a normalized escape time
/// `t` in [0, 1).  Each value lies in [0, 255] over that range.
pub fn channels(t: f64) -> (f64, f64, f64) {
    let s = 1.0 - t;
    // Multiplication order is kept left to right so the truncated
    // bytes are reproducible.
    let r = RED_WEIGHT * s * t * t * t * CHANNEL_MAX;
    let g = GREEN_WEIGHT * s * s * t * t * CHANNEL_MAX;
    let b = BLUE_WEIGHT * s * s * s * t * CHANNEL_MAX;
    (r, g, b)
}

/// Color for a point that took `iteration` steps to escape, out of a
/// budget of `limit`.  Points that used the whole budget are inside
/// the set and are painted black.  Channels are truncated, not
/// rounded.
pub fn color(iteration: usize, limit: usize) -> Rgb {
    if iteration == limit {
        return INSIDE;
    }
    let t = iteration as f64 / limit as f64;
    let (r, g, b) = channels(t);
    [r as u8, g as u8, b as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_budget_is_black() {
        for limit in &[0, 1, 10, 500, 1337] {
            assert_eq!(color(*limit, *limit), INSIDE);
        }
    }

    #[test]
    fn immediate_escape_is_black_too() {
        assert_eq!(color(0, 500), [0, 0, 0]);
    }

    #[test]
    fn midpoint_truncates_toward_zero() {
        // t = 0.5: r = 143.4375, g = 239.0625, b = 135.46875
        assert_eq!(color(5, 10), [143, 239, 135]);
    }

    #[test]
    fn late_escape_leans_red() {
        // t = 0.75: r ≈ 242.05, g ≈ 134.47, b ≈ 25.4
        assert_eq!(color(75, 100), [242, 134, 25]);
    }

    #[test]
    fn sampled_channels_stay_in_byte_range() {
        for step in 0..100 {
            let t = f64::from(step) / 100.0;
            let (r, g, b) = channels(t);
            for value in &[r, g, b] {
                assert!(*value >= 0.0 && *value <= 255.0, "t = {} gave {}", t, value);
            }
        }
    }

    #[test]
    fn color_is_pure() {
        for iteration in 0..50 {
            assert_eq!(color(iteration, 50), color(iteration, 50));
        }
    }
}
