// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  A point's "velocity" is the number of
//! times we can square it and add the constant before its magnitude
//! leaves the radius-2 disc, beyond which the orbit is guaranteed to
//! run off to infinity.

use num::Complex;

/// The squared escape radius.  Comparing against |z|² avoids a square
/// root on every step.
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// Starting from `z0`, repeatedly apply z ← z² + c and count the
/// applications until either |z|² reaches `ESCAPE_NORM_SQR` or the
/// count reaches `limit`.  The magnitude is tested before every
/// application, so a point that starts outside the disc scores zero.
/// Points that never escape score exactly `limit`.
///
/// Both `z0` and `c` must be finite.
#[inline]
pub fn escape_time(z0: Complex<f64>, c: Complex<f64>, limit: usize) -> usize {
    debug_assert!(
        z0.is_finite() && c.is_finite(),
        "escape_time requires finite inputs"
    );
    let mut z = z0;
    let mut iteration = 0;
    while z.norm_sqr() < ESCAPE_NORM_SQR && iteration < limit {
        z = z * z + c;
        iteration += 1;
    }
    iteration
}
