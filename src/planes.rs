// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the ViewMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper-left, and a window on the complex plane described by its
//! center and the width of a single pixel.
use num::Complex;

use crate::errors::ZoomError;

/// Bytes per pixel in the frame buffer.
pub const CHANNELS: usize = 3;

/// The largest width or height a frame may have.  JPEG headers store
/// each side in 16 bits.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Reject rasters with no pixels, or with a side longer than
/// `MAX_DIMENSION`.
pub fn check_size(width: usize, height: usize) -> Result<(), ZoomError> {
    if width == 0 || height == 0 {
        return Err(ZoomError::EmptyFrame { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ZoomError::FrameTooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Describes the column, row of a pixel.  Row zero is the top of the
/// image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

// We don't need a Point, as a single Complex number is a Point.

/// Maps pixels of a width x height raster onto the complex plane.  The
/// raster's midpoint (rounded down) lands on `center`, and each pixel
/// step moves `scale` units along the matching axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewMapper {
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// The complex number under the middle pixel.
    pub center: Complex<f64>,
    /// World units per pixel.
    pub scale: f64,
}

impl ViewMapper {
    /// Constructor.  Rejects empty or oversized rasters, non-finite
    /// centers, and scales that are not finite and positive.
    pub fn new(
        width: usize,
        height: usize,
        center: Complex<f64>,
        scale: f64,
    ) -> Result<ViewMapper, ZoomError> {
        check_size(width, height)?;
        if !center.re.is_finite() {
            return Err(ZoomError::InvalidParameter {
                name: "center.re",
                value: center.re,
            });
        }
        if !center.im.is_finite() {
            return Err(ZoomError::InvalidParameter {
                name: "center.im",
                value: center.im,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ZoomError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }
        Ok(ViewMapper {
            width,
            height,
            center,
            scale,
        })
    }

    /// The total number of pixels in the raster.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Describes that the raster is of a size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a pixel, return the complex number under it.  The offset
    /// from the midpoint is taken in whole pixels before scaling.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let dx = pixel.0 as i64 - (self.width / 2) as i64;
        let dy = pixel.1 as i64 - (self.height / 2) as i64;
        Complex::new(
            self.center.re + (dx as f64) * self.scale,
            self.center.im + (dy as f64) * self.scale,
        )
    }

    /// The byte offset of a pixel's red channel in a row-major RGB
    /// buffer.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> usize {
        (pixel.1 * self.width + pixel.0) * CHANNELS
    }
}
