// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by every stage of the renderer.

use failure::Fail;
use std::io;

/// Everything that can stop a zoom run.  Numeric problems are caught
/// when a frame's parameters are built; I/O problems come from the
/// output directory and the JPEG encoder.
#[derive(Debug, Fail)]
pub enum ZoomError {
    /// A scale, coordinate, or index that is not finite and positive.
    #[fail(display = "Parameter {} must be finite and positive, got {}", name, value)]
    InvalidParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A render size with no pixels in it.
    #[fail(display = "Render size {}x{} has no pixels", width, height)]
    EmptyFrame {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// A render size wider or taller than a JPEG can record.
    #[fail(
        display = "Render size {}x{} is too large; each side must be at most {}",
        width, height, max
    )]
    FrameTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
        /// The largest allowed side.
        max: usize,
    },

    /// A frame index that cannot be named with four digits.
    #[fail(
        display = "Frames {} through {} run past the last numbered frame {}",
        first, last, max
    )]
    FrameOutOfRange {
        /// First frame of the run.
        first: usize,
        /// Last frame of the run, saturated on overflow.
        last: usize,
        /// The highest frame index allowed.
        max: usize,
    },

    /// The output directory could not be created.
    #[fail(display = "Could not prepare output directory {}: {}", path, cause)]
    OutputDirectory {
        /// The directory we tried to create.
        path: String,
        /// What the filesystem said.
        #[cause]
        cause: io::Error,
    },

    /// A frame could not be written to disk.
    #[fail(display = "Could not write frame {}: {}", path, cause)]
    Encode {
        /// The file we tried to write.
        path: String,
        /// What the filesystem or encoder said.
        #[cause]
        cause: io::Error,
    },

    /// One of the row workers panicked before the frame was complete.
    #[fail(display = "A row worker panicked while rendering the frame")]
    WorkerPanic,
}
