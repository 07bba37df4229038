#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia zoom renderer
//!
//! A Julia set is drawn by taking a point on the complex plane,
//! repeatedly squaring it and adding a fixed constant c, and measuring
//! how quickly the result runs off to infinity.  That "velocity" is
//! the number used to color the pixel; points that never leave are
//! painted black.
//!
//! This crate renders a sequence of such images, each one a little
//! narrower than the last, centered on a point that also serves as the
//! Julia constant.  Played back in order the frames form a steady dive
//! into the boundary of the set.  The iteration budget grows with the
//! logarithm of the magnification so the deeper frames keep their
//! detail.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate log;
extern crate num;

pub mod driver;
pub mod errors;
pub mod escape;
pub mod gradient;
pub mod output;
pub mod planes;
pub mod render;
pub mod zoom;

pub use driver::{render_frames, run, RunOptions};
pub use errors::ZoomError;
pub use render::FrameRenderer;
pub use zoom::{FrameParameters, ZoomSchedule};
