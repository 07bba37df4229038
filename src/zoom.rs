// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The zoom progression.  Every frame looks at the same point; each
//! one is 2% narrower than the last, and the iteration budget grows
//! with the logarithm of the magnification so the boundary keeps its
//! detail as we dive in.

use num::Complex;

use crate::errors::ZoomError;
use crate::planes::{check_size, ViewMapper};

/// The view center, which is also the Julia constant.
pub const JULIA_CENTER: Complex<f64> = Complex {
    re: -0.70176,
    im: -0.3842,
};

/// How many world units the first frame spans vertically.
pub const INITIAL_SPAN: f64 = 4.0;

/// Iteration budget of the first frame.
pub const INITIAL_LIMIT: usize = 500;

/// Per-frame scale multiplier.
pub const ZOOM_DECAY: f64 = 0.98;

/// Budget at unit scale, for every frame after the first.
pub const LIMIT_BASE: f64 = 500.0;

/// Extra iterations per natural-log unit of magnification.
pub const LIMIT_GROWTH: f64 = 50.0;

/// Default raster width.
pub const DEFAULT_WIDTH: usize = 1920;

/// Default raster height.
pub const DEFAULT_HEIGHT: usize = 1080;

/// Default length of a run.
pub const DEFAULT_FRAMES: usize = 1000;

/// Frame files carry a four-digit number, so no run may go past this.
pub const MAX_FRAME_INDEX: usize = 9999;

/// The iteration budget for a frame drawn at `scale` units per pixel:
/// round(500 + 50·ln(1/scale)).
pub fn limit_for_scale(scale: f64) -> usize {
    (LIMIT_BASE + LIMIT_GROWTH * (1.0 / scale).ln()).round() as usize
}

/// Everything needed to draw one frame.  Instances are never modified;
/// the next frame is a new value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameParameters {
    /// 1-based position in the sequence; also the file number.
    pub index: usize,
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// View center and Julia constant.
    pub center: Complex<f64>,
    /// World units per pixel.
    pub scale: f64,
    /// Iteration budget per pixel.
    pub limit: usize,
}

impl FrameParameters {
    /// The first frame of a run: the whole `INITIAL_SPAN` fits the
    /// raster height, with `INITIAL_LIMIT` iterations.
    pub fn initial(width: usize, height: usize) -> Result<Self, ZoomError> {
        check_size(width, height)?;
        Ok(FrameParameters {
            index: 1,
            width,
            height,
            center: JULIA_CENTER,
            scale: INITIAL_SPAN / height as f64,
            limit: INITIAL_LIMIT,
        })
    }

    /// Parameters of frame `index` (1-based) in closed form, without
    /// walking the frames before it.
    pub fn at(width: usize, height: usize, index: usize) -> Result<Self, ZoomError> {
        if index == 0 {
            return Err(ZoomError::InvalidParameter {
                name: "frame index",
                value: 0.0,
            });
        }
        if index > MAX_FRAME_INDEX {
            return Err(ZoomError::FrameOutOfRange {
                first: index,
                last: index,
                max: MAX_FRAME_INDEX,
            });
        }
        let first = FrameParameters::initial(width, height)?;
        if index == 1 {
            return Ok(first);
        }
        let scale = first.scale * ZOOM_DECAY.powi((index - 1) as i32);
        Ok(FrameParameters {
            index,
            scale,
            limit: limit_for_scale(scale),
            ..first
        })
    }

    /// The frame after this one.
    pub fn next(&self) -> Self {
        let scale = self.scale * ZOOM_DECAY;
        FrameParameters {
            index: self.index + 1,
            scale,
            limit: limit_for_scale(scale),
            ..*self
        }
    }

    /// The pixel-to-world mapping for this frame.
    pub fn mapper(&self) -> Result<ViewMapper, ZoomError> {
        ViewMapper::new(self.width, self.height, self.center, self.scale)
    }
}

/// A lazy, finite run of frames.  Consuming it walks the zoom one
/// frame at a time; it cannot be rewound.
#[derive(Debug)]
pub struct ZoomSchedule {
    upcoming: Option<FrameParameters>,
    last: usize,
}

impl ZoomSchedule {
    /// `frames` frames starting at frame `first` (1-based).  A run of
    /// zero frames is empty.  The whole run must fit under
    /// `MAX_FRAME_INDEX`.
    pub fn new(
        width: usize,
        height: usize,
        first: usize,
        frames: usize,
    ) -> Result<Self, ZoomError> {
        let last = match first.checked_add(frames.saturating_sub(1)) {
            Some(last) if last <= MAX_FRAME_INDEX => last,
            last => {
                return Err(ZoomError::FrameOutOfRange {
                    first,
                    last: last.unwrap_or(usize::MAX),
                    max: MAX_FRAME_INDEX,
                })
            }
        };
        let start = FrameParameters::at(width, height, first)?;
        Ok(ZoomSchedule {
            upcoming: if frames == 0 { None } else { Some(start) },
            last,
        })
    }
}

impl Iterator for ZoomSchedule {
    type Item = FrameParameters;

    fn next(&mut self) -> Option<FrameParameters> {
        let current = self.upcoming.take()?;
        if current.index < self.last {
            self.upcoming = Some(current.next());
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.upcoming {
            Some(ref frame) => self.last - frame.index + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZoomSchedule {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_fixed_constants() {
        let first = FrameParameters::initial(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(first.center, Complex::new(-0.70176, -0.3842));
        assert_eq!(first.scale, 4.0 / 1080.0);
        assert_eq!(first.limit, 500);
    }

    #[test]
    fn empty_raster_is_rejected() {
        assert!(FrameParameters::initial(0, 1080).is_err());
        assert!(ZoomSchedule::new(1920, 0, 1, 10).is_err());
    }

    #[test]
    fn frame_zero_is_rejected() {
        assert!(FrameParameters::at(16, 9, 0).is_err());
    }

    #[test]
    fn oversized_raster_is_rejected() {
        match FrameParameters::initial(70_000, 1) {
            Err(ZoomError::FrameTooLarge { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn run_may_end_on_the_last_numbered_frame() {
        let frames: Vec<FrameParameters> = ZoomSchedule::new(4, 2, 9998, 2).unwrap().collect();
        let indices: Vec<usize> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![9998, 9999]);
    }

    #[test]
    fn run_past_the_last_numbered_frame_is_rejected() {
        match ZoomSchedule::new(4, 2, 9999, 2) {
            Err(ZoomError::FrameOutOfRange { first, last, max }) => {
                assert_eq!((first, last, max), (9999, 10_000, 9999));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(ZoomSchedule::new(4, 2, 10_000, 1).is_err());
        assert!(FrameParameters::at(4, 2, 10_000).is_err());
    }

    #[test]
    fn huge_runs_do_not_overflow() {
        match ZoomSchedule::new(4, 2, usize::MAX, 3) {
            Err(ZoomError::FrameOutOfRange { last, .. }) => assert_eq!(last, usize::MAX),
            other => panic!("unexpected {:?}", other),
        }
        assert!(ZoomSchedule::new(4, 2, 2, usize::MAX).is_err());
    }

    #[test]
    fn second_frame_follows_the_decay_rule() {
        let second = FrameParameters::initial(1920, 1080).unwrap().next();
        let scale = 4.0 / 1080.0 * 0.98;
        assert_eq!(second.index, 2);
        assert_eq!(second.scale, scale);
        assert_eq!(second.limit, (500.0 + 50.0 * (1.0 / scale).ln()).round() as usize);
    }

    #[test]
    fn limit_rounds_to_nearest() {
        // ln(1/e^-2) = 2, so 500 + 100 exactly.
        assert_eq!(limit_for_scale((-2.0f64).exp()), 600);
        assert_eq!(limit_for_scale(1.0), 500);
        // 50·ln(1/0.99) ≈ 0.5025, which rounds up.
        assert_eq!(limit_for_scale(0.99), 501);
    }

    #[test]
    fn stepping_matches_closed_form() {
        let scale0 = 4.0 / 1080.0;
        let mut frame = FrameParameters::initial(1920, 1080).unwrap();
        for n in 1..300 {
            frame = frame.next();
            let closed = scale0 * 0.98f64.powi(n);
            assert!((frame.scale - closed).abs() < 1e-9);
            assert!((frame.scale - closed).abs() / closed < 1e-9);
            assert_eq!(frame.limit, limit_for_scale(closed));

            let direct = FrameParameters::at(1920, 1080, n as usize + 1).unwrap();
            assert_eq!(direct.index, frame.index);
            assert_eq!(direct.limit, frame.limit);
        }
    }

    #[test]
    fn schedule_yields_requested_frames_in_order() {
        let frames: Vec<FrameParameters> = ZoomSchedule::new(64, 36, 1, 25).unwrap().collect();
        assert_eq!(frames.len(), 25);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.index, i + 1);
        }
        for pair in frames.windows(2) {
            assert!(pair[1].scale < pair[0].scale);
            assert!(pair[1].limit >= pair[0].limit);
        }
    }

    #[test]
    fn schedule_can_start_mid_run() {
        let frames: Vec<FrameParameters> = ZoomSchedule::new(64, 36, 10, 3).unwrap().collect();
        let indices: Vec<usize> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![10, 11, 12]);
        let expected = FrameParameters::at(64, 36, 10).unwrap();
        assert_eq!(frames[0], expected);
    }

    #[test]
    fn empty_schedule_yields_nothing() {
        let mut schedule = ZoomSchedule::new(64, 36, 1, 0).unwrap();
        assert_eq!(schedule.len(), 0);
        assert!(schedule.next().is_none());
    }

    #[test]
    fn schedule_reports_remaining_length() {
        let mut schedule = ZoomSchedule::new(64, 36, 1, 4).unwrap();
        assert_eq!(schedule.len(), 4);
        schedule.next();
        assert_eq!(schedule.len(), 3);
        let rest: Vec<_> = schedule.collect();
        assert_eq!(rest.len(), 3);
    }
}
