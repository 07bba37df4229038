// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame loop.  Frames are drawn and written strictly in order;
//! a frame is on disk before the next one is started.  The first
//! failure ends the run.

use log::{debug, error, info};
use std::path::PathBuf;

use crate::errors::ZoomError;
use crate::output::{prepare_output_dir, FrameSink, JpegDirectory};
use crate::render::FrameRenderer;
use crate::zoom::{ZoomSchedule, DEFAULT_FRAMES, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// How a run is carried out.  None of these change what a given frame
/// looks like.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Directory the frames are written to.
    pub output: PathBuf,
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// 1-based index of the first frame to draw.
    pub first: usize,
    /// How many frames to draw.
    pub frames: usize,
    /// Row workers per frame; 1 renders on the calling thread.
    pub threads: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            output: PathBuf::from("Output"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            first: 1,
            frames: DEFAULT_FRAMES,
            threads: 1,
        }
    }
}

/// Draw every frame in `options` and hand each one to `sink`.
/// Returns the number of frames written.
pub fn render_frames<S: FrameSink>(options: &RunOptions, sink: &mut S) -> Result<usize, ZoomError> {
    let schedule = ZoomSchedule::new(options.width, options.height, options.first, options.frames)?;
    let mut written = 0;
    for frame in schedule {
        debug!(
            "Frame {}: scale {:e}, {} iterations",
            frame.index, frame.scale, frame.limit
        );
        let renderer = FrameRenderer::new(&frame)?;
        let pixels = renderer.render(options.threads)?;
        match sink.write_frame(&frame, &pixels) {
            Ok(location) => info!("Image saved as {}", location),
            Err(e) => {
                error!("Frame {} was not saved: {}", frame.index, e);
                return Err(e);
            }
        }
        written += 1;
    }
    Ok(written)
}

/// The whole program: create the output directory, then write every
/// frame as a numbered JPEG inside it.
pub fn run(options: &RunOptions) -> Result<usize, ZoomError> {
    prepare_output_dir(&options.output)?;
    let mut sink = JpegDirectory::new(options.output.clone());
    info!(
        "Rendering {} frame(s) of {}x{} into {} on {} thread(s)",
        options.frames,
        options.width,
        options.height,
        options.output.display(),
        options.threads
    );
    render_frames(options, &mut sink)
}
