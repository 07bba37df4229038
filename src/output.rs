// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting finished frames onto disk.

use image::jpeg::JPEGEncoder;
use image::ColorType;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::ZoomError;
use crate::planes::check_size;
use crate::zoom::FrameParameters;

/// Encoder quality setting; the highest JPEG offers.
pub const JPEG_QUALITY: u8 = 100;

/// `image_0001.jpg`, `image_0002.jpg`, ...
pub fn frame_filename(index: usize) -> String {
    format!("image_{:04}.jpg", index)
}

/// Make sure `dir` exists, creating any missing parents.
pub fn prepare_output_dir(dir: &Path) -> Result<(), ZoomError> {
    fs::create_dir_all(dir).map_err(|cause| ZoomError::OutputDirectory {
        path: dir.display().to_string(),
        cause,
    })
}

fn write_jpeg(path: &Path, pixels: &[u8], width: usize, height: usize) -> io::Result<()> {
    let mut output = BufWriter::new(File::create(path)?);
    {
        let mut encoder = JPEGEncoder::new_with_quality(&mut output, JPEG_QUALITY);
        encoder.encode(pixels, width as u32, height as u32, ColorType::RGB(8))?;
    }
    output.flush()
}

/// Encode an RGB buffer as a JPEG at `path`.  Sizes a JPEG header
/// cannot hold are refused before anything is written.
pub fn save_jpeg(path: &Path, pixels: &[u8], width: usize, height: usize) -> Result<(), ZoomError> {
    check_size(width, height)?;
    write_jpeg(path, pixels, width, height).map_err(|cause| ZoomError::Encode {
        path: path.display().to_string(),
        cause,
    })
}

/// Somewhere to put finished frames.
pub trait FrameSink {
    /// Store one frame.  Returns where it went, for logging.
    fn write_frame(&mut self, frame: &FrameParameters, pixels: &[u8]) -> Result<String, ZoomError>;
}

/// Writes each frame as a numbered JPEG in a directory.
#[derive(Debug)]
pub struct JpegDirectory {
    dir: PathBuf,
}

impl JpegDirectory {
    /// Frames go into `dir`, which must already exist; see
    /// `prepare_output_dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        JpegDirectory { dir: dir.into() }
    }

    /// Where frame `index` is written.
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(frame_filename(index))
    }
}

impl FrameSink for JpegDirectory {
    fn write_frame(&mut self, frame: &FrameParameters, pixels: &[u8]) -> Result<String, ZoomError> {
        let path = self.frame_path(frame.index);
        save_jpeg(&path, pixels, frame.width, frame.height)?;
        Ok(path.display().to_string())
    }
}
