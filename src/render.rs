// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fills a frame's RGB buffer.  Every pixel is independent of every
//! other, so the threaded version hands out whole rows from a shared
//! queue and joins all workers before the buffer is returned.  Both
//! versions produce the same bytes.

use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use crate::errors::ZoomError;
use crate::escape::escape_time;
use crate::gradient::{color, Rgb};
use crate::planes::{Pixel, ViewMapper, CHANNELS};
use crate::zoom::FrameParameters;

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, u8>>>>;

/// Draws one frame of the Julia set.  The view center doubles as the
/// Julia constant, so every pixel is iterated with c = center.
#[derive(Debug)]
pub struct FrameRenderer {
    mapper: ViewMapper,
    limit: usize,
}

impl FrameRenderer {
    /// Build a renderer for one frame of the zoom.
    pub fn new(frame: &FrameParameters) -> Result<Self, ZoomError> {
        Ok(FrameRenderer {
            mapper: frame.mapper()?,
            limit: frame.limit,
        })
    }

    /// Build a renderer for an arbitrary view and iteration budget.
    pub fn with_mapper(mapper: ViewMapper, limit: usize) -> Self {
        FrameRenderer { mapper, limit }
    }

    /// Size of the finished RGB buffer in bytes.
    pub fn buffer_len(&self) -> usize {
        self.mapper.len() * CHANNELS
    }

    /// The color of a single pixel.
    pub fn shade(&self, pixel: &Pixel) -> Rgb {
        let z0 = self.mapper.pixel_to_point(pixel);
        let iteration = escape_time(z0, self.mapper.center, self.limit);
        color(iteration, self.limit)
    }

    /// Fill one row.  `pixels` is exactly one row of the RGB buffer.
    fn render_row(&self, row: usize, pixels: &mut [u8]) {
        for (column, rgb) in pixels.chunks_mut(CHANNELS).enumerate() {
            rgb.copy_from_slice(&self.shade(&Pixel(column, row)));
        }
    }

    fn row_len(&self) -> usize {
        self.mapper.width * CHANNELS
    }

    /// The main function for single-threaded rendering: sweep the
    /// raster in row-major order.
    pub fn render_single(&self) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.buffer_len()];
        for (row, pixels) in buffer.chunks_mut(self.row_len()).enumerate() {
            self.render_row(row, pixels);
        }
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  Workers pull row indices from a shared queue
    /// until it runs dry; the frame is only returned once every worker
    /// has been joined.
    pub fn render(&self, threads: usize) -> Result<Vec<u8>, ZoomError> {
        if threads <= 1 {
            return Ok(self.render_single());
        }
        let row_len = self.row_len();
        let mut buffer = vec![0 as u8; self.buffer_len()];
        {
            let rows: RowQueue = Arc::new(Mutex::new(buffer.chunks_mut(row_len).enumerate()));
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    let rows = rows.clone();
                    spawner.spawn(move |_| loop {
                        // A poisoned queue means another worker died;
                        // the scope reports that below.
                        let row = { rows.lock().ok().and_then(|mut rows| rows.next()) };
                        match row {
                            Some((row, pixels)) => self.render_row(row, pixels),
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .map_err(|_| ZoomError::WorkerPanic)?;
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn small_view(center: Complex<f64>, scale: f64) -> ViewMapper {
        ViewMapper::new(4, 2, center, scale).unwrap()
    }

    #[test]
    fn center_pixel_of_origin_view_is_inside() {
        let renderer = FrameRenderer::with_mapper(small_view(Complex::new(0.0, 0.0), 1.0), 10);
        let pixel = Pixel(2, 1);
        assert_eq!(renderer.mapper.pixel_to_point(&pixel), Complex::new(0.0, 0.0));
        assert_eq!(escape_time(Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), 10), 10);
        assert_eq!(renderer.shade(&pixel), [0, 0, 0]);

        let buffer = renderer.render_single();
        let offset = renderer.mapper.pixel_to_offset(&pixel);
        assert_eq!(offset, 18);
        assert_eq!(&buffer[offset..offset + 3], &[0, 0, 0]);
    }

    #[test]
    fn buffer_has_three_bytes_per_pixel() {
        let renderer = FrameRenderer::with_mapper(small_view(Complex::new(0.0, 0.0), 1.0), 10);
        assert_eq!(renderer.render_single().len(), 4 * 2 * 3);
    }

    #[test]
    fn every_pixel_matches_shade() {
        let mapper = ViewMapper::new(7, 5, Complex::new(-0.70176, -0.3842), 0.4).unwrap();
        let renderer = FrameRenderer::with_mapper(mapper, 40);
        let buffer = renderer.render_single();
        for row in 0..5 {
            for column in 0..7 {
                let pixel = Pixel(column, row);
                let offset = mapper.pixel_to_offset(&pixel);
                assert_eq!(&buffer[offset..offset + 3], &renderer.shade(&pixel)[..]);
            }
        }
    }

    #[test]
    fn threaded_render_matches_single() {
        let frame = FrameParameters::initial(48, 27).unwrap().next().next();
        let renderer = FrameRenderer::new(&frame).unwrap();
        let single = renderer.render_single();
        for threads in 1..6 {
            assert_eq!(renderer.render(threads).unwrap(), single);
        }
    }

    #[test]
    fn more_threads_than_rows_is_fine() {
        let renderer = FrameRenderer::with_mapper(small_view(Complex::new(-0.5, 0.1), 0.3), 25);
        assert_eq!(renderer.render(16).unwrap(), renderer.render_single());
    }

    #[test]
    fn renderer_rejects_invalid_frame() {
        let mut frame = FrameParameters::initial(16, 9).unwrap();
        frame.scale = std::f64::NAN;
        assert!(FrameRenderer::new(&frame).is_err());
    }
}
