// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge extraction — filtered edge map and external-contour image that feed
// the Hough transform.

use docquad_core::config::EdgeOptions;
use image::{GrayImage, Luma};
use imageproc::contours::{BorderType, find_contours};
use imageproc::drawing::draw_line_segment_mut;
use tracing::{debug, instrument};

use crate::image::processor::ImageProcessor;

/// Intermediate images of the edge extraction stage.
///
/// All images share the input dimensions.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    /// Median-blurred input.
    pub blurred: GrayImage,
    /// Equalized image after morphological open/close.
    pub equalized: GrayImage,
    /// 256-bin histogram of `equalized`.
    pub histogram: [u32; 256],
    /// Binary Canny edges.
    pub edges: GrayImage,
    /// External contours of `edges` drawn on a blank canvas.
    pub contour_image: GrayImage,
    /// Number of external contours traced.
    pub contour_count: usize,
}

/// Turns a grayscale photograph into an edge map.
pub trait EdgeExtractor {
    fn extract(&self, gray: &GrayImage) -> EdgeMap;
}

/// Blur → equalize → open/close → band mask → Canny → external contours.
///
/// Assumes a mostly bright document on a darker background: the
/// morphological pass wipes out printed text so that only the page outline
/// survives into the edge map.
#[derive(Debug, Clone, Default)]
pub struct FilterEdgeExtractor {
    options: EdgeOptions,
}

impl FilterEdgeExtractor {
    pub fn new(options: EdgeOptions) -> Self {
        Self { options }
    }
}

impl EdgeExtractor for FilterEdgeExtractor {
    #[instrument(skip_all, fields(width = gray.width(), height = gray.height()))]
    fn extract(&self, gray: &GrayImage) -> EdgeMap {
        let opts = &self.options;

        let blurred = ImageProcessor::from_gray(gray.clone()).median_blur(opts.median_kernel);
        let blurred_image = blurred.as_gray().clone();

        let equalized = blurred.equalize().open_close(opts.morph_kernel);
        let histogram = equalized.histogram();
        let equalized_image = equalized.as_gray().clone();

        let edges = equalized
            .band_mask(opts.intensity_lower, opts.intensity_upper)
            .canny(opts.canny_lower, opts.canny_upper)
            .into_gray();

        let (contour_image, contour_count) = draw_external_contours(&edges);
        debug!(contour_count, "Edge extraction complete");

        EdgeMap {
            blurred: blurred_image,
            equalized: equalized_image,
            histogram,
            edges,
            contour_image,
            contour_count,
        }
    }
}

/// Trace the outermost contours of a binary image and draw them as closed
/// polylines on a blank canvas of the same size.
fn draw_external_contours(edges: &GrayImage) -> (GrayImage, usize) {
    let (width, height) = edges.dimensions();
    let mut canvas = GrayImage::new(width, height);
    let ink = Luma([255u8]);

    let contours = find_contours::<i32>(edges);
    let mut count = 0;
    for contour in contours
        .iter()
        .filter(|c| c.parent.is_none() && matches!(c.border_type, BorderType::Outer))
    {
        count += 1;
        let points = &contour.points;
        if let [only] = points.as_slice() {
            canvas.put_pixel(only.x as u32, only.y as u32, ink);
            continue;
        }
        for (i, start) in points.iter().enumerate() {
            let end = &points[(i + 1) % points.len()];
            draw_line_segment_mut(
                &mut canvas,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                ink,
            );
        }
    }
    (canvas, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bright_rectangle(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(w, h, Luma([30u8]));
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, Luma([230u8]));
            }
        }
        img
    }

    #[test]
    fn flat_image_has_no_contours() {
        let gray = GrayImage::from_pixel(64, 48, Luma([120u8]));
        let map = FilterEdgeExtractor::default().extract(&gray);
        assert_eq!(map.contour_count, 0);
        assert!(map.contour_image.pixels().all(|p| p.0[0] == 0));
        assert_eq!(map.histogram.iter().sum::<u32>(), 64 * 48);
    }

    #[test]
    fn rectangle_outline_is_traced() {
        let gray = bright_rectangle(160, 120, 30, 25, 130, 95);
        let map = FilterEdgeExtractor::default().extract(&gray);
        assert!(map.contour_count >= 1);
        assert_eq!(map.contour_image.dimensions(), (160, 120));
        assert!(map.contour_image.pixels().any(|p| p.0[0] == 255));
        assert!(map.edges.pixels().any(|p| p.0[0] > 0));
    }

    #[test]
    fn contours_of_a_square_outline_form_a_closed_loop() {
        let mut edges = GrayImage::new(20, 20);
        for i in 5..15 {
            edges.put_pixel(i, 5, Luma([255]));
            edges.put_pixel(i, 14, Luma([255]));
            edges.put_pixel(5, i, Luma([255]));
            edges.put_pixel(14, i, Luma([255]));
        }
        let (canvas, count) = draw_external_contours(&edges);
        assert_eq!(count, 1);
        for i in 5..15 {
            assert_eq!(canvas.get_pixel(i, 5).0[0], 255);
            assert_eq!(canvas.get_pixel(5, i).0[0], 255);
        }
        assert_eq!(canvas.get_pixel(10, 10).0[0], 0);
    }
}
