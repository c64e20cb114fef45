// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — grayscale filter chain used ahead of edge detection:
// median blur, histogram equalization, morphological open/close, intensity
// band masking and Canny. Operates on in-memory images using the `image` and
// `imageproc` crates.

use docquad_core::error::DocquadError;
use image::{DynamicImage, GrayImage};
use imageproc::contrast::equalize_histogram;
use imageproc::edges::canny;
use imageproc::filter::median_filter;
use imageproc::morphology::{self, Mask};
use tracing::{debug, info, instrument};

/// Grayscale filter pipeline operating on a single in-memory image.
///
/// Each method consumes `self` and returns a new `ImageProcessor` wrapping the
/// filtered image, enabling method chaining.
///
/// ```ignore
/// let edges = ImageProcessor::open("page.jpg")?
///     .median_blur(25)
///     .equalize()
///     .open_close(15)
///     .canny(10.0, 70.0)
///     .into_gray();
/// ```
pub struct ImageProcessor {
    /// The current working image, always single-channel.
    image: GrayImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path and convert it to grayscale.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DocquadError> {
        let img = image::open(path.as_ref()).map_err(|err| {
            DocquadError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            "Image loaded"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Wrap an already-decoded `DynamicImage`, converting it to luma.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.to_luma8(),
        }
    }

    /// Wrap an existing grayscale buffer.
    pub fn from_gray(image: GrayImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Borrow the underlying grayscale buffer.
    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Consume the processor and return the underlying grayscale buffer.
    pub fn into_gray(self) -> GrayImage {
        self.image
    }

    /// 256-bin intensity histogram of the current image.
    pub fn histogram(&self) -> [u32; 256] {
        let mut bins = [0u32; 256];
        for pixel in self.image.pixels() {
            bins[pixel.0[0] as usize] += 1;
        }
        bins
    }

    // -- Filters (consume self, return new Self) ------------------------------

    /// Median blur with a square window of side `kernel` (odd).
    #[instrument(skip(self), fields(kernel))]
    pub fn median_blur(self, kernel: u32) -> Self {
        let radius = kernel / 2;
        debug!(radius, "Applying median blur");
        Self {
            image: median_filter(&self.image, radius, radius),
        }
    }

    /// Spread intensities over the full range by histogram equalization.
    #[instrument(skip(self))]
    pub fn equalize(self) -> Self {
        debug!("Equalizing histogram");
        Self {
            image: equalize_histogram(&self.image),
        }
    }

    /// Grayscale morphological opening followed by closing with a square
    /// structuring element of side `kernel`.
    ///
    /// Opening removes bright specks smaller than the kernel (printed text on a
    /// white page); closing then fills the dark gaps left behind.
    #[instrument(skip(self), fields(kernel))]
    pub fn open_close(self, kernel: u32) -> Self {
        let k = (kernel / 2).min(u8::MAX as u32) as u8;
        debug!(k, "Applying morphological open/close");
        let mask = Mask::square(k);
        let opened = morphology::grayscale_open(&self.image, &mask);
        Self {
            image: morphology::grayscale_close(&opened, &mask),
        }
    }

    /// Zero every pixel outside `[lower, upper]`; pixels inside keep their value.
    #[instrument(skip(self), fields(lower, upper))]
    pub fn band_mask(mut self, lower: u8, upper: u8) -> Self {
        if lower == u8::MIN && upper == u8::MAX {
            return self;
        }
        for pixel in self.image.pixels_mut() {
            let value = pixel.0[0];
            if value < lower || value > upper {
                pixel.0[0] = 0;
            }
        }
        self
    }

    /// Canny edge detection; the result is a binary 0/255 edge map.
    #[instrument(skip(self), fields(low, high))]
    pub fn canny(self, low: f32, high: f32) -> Self {
        debug!("Running Canny edge detection");
        Self {
            image: canny(&self.image, low, high),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn band_mask_zeroes_pixels_outside_range() {
        let mut img = GrayImage::new(3, 1);
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(1, 0, Luma([100]));
        img.put_pixel(2, 0, Luma([250]));

        let masked = ImageProcessor::from_gray(img).band_mask(50, 200).into_gray();
        assert_eq!(masked.get_pixel(0, 0).0[0], 0);
        assert_eq!(masked.get_pixel(1, 0).0[0], 100);
        assert_eq!(masked.get_pixel(2, 0).0[0], 0);
    }

    #[test]
    fn histogram_counts_every_pixel() {
        let img = GrayImage::from_pixel(8, 4, Luma([42]));
        let bins = ImageProcessor::from_gray(img).histogram();
        assert_eq!(bins[42], 32);
        assert_eq!(bins.iter().sum::<u32>(), 32);
    }

    #[test]
    fn median_blur_removes_isolated_speck() {
        let mut img = GrayImage::from_pixel(9, 9, Luma([0]));
        img.put_pixel(4, 4, Luma([255]));
        let blurred = ImageProcessor::from_gray(img).median_blur(3).into_gray();
        assert_eq!(blurred.get_pixel(4, 4).0[0], 0);
    }

    #[test]
    fn open_close_keeps_flat_intensity() {
        let img = GrayImage::from_pixel(40, 30, Luma([128]));
        let out = ImageProcessor::from_gray(img).open_close(15).into_gray();
        assert_eq!(out.dimensions(), (40, 30));
        assert!(out.pixels().all(|p| p.0[0] == 128));
    }

    #[test]
    fn open_close_keeps_page_and_drops_text() {
        // Equalized-looking page: no pixel is zero anywhere.
        let mut img = GrayImage::from_pixel(120, 100, Luma([167]));
        for y in 20..80 {
            for x in 30..100 {
                img.put_pixel(x, y, Luma([255]));
            }
        }
        // A dark 3x3 "glyph" on the page and a bright speck on the background.
        for y in 48..51 {
            for x in 60..63 {
                img.put_pixel(x, y, Luma([167]));
            }
        }
        img.put_pixel(8, 8, Luma([255]));

        let out = ImageProcessor::from_gray(img).open_close(15).into_gray();
        assert_eq!(out.get_pixel(5, 5).0[0], 167);
        assert_eq!(out.get_pixel(8, 8).0[0], 167);
        assert_eq!(out.get_pixel(65, 50).0[0], 255);
        assert_eq!(out.get_pixel(61, 49).0[0], 255);
        assert_eq!(out.get_pixel(29, 50).0[0], 167);
        assert_eq!(out.get_pixel(30, 50).0[0], 255);
    }

    #[test]
    fn canny_on_flat_image_finds_no_edges() {
        let img = GrayImage::from_pixel(32, 32, Luma([200]));
        let edges = ImageProcessor::from_gray(img).canny(10.0, 70.0).into_gray();
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn open_reports_missing_file_as_image_error() {
        let result = ImageProcessor::open("/nonexistent/page.png");
        assert!(matches!(result, Err(DocquadError::ImageError(_))));
    }
}
