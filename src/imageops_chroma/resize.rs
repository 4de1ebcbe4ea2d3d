use image::imageops::{self, FilterType};
use image::Pixel;
use imageproc::definitions::Image;

use crate::error::ResizeError;

/// Resampling kernel used by the resize operations
///
/// The variants map onto the `image` crate filters: nearest neighbor,
/// triangle, Catmull-Rom, and Lanczos with a window of 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingFilter {
    /// Hard-edged nearest neighbor sampling
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic interpolation
    #[default]
    Bicubic,
    /// Lanczos resampling, best for detail-preserving enlargement
    Lanczos,
}

impl From<SamplingFilter> for FilterType {
    fn from(filter: SamplingFilter) -> Self {
        match filter {
            SamplingFilter::Nearest => Self::Nearest,
            SamplingFilter::Bilinear => Self::Triangle,
            SamplingFilter::Bicubic => Self::CatmullRom,
            SamplingFilter::Lanczos => Self::Lanczos3,
        }
    }
}

/// Trait providing pixel and ratio based resizing
pub trait Resize: Sized {
    /// Resizes the image to exactly `width` x `height` pixels
    ///
    /// # Errors
    ///
    /// * `ResizeError::ZeroDimension` - A target dimension is zero
    /// * `ResizeError::EmptySource` - The source image has no pixels
    fn resize_to_pixels(
        &self,
        width: u32,
        height: u32,
        filter: SamplingFilter,
    ) -> Result<Self, ResizeError>;

    /// Resizes the image by a uniform scale ratio
    ///
    /// Fractional target sizes are truncated and floored at one pixel, so
    /// even an aggressive downscale always yields an image.
    ///
    /// # Errors
    ///
    /// * `ResizeError::InvalidRatio` - The ratio is not finite or not positive
    /// * `ResizeError::EmptySource` - The source image has no pixels
    fn resize_by_ratio(&self, ratio: f32, filter: SamplingFilter) -> Result<Self, ResizeError>;
}

impl<P> Resize for Image<P>
where
    P: Pixel + 'static,
{
    fn resize_to_pixels(
        &self,
        width: u32,
        height: u32,
        filter: SamplingFilter,
    ) -> Result<Self, ResizeError> {
        if self.width() == 0 || self.height() == 0 {
            return Err(ResizeError::EmptySource {
                width: self.width(),
                height: self.height(),
            });
        }
        if width == 0 || height == 0 {
            return Err(ResizeError::ZeroDimension { width, height });
        }

        Ok(imageops::resize(self, width, height, filter.into()))
    }

    fn resize_by_ratio(&self, ratio: f32, filter: SamplingFilter) -> Result<Self, ResizeError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ResizeError::InvalidRatio(ratio));
        }

        let width = ((self.width() as f32 * ratio) as u32).max(1);
        let height = ((self.height() as f32 * ratio) as u32).max(1);
        self.resize_to_pixels(width, height, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn resize_to_pixels_produces_requested_dimensions() {
        let image: Image<Rgb<u8>> = Image::from_pixel(8, 6, Rgb([40, 80, 120]));

        let up = image.resize_to_pixels(16, 12, SamplingFilter::Bicubic).unwrap();
        assert_eq!(up.dimensions(), (16, 12));

        let down = image.resize_to_pixels(4, 3, SamplingFilter::Bilinear).unwrap();
        assert_eq!(down.dimensions(), (4, 3));
    }

    #[test]
    fn resize_to_pixels_with_nearest_preserves_solid_color() {
        let image: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([10, 200, 30]));
        let resized = image.resize_to_pixels(9, 5, SamplingFilter::Nearest).unwrap();
        assert!(resized.pixels().all(|pixel| *pixel == Rgb([10, 200, 30])));
    }

    #[test]
    fn resize_to_pixels_with_zero_target_returns_error() {
        let image: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([0, 0, 0]));
        assert_eq!(
            image.resize_to_pixels(0, 4, SamplingFilter::Bicubic),
            Err(ResizeError::ZeroDimension { width: 0, height: 4 })
        );
        assert_eq!(
            image.resize_to_pixels(4, 0, SamplingFilter::Bicubic),
            Err(ResizeError::ZeroDimension { width: 4, height: 0 })
        );
    }

    #[test]
    fn resize_on_empty_source_returns_error() {
        let image: Image<Rgb<u8>> = Image::new(0, 0);
        assert_eq!(
            image.resize_to_pixels(4, 4, SamplingFilter::Bicubic),
            Err(ResizeError::EmptySource { width: 0, height: 0 })
        );
        assert_eq!(
            image.resize_by_ratio(2.0, SamplingFilter::Bicubic),
            Err(ResizeError::EmptySource { width: 0, height: 0 })
        );
    }

    #[test]
    fn resize_by_ratio_scales_and_truncates() {
        let image: Image<Rgb<u8>> = Image::from_pixel(10, 7, Rgb([1, 2, 3]));

        let doubled = image.resize_by_ratio(2.0, SamplingFilter::Nearest).unwrap();
        assert_eq!(doubled.dimensions(), (20, 14));

        // 10 * 0.5 = 5, 7 * 0.5 = 3.5 truncated to 3
        let halved = image.resize_by_ratio(0.5, SamplingFilter::Nearest).unwrap();
        assert_eq!(halved.dimensions(), (5, 3));
    }

    #[test]
    fn resize_by_ratio_floors_at_one_pixel() {
        let image: Image<Rgb<u8>> = Image::from_pixel(3, 3, Rgb([9, 9, 9]));
        let tiny = image.resize_by_ratio(0.01, SamplingFilter::Nearest).unwrap();
        assert_eq!(tiny.dimensions(), (1, 1));
    }

    #[test]
    fn resize_by_ratio_of_one_is_identity_size() {
        let image: Image<Rgb<u8>> = Image::from_pixel(5, 9, Rgb([7, 7, 7]));
        let same = image.resize_by_ratio(1.0, SamplingFilter::Bicubic).unwrap();
        assert_eq!(same.dimensions(), (5, 9));
    }

    #[test]
    fn resize_by_ratio_with_invalid_ratio_returns_error() {
        let image: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([0, 0, 0]));
        assert_eq!(
            image.resize_by_ratio(0.0, SamplingFilter::Bicubic),
            Err(ResizeError::InvalidRatio(0.0))
        );
        assert_eq!(
            image.resize_by_ratio(-1.5, SamplingFilter::Bicubic),
            Err(ResizeError::InvalidRatio(-1.5))
        );
        assert!(matches!(
            image.resize_by_ratio(f32::NAN, SamplingFilter::Bicubic),
            Err(ResizeError::InvalidRatio(ratio)) if ratio.is_nan()
        ));
        assert_eq!(
            image.resize_by_ratio(f32::INFINITY, SamplingFilter::Bicubic),
            Err(ResizeError::InvalidRatio(f32::INFINITY))
        );
    }

    #[test]
    fn sampling_filter_defaults_to_bicubic() {
        assert_eq!(SamplingFilter::default(), SamplingFilter::Bicubic);
    }
}
