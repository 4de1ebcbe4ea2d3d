use image::{Luma, Pixel, Primitive, Rgb, Rgba};
use imageproc::definitions::Image;
use imageproc::map::{map_colors, map_colors2};

use crate::imageops_chroma::edge_connected::EdgeConnected;
use crate::imageops_chroma::hex_color::parse_hex_color_or_fallback;

/// Largest possible Euclidean distance between two RGB colors, `sqrt(3 * 255^2)`
///
/// Tolerance percentages map linearly onto this distance to produce the
/// absolute matching threshold.
pub const MAX_RGB_DISTANCE: f32 = 441.672_97;

/// Parameters for chroma-key segmentation
///
/// The defaults mirror the typical keying setup: a white target color,
/// a tolerance of 10 percent, and interior protection enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaKeyOptions {
    /// Color to be keyed out
    pub target: Rgb<u8>,
    /// Matching tolerance as a percentage in `[0, 100]`
    ///
    /// Values outside the range are clamped when the threshold is computed.
    pub tolerance: f32,
    /// When set, only matched regions connected to the image border become
    /// transparent; matched regions enclosed by the subject stay opaque
    pub protect_interior: bool,
}

impl Default for ChromaKeyOptions {
    fn default() -> Self {
        Self {
            target: Rgb([255, 255, 255]),
            tolerance: 10.0,
            protect_interior: true,
        }
    }
}

impl ChromaKeyOptions {
    /// Creates options for the given target color with default tolerance and
    /// interior protection
    pub fn new(target: Rgb<u8>) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Creates options from a hex color string
    ///
    /// Parsing is lenient: a malformed string silently falls back to white.
    /// Use [`parse_hex_color_or_fallback`] directly when the caller needs to
    /// know whether the fallback was taken.
    ///
    /// [`parse_hex_color_or_fallback`]: crate::parse_hex_color_or_fallback
    pub fn from_hex(color: &str, tolerance: f32, protect_interior: bool) -> Self {
        Self {
            target: parse_hex_color_or_fallback(color).rgb(),
            tolerance,
            protect_interior,
        }
    }

    /// Absolute RGB distance threshold derived from the tolerance percentage
    pub fn threshold(&self) -> f32 {
        self.tolerance.clamp(0.0, 100.0) / 100.0 * MAX_RGB_DISTANCE
    }
}

/// Trait providing chroma-key background segmentation
///
/// Pixels whose RGB distance to the target color is within the threshold are
/// made fully transparent; every other pixel stays fully opaque. The
/// companion mask encodes the complementary decision: maximum value on kept
/// subject pixels, zero on removed background pixels.
///
/// Distances are measured in the 0-255 RGB cube regardless of the subpixel
/// type, so `u8`, `u16`, and normalized `f32` images all key consistently.
/// An input alpha channel is ignored for matching and replaced in the output.
pub trait ChromaKey {
    type Subpixel: Primitive;

    /// Segments the image into subject and keyed-out background
    ///
    /// Returns the RGBA image with background pixels made transparent and
    /// the companion subject mask. Both outputs have the input dimensions,
    /// and the alpha channel is strictly binary.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::{Luma, Rgb};
    /// use imageops_chroma::{ChromaKey, ChromaKeyOptions, Image};
    ///
    /// let image: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([0, 255, 0]));
    /// let options = ChromaKeyOptions::from_hex("#00ff00", 10.0, false);
    ///
    /// let (rgba, mask) = image.chroma_key(&options);
    /// assert_eq!(rgba.get_pixel(0, 0)[3], 0);
    /// assert_eq!(mask.get_pixel(0, 0), &Luma([0]));
    /// ```
    fn chroma_key(
        &self,
        options: &ChromaKeyOptions,
    ) -> (Image<Rgba<Self::Subpixel>>, Image<Luma<Self::Subpixel>>)
    where
        Rgba<Self::Subpixel>: Pixel<Subpixel = Self::Subpixel>,
        Luma<Self::Subpixel>: Pixel<Subpixel = Self::Subpixel>;
}

impl<S> ChromaKey for Image<Rgb<S>>
where
    Rgb<S>: Pixel<Subpixel = S>,
    S: Primitive,
    f32: From<S>,
{
    type Subpixel = S;

    fn chroma_key(
        &self,
        options: &ChromaKeyOptions,
    ) -> (Image<Rgba<S>>, Image<Luma<S>>)
    where
        Rgba<S>: Pixel<Subpixel = S>,
        Luma<S>: Pixel<Subpixel = S>,
    {
        let matcher = ColorMatcher::new::<S>(options);
        let matched = map_colors(self, |Rgb([red, green, blue])| {
            Luma([matcher.matches(red, green, blue)])
        });
        let removed = transparency_mask(matched, options.protect_interior);

        let image = map_colors2(self, &removed, |Rgb([red, green, blue]), Luma([removed])| {
            Rgba([red, green, blue, binary_alpha::<S>(removed)])
        });
        let mask = subject_mask::<S>(&removed);

        (image, mask)
    }
}

impl<S> ChromaKey for Image<Rgba<S>>
where
    Rgba<S>: Pixel<Subpixel = S>,
    S: Primitive,
    f32: From<S>,
{
    type Subpixel = S;

    fn chroma_key(
        &self,
        options: &ChromaKeyOptions,
    ) -> (Image<Rgba<S>>, Image<Luma<S>>)
    where
        Rgba<S>: Pixel<Subpixel = S>,
        Luma<S>: Pixel<Subpixel = S>,
    {
        let matcher = ColorMatcher::new::<S>(options);
        // The existing alpha channel takes no part in the color match.
        let matched = map_colors(self, |Rgba([red, green, blue, _])| {
            Luma([matcher.matches(red, green, blue)])
        });
        let removed = transparency_mask(matched, options.protect_interior);

        let image = map_colors2(
            self,
            &removed,
            |Rgba([red, green, blue, _]), Luma([removed])| {
                Rgba([red, green, blue, binary_alpha::<S>(removed)])
            },
        );
        let mask = subject_mask::<S>(&removed);

        (image, mask)
    }
}

/// Segments every image of a batch independently, preserving order
///
/// Equivalent to calling [`ChromaKey::chroma_key`] on each image in turn;
/// no state is shared between images.
pub fn chroma_key_batch<T>(
    images: &[T],
    options: &ChromaKeyOptions,
) -> Vec<(Image<Rgba<T::Subpixel>>, Image<Luma<T::Subpixel>>)>
where
    T: ChromaKey,
    Rgba<T::Subpixel>: Pixel<Subpixel = T::Subpixel>,
    Luma<T::Subpixel>: Pixel<Subpixel = T::Subpixel>,
{
    images.iter().map(|image| image.chroma_key(options)).collect()
}

/// Per-pixel color matcher with the target and threshold scaled up front
struct ColorMatcher {
    target: [f32; 3],
    threshold_squared: f32,
    scale: f32,
}

impl ColorMatcher {
    fn new<S>(options: &ChromaKeyOptions) -> Self
    where
        S: Primitive,
        f32: From<S>,
    {
        let Rgb([target_r, target_g, target_b]) = options.target;
        let threshold = options.threshold();
        Self {
            target: [
                <f32 as From<u8>>::from(target_r),
                <f32 as From<u8>>::from(target_g),
                <f32 as From<u8>>::from(target_b),
            ],
            threshold_squared: threshold * threshold,
            // Subpixels are compared in the 0-255 domain whatever their type.
            scale: 255.0 / f32::from(S::DEFAULT_MAX_VALUE),
        }
    }

    fn matches<S>(&self, red: S, green: S, blue: S) -> u8
    where
        S: Primitive,
        f32: From<S>,
    {
        let dr = f32::from(red) * self.scale - self.target[0];
        let dg = f32::from(green) * self.scale - self.target[1];
        let db = f32::from(blue) * self.scale - self.target[2];
        if dr * dr + dg * dg + db * db <= self.threshold_squared {
            255
        } else {
            0
        }
    }
}

fn transparency_mask(matched: Image<Luma<u8>>, protect_interior: bool) -> Image<Luma<u8>> {
    if protect_interior {
        matched.edge_connected_regions()
    } else {
        matched
    }
}

fn binary_alpha<S: Primitive>(removed: u8) -> S {
    if removed == 0 {
        S::DEFAULT_MAX_VALUE
    } else {
        S::DEFAULT_MIN_VALUE
    }
}

fn subject_mask<S>(removed: &Image<Luma<u8>>) -> Image<Luma<S>>
where
    Luma<S>: Pixel<Subpixel = S>,
    S: Primitive,
{
    map_colors(removed, |Luma([removed])| Luma([binary_alpha::<S>(removed)]))
}
