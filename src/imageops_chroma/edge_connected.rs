use std::collections::HashSet;

use image::Luma;
use imageproc::definitions::Image;
use imageproc::map::map_colors;
use imageproc::region_labelling::{connected_components, Connectivity};

/// Trait providing connectivity analysis for binary masks
///
/// A mask pixel is considered set when it is non-zero. The result keeps
/// exactly the set pixels that can reach the image border through other set
/// pixels, using 8-connectivity. Set regions fully enclosed by unset pixels
/// are cleared.
pub trait EdgeConnected {
    /// Restricts a binary mask to its border-connected regions
    ///
    /// Labels the 8-connected components of the mask, collects every label
    /// that appears on the outer border (first and last row, first and last
    /// column), and returns the union of those components as a new mask with
    /// set pixels at 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Luma;
    /// use imageops_chroma::{EdgeConnected, Image};
    ///
    /// let mut mask: Image<Luma<u8>> = Image::new(3, 3);
    /// mask.put_pixel(1, 1, Luma([255]));
    ///
    /// // The center pixel does not touch the border, so it is cleared.
    /// let connected = mask.edge_connected_regions();
    /// assert_eq!(connected.get_pixel(1, 1), &Luma([0]));
    /// ```
    fn edge_connected_regions(&self) -> Self;
}

impl EdgeConnected for Image<Luma<u8>> {
    fn edge_connected_regions(&self) -> Self {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return self.clone();
        }

        let labels = connected_components(self, Connectivity::Eight, Luma([0u8]));

        let mut border_labels = HashSet::new();
        for x in 0..width {
            border_labels.insert(labels.get_pixel(x, 0)[0]);
            border_labels.insert(labels.get_pixel(x, height - 1)[0]);
        }
        for y in 0..height {
            border_labels.insert(labels.get_pixel(0, y)[0]);
            border_labels.insert(labels.get_pixel(width - 1, y)[0]);
        }
        // Label 0 is the unset background, never part of the union.
        border_labels.remove(&0);

        map_colors(&labels, |Luma([label])| {
            Luma([if border_labels.contains(&label) { 255 } else { 0 }])
        })
    }
}
