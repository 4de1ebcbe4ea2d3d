use image::{imageops, Pixel};
use imageproc::definitions::Image;
use itertools::iproduct;

use crate::error::GridCropError;

/// Trait providing grid-based image splitting
pub trait GridCrop: Sized {
    /// Splits the image into `rows` x `columns` tiles in row-major order
    ///
    /// Tile sizes are the integer division of the image size by the grid
    /// counts; remainder pixels accrue to the last tile along each axis, so
    /// the tiles partition the source exactly.
    ///
    /// # Errors
    ///
    /// * `GridCropError::ZeroGrid` - A grid count is zero
    /// * `GridCropError::GridExceedsImage` - More tiles than pixels along an axis
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgb;
    /// use imageops_chroma::{GridCrop, Image};
    ///
    /// let image: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([5, 5, 5]));
    /// let tiles = image.grid_crop(2, 2)?;
    /// assert_eq!(tiles.len(), 4);
    /// assert_eq!(tiles[0].dimensions(), (2, 2));
    /// # Ok::<(), imageops_chroma::GridCropError>(())
    /// ```
    fn grid_crop(&self, rows: u32, columns: u32) -> Result<Vec<Self>, GridCropError>;
}

impl<P> GridCrop for Image<P>
where
    P: Pixel + 'static,
{
    fn grid_crop(&self, rows: u32, columns: u32) -> Result<Vec<Self>, GridCropError> {
        if rows == 0 || columns == 0 {
            return Err(GridCropError::ZeroGrid { rows, columns });
        }

        let (width, height) = self.dimensions();
        if columns > width || rows > height {
            return Err(GridCropError::GridExceedsImage {
                rows,
                columns,
                width,
                height,
            });
        }

        let tile_width = width / columns;
        let tile_height = height / rows;

        let tiles = iproduct!(0..rows, 0..columns)
            .map(|(row, column)| {
                let x = column * tile_width;
                let y = row * tile_height;
                let tile_w = if column + 1 == columns {
                    width - x
                } else {
                    tile_width
                };
                let tile_h = if row + 1 == rows { height - y } else { tile_height };
                imageops::crop_imm(self, x, y, tile_w, tile_h).to_image()
            })
            .collect();

        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient_image(width: u32, height: u32) -> Image<Rgb<u8>> {
        let mut image: Image<Rgb<u8>> = Image::new(width, height);
        for (x, y) in iproduct!(0..width, 0..height) {
            image.put_pixel(x, y, Rgb([x as u8, y as u8, 0]));
        }
        image
    }

    #[test]
    fn grid_crop_with_exact_division_produces_equal_tiles() {
        let image = gradient_image(4, 4);
        let tiles = image.grid_crop(2, 2).unwrap();

        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|tile| tile.dimensions() == (2, 2)));
    }

    #[test]
    fn grid_crop_orders_tiles_row_major() {
        let image = gradient_image(4, 4);
        let tiles = image.grid_crop(2, 2).unwrap();

        // Top-left corner of each tile identifies its source position.
        assert_eq!(tiles[0].get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(tiles[1].get_pixel(0, 0), &Rgb([2, 0, 0]));
        assert_eq!(tiles[2].get_pixel(0, 0), &Rgb([0, 2, 0]));
        assert_eq!(tiles[3].get_pixel(0, 0), &Rgb([2, 2, 0]));
    }

    #[test]
    fn grid_crop_gives_remainder_to_last_tiles() {
        let image = gradient_image(5, 7);
        let tiles = image.grid_crop(3, 2).unwrap();

        assert_eq!(tiles.len(), 6);
        // Columns split 5 as 2 + 3, rows split 7 as 2 + 2 + 3.
        assert_eq!(tiles[0].dimensions(), (2, 2));
        assert_eq!(tiles[1].dimensions(), (3, 2));
        assert_eq!(tiles[4].dimensions(), (2, 3));
        assert_eq!(tiles[5].dimensions(), (3, 3));
    }

    #[test]
    fn grid_crop_tiles_partition_all_pixels() {
        let image = gradient_image(5, 3);
        let tiles = image.grid_crop(2, 3).unwrap();

        let tile_pixels: u32 = tiles
            .iter()
            .map(|tile| tile.width() * tile.height())
            .sum();
        assert_eq!(tile_pixels, 5 * 3);
    }

    #[test]
    fn grid_crop_single_cell_returns_copy() {
        let image = gradient_image(3, 2);
        let tiles = image.grid_crop(1, 1).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0], image);
    }

    #[test]
    fn grid_crop_with_zero_grid_returns_error() {
        let image = gradient_image(4, 4);
        assert_eq!(
            image.grid_crop(0, 2),
            Err(GridCropError::ZeroGrid { rows: 0, columns: 2 })
        );
        assert_eq!(
            image.grid_crop(2, 0),
            Err(GridCropError::ZeroGrid { rows: 2, columns: 0 })
        );
    }

    #[test]
    fn grid_crop_with_oversized_grid_returns_error() {
        let image = gradient_image(4, 4);
        assert_eq!(
            image.grid_crop(5, 2),
            Err(GridCropError::GridExceedsImage {
                rows: 5,
                columns: 2,
                width: 4,
                height: 4
            })
        );
        assert_eq!(
            image.grid_crop(2, 5),
            Err(GridCropError::GridExceedsImage {
                rows: 2,
                columns: 5,
                width: 4,
                height: 4
            })
        );
    }
}
