use thiserror::Error;

/// Error type for hex color string parsing
///
/// Returned by the strict parser only. The lenient entry point substitutes
/// a fallback color instead of surfacing these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// The string does not contain exactly six hex digits
    ///
    /// The digit count is taken after leading `#` characters are stripped.
    #[error("Hex color must contain exactly 6 digits, got {0}")]
    InvalidLength(usize),

    /// The string contains a character that is not an ASCII hex digit
    #[error("Invalid hex digit {0:?} in color string")]
    InvalidDigit(char),
}

/// Error type for resize operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResizeError {
    /// A requested target dimension is zero
    #[error("Target dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// The scale ratio is not a finite positive number
    #[error("Scale ratio must be finite and positive, got {0}")]
    InvalidRatio(f32),

    /// The source image has no pixels to sample from
    #[error("Cannot resize an empty source image ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
}

/// Error type for grid crop operations
///
/// Both variants describe a grid that cannot partition the source image:
/// either a zero tile count or more tiles than pixels along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridCropError {
    /// The grid has a zero row or column count
    #[error("Grid must have at least one row and one column, got {rows}x{columns}")]
    ZeroGrid { rows: u32, columns: u32 },

    /// The grid has more rows than pixel rows, or more columns than pixel columns
    #[error("Grid of {rows}x{columns} tiles does not fit a {width}x{height} image")]
    GridExceedsImage {
        rows: u32,
        columns: u32,
        width: u32,
        height: u32,
    },
}
