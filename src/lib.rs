mod error;
mod imageops_chroma;

use image::{ImageBuffer, Pixel};

pub use error::{GridCropError, HexColorError, ResizeError};
pub use imageops_chroma::chroma_key::{
    chroma_key_batch, ChromaKey, ChromaKeyOptions, MAX_RGB_DISTANCE,
};
pub use imageops_chroma::edge_connected::EdgeConnected;
pub use imageops_chroma::grid_crop::GridCrop;
pub use imageops_chroma::hex_color::{
    parse_hex_color, parse_hex_color_or_fallback, ParsedColor, FALLBACK_COLOR,
};
pub use imageops_chroma::resize::{Resize, SamplingFilter};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
