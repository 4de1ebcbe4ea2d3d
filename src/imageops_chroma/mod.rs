pub mod chroma_key;
pub mod edge_connected;
pub mod grid_crop;
pub mod hex_color;
pub mod resize;
