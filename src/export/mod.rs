//! Export module for saving rendered frames and noise fields.
//!
//! Frames are written as 8-bit RGB PNG; raw fields as 16-bit grayscale PNG.

mod png;

pub use png::{
    export_field_png_auto,
    export_field_png_u16,
    export_pixels_png,
    ExportError,
    PngExportOptions,
};
