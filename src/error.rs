//! Error type shared by rendering, scene loading and image output.

use thiserror::Error;

/// Everything that can stop a render from producing an image.
///
/// Geometric misses are not errors; these are configuration and I/O failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Camera width of zero.
    #[error("image width must be at least 1 pixel")]
    InvalidImageWidth,
    /// Camera sample count of zero.
    #[error("samples per pixel must be at least 1")]
    InvalidSampleCount,
    /// Aspect ratio that is zero, negative, NaN or infinite.
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),
    /// Width and aspect ratio give an image too large to hold in memory.
    #[error("image of {width}x{height} pixels is too large to render")]
    ImageTooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Height derived from width and aspect ratio.
        height: f64,
    },
    /// Output path with an extension no writer handles.
    #[error("unsupported output format '{0}'; expected .ppm, .png or .exr")]
    UnsupportedFormat(String),
    /// Reading a scene or writing an image failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    /// EXR encoding failed.
    #[error("EXR encoding failed: {0}")]
    Exr(String),
    /// Scene file is not valid JSON for a scene description.
    #[error("invalid scene description: {0}")]
    Scene(#[from] serde_json::Error),
}
