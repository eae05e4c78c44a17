//! # Output Module
//!
//! Turns the linear color buffer produced by the camera into files:
//! - Plain-text PPM (`P3`), the canonical output of the renderer
//! - 8-bit PNG using the same byte encoding as the PPM writer
//! - OpenEXR with the linear values kept as f32
//!
//! ## Byte encoding
//!
//! Each channel is clamped to [0.000, 0.999], multiplied by 256 and truncated
//! toward zero, which maps [0, 1) evenly onto the 256 byte values. No gamma
//! correction is applied.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;

use crate::error::RenderError;
use crate::interval::Interval;
use crate::vec3::Color;

/// Linear f64 RGB image as produced by `Camera::render`.
pub type LinearImage = ImageBuffer<Rgb<f64>, Vec<f64>>;

/// Channel range accepted before scaling to bytes.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Translate a [0,1] color to the byte range [0,255].
pub fn encode_color(pixel_color: Color) -> [u8; 3] {
    let to_byte = |channel: f64| (256.0 * INTENSITY.clamp(channel)) as u8;
    [
        to_byte(pixel_color.x),
        to_byte(pixel_color.y),
        to_byte(pixel_color.z),
    ]
}

/// Write one pixel as a `"r g b"` line.
pub fn write_color<W: Write + ?Sized>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [r, g, b] = encode_color(pixel_color);
    writeln!(out, "{} {} {}", r, g, b)
}

/// Write the image as a plain-text PPM (`P3`) stream, rows top to bottom.
pub fn write_ppm<W: Write + ?Sized>(out: &mut W, image: &LinearImage) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for pixel in image.pixels() {
        write_color(out, Color::new(pixel[0], pixel[1], pixel[2]))?;
    }
    out.flush()
}

/// Save the image, choosing the format from the file extension.
///
/// `.ppm` writes the `P3` stream, `.png` writes 8-bit RGB with the PPM byte
/// encoding, `.exr` writes linear f32 RGB. Anything else is rejected.
pub fn save_image(image: &LinearImage, output_path: &Path) -> Result<(), RenderError> {
    let extension = output_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_image_as_ppm(image, output_path)?,
        "png" => save_image_as_png(image, output_path)?,
        "exr" => save_image_as_exr(image, output_path)?,
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    }

    info!("Image saved as {}", output_path.display());
    Ok(())
}

fn save_image_as_ppm(image: &LinearImage, output_path: &Path) -> Result<(), RenderError> {
    let mut out = BufWriter::new(File::create(output_path)?);
    write_ppm(&mut out, image)?;
    Ok(())
}

fn save_image_as_png(image: &LinearImage, output_path: &Path) -> Result<(), RenderError> {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb(encode_color(Color::new(pixel[0], pixel[1], pixel[2])))
        });

    u8_image.save(output_path)?;
    Ok(())
}

fn save_image_as_exr(image: &LinearImage, output_path: &Path) -> Result<(), RenderError> {
    let width = image.width() as usize;

    let pixels = image
        .pixels()
        .map(|rgb| (rgb[0] as f32, rgb[1] as f32, rgb[2] as f32))
        .collect::<Vec<(f32, f32, f32)>>();

    write_rgb_file(output_path, width, image.height() as usize, |x, y| {
        pixels[y * width + x]
    })
    .map_err(|e| RenderError::Exr(e.to_string()))
}
