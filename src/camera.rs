//! Camera for ray generation and scene rendering

use std::io::Write;

use image::Rgb;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use crate::error::RenderError;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::output::{write_ppm, LinearImage};
use crate::random;
use crate::ray::Ray;
use crate::vec3::{unit_vector, Color, Point3, Vec3};

/// Distance from the camera center to the viewport plane.
const FOCAL_LENGTH: f64 = 1.0;
/// World-space height of the viewport.
const VIEWPORT_HEIGHT: f64 = 2.0;

/// Pinhole camera at the origin looking down -Z.
///
/// The public fields are the configuration. Everything else is derived at the
/// start of each `render` call and overwritten by the next one.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Number of samples for each pixel. 1 renders the exact pixel center,
    /// more than 1 averages randomly jittered samples (anti-aliasing).
    pub samples_per_pixel: u32,
    /// Seed for the jitter streams. `None` draws a new seed per render.
    pub seed: Option<u64>,

    /// Rendered image height, derived from width and aspect ratio
    image_height: u32,
    /// Camera position in world space
    center: Point3,
    /// World position of the top-left pixel center (pixel 0,0)
    pixel00_loc: Point3,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3,
    /// Color scale factor for a sum of pixel samples (1.0 / samples_per_pixel)
    pixel_samples_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: square 100 pixel wide image, 10 samples per pixel, unseeded.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            seed: None,
            image_height: 1,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            pixel_samples_scale: 1.0,
        }
    }

    /// Image height derived by the last `initialize` or `render` call.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// True when each pixel averages several jittered samples.
    pub fn is_sampling(&self) -> bool {
        self.samples_per_pixel > 1
    }

    /// Renders the scene into a linear color buffer.
    ///
    /// Scanlines are traced in parallel; each one draws its jitter from its own
    /// stream, so a fixed `seed` gives identical images across runs.
    pub fn render(&mut self, world: &dyn Hittable) -> Result<LinearImage, RenderError> {
        self.initialize()?;
        let camera = &*self;

        let seed = camera.seed.unwrap_or_else(random::fresh_seed);
        if camera.is_sampling() {
            debug!("Sampling seed: {}", seed);
        }

        let mut image = camera.allocate_image()?;

        info!(
            "Rendering {}x{} with {} sample(s) per pixel on {} threads...",
            camera.image_width,
            camera.image_height,
            camera.samples_per_pixel,
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(u64::from(camera.image_height));
        pb.set_style(
            ProgressStyle::with_template("{msg} {bar:40} {pos}/{len} scanlines ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        image.enumerate_rows_mut().par_bridge().for_each(|(j, row)| {
            let mut rng = random::scanline_rng(seed, j);
            for (i, _, pixel) in row {
                let pixel_color = camera.pixel_color(i, j, world, &mut rng);
                *pixel = Rgb([pixel_color.x, pixel_color.y, pixel_color.z]);
            }
            pb.inc(1);
        });

        pb.finish_with_message("Done.");
        info!("Image generated in {:.2?}", generation_start.elapsed());

        Ok(image)
    }

    /// Renders the scene and writes it to `out` as a `P3` stream.
    pub fn render_ppm<W: Write + ?Sized>(
        &mut self,
        world: &dyn Hittable,
        out: &mut W,
    ) -> Result<(), RenderError> {
        let image = self.render(world)?;
        write_ppm(out, &image)?;
        Ok(())
    }

    /// Validate the configuration and derive the viewport geometry.
    ///
    /// Called by `render`; exposed so ray generation can be used on its own.
    pub fn initialize(&mut self) -> Result<(), RenderError> {
        if self.image_width == 0 {
            return Err(RenderError::InvalidImageWidth);
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(RenderError::InvalidAspectRatio(self.aspect_ratio));
        }

        let image_height = (f64::from(self.image_width) / self.aspect_ratio).floor().max(1.0);
        if image_height > f64::from(u32::MAX) {
            return Err(RenderError::ImageTooLarge {
                width: self.image_width,
                height: image_height,
            });
        }
        self.image_height = image_height as u32;
        // Buffer holds three f64 channels per pixel
        let buffer_bytes = (self.image_width as usize)
            .checked_mul(self.image_height as usize)
            .and_then(|pixels| pixels.checked_mul(3 * std::mem::size_of::<f64>()));
        if buffer_bytes.is_none() {
            return Err(RenderError::ImageTooLarge {
                width: self.image_width,
                height: image_height,
            });
        }
        self.pixel_samples_scale = 1.0 / f64::from(self.samples_per_pixel);
        self.center = Point3::ZERO;

        let viewport_width =
            VIEWPORT_HEIGHT * (f64::from(self.image_width) / f64::from(self.image_height));

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -VIEWPORT_HEIGHT, 0.0);

        self.pixel_delta_u = viewport_u / f64::from(self.image_width);
        self.pixel_delta_v = viewport_v / f64::from(self.image_height);

        let viewport_upper_left = self.center
            - Vec3::new(0.0, 0.0, FOCAL_LENGTH)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        Ok(())
    }

    /// Zeroed buffer for the derived image size, failing instead of aborting
    /// when the allocation cannot be satisfied.
    fn allocate_image(&self) -> Result<LinearImage, RenderError> {
        let too_large = || RenderError::ImageTooLarge {
            width: self.image_width,
            height: f64::from(self.image_height),
        };
        let len = self.image_width as usize * self.image_height as usize * 3;

        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| too_large())?;
        buffer.resize(len, 0.0);
        LinearImage::from_raw(self.image_width, self.image_height, buffer).ok_or_else(too_large)
    }

    /// Generate a camera ray through pixel (i, j).
    ///
    /// With sampling the target point is jittered inside the pixel square,
    /// otherwise the ray goes through the exact pixel center.
    pub fn get_ray<R: Rng + ?Sized>(&self, i: u32, j: u32, rng: &mut R) -> Ray {
        let offset = if self.is_sampling() {
            random::sample_square(rng)
        } else {
            Vec3::ZERO
        };
        let pixel_sample = self.pixel00_loc
            + ((f64::from(i) + offset.x) * self.pixel_delta_u)
            + ((f64::from(j) + offset.y) * self.pixel_delta_v);

        Ray::new(self.center, pixel_sample - self.center)
    }

    /// Averaged color of pixel (i, j).
    fn pixel_color<R: Rng + ?Sized>(
        &self,
        i: u32,
        j: u32,
        world: &dyn Hittable,
        rng: &mut R,
    ) -> Color {
        if !self.is_sampling() {
            return ray_color(&self.get_ray(i, j, rng), world);
        }

        let mut pixel_color = Color::ZERO;
        for _sample in 0..self.samples_per_pixel {
            let r = self.get_ray(i, j, rng);
            pixel_color += ray_color(&r, world);
        }
        pixel_color * self.pixel_samples_scale
    }
}

/// Color seen along a ray.
///
/// Hits are shaded by their surface normal. Misses get a vertical gradient
/// from white (looking down) to sky blue (looking up).
pub fn ray_color(r: &Ray, world: &dyn Hittable) -> Color {
    let mut rec = HitRecord::default();
    if world.hit(r, Interval::new(0.0, f64::INFINITY), &mut rec) {
        return 0.5 * (rec.normal + Color::ONE);
    }

    let unit_direction = unit_vector(r.direction);
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}
