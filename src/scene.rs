//! Scene descriptions.
//!
//! A scene is a camera setup plus a list of spheres, loaded from JSON or built
//! in code. Example:
//!
//! ```json
//! {
//!     "camera": { "aspect_ratio": 1.7777777777777777, "image_width": 400 },
//!     "spheres": [
//!         { "center": [0.0, 0.0, -1.0], "radius": 0.5 },
//!         { "center": [0.0, -100.5, -1.0], "radius": 100.0 }
//!     ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::RenderError;
use crate::hittable::HittableList;
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// Camera knobs as they appear in a scene file. Missing fields keep the
/// `Camera` defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    /// Width over height of the image.
    pub aspect_ratio: Option<f64>,
    /// Image width in pixels.
    pub image_width: Option<u32>,
    /// Samples per pixel; 1 disables anti-aliasing.
    pub samples_per_pixel: Option<u32>,
    /// Fixed seed for reproducible anti-aliasing.
    pub seed: Option<u64>,
}

/// One sphere in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    /// Center as `[x, y, z]`.
    pub center: [f64; 3],
    /// Radius; negative values are clamped to zero by `Sphere::new`.
    pub radius: f64,
}

/// Complete scene: camera settings and geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    /// Camera configuration.
    #[serde(default)]
    pub camera: CameraSettings,
    /// Spheres in insertion order.
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Small sphere resting on a huge ground sphere, seen through a 16:9,
    /// 400 pixel wide camera.
    pub fn default_scene() -> Self {
        Self {
            camera: CameraSettings {
                aspect_ratio: Some(16.0 / 9.0),
                image_width: Some(400),
                ..CameraSettings::default()
            },
            spheres: vec![
                SphereDescription {
                    center: [0.0, 0.0, -1.0],
                    radius: 0.5,
                },
                SphereDescription {
                    center: [0.0, -100.5, -1.0],
                    radius: 100.0,
                },
            ],
        }
    }

    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path)?;
        let scene = Self::from_json(&text)?;
        debug!(
            "Loaded scene {} with {} sphere(s)",
            path.display(),
            scene.spheres.len()
        );
        Ok(scene)
    }

    /// Build the world, one sphere per description, in file order.
    pub fn build_world(&self) -> HittableList {
        let mut world = HittableList::new();
        for sphere in &self.spheres {
            world.add(Box::new(Sphere::new(
                Point3::from_array(sphere.center),
                sphere.radius,
            )));
        }
        world
    }

    /// Build a camera with these settings applied over the defaults.
    pub fn build_camera(&self) -> Camera {
        let mut camera = Camera::new();
        let settings = &self.camera;
        if let Some(aspect_ratio) = settings.aspect_ratio {
            camera.aspect_ratio = aspect_ratio;
        }
        if let Some(image_width) = settings.image_width {
            camera.image_width = image_width;
        }
        if let Some(samples_per_pixel) = settings.samples_per_pixel {
            camera.samples_per_pixel = samples_per_pixel;
        }
        camera.seed = settings.seed;
        camera
    }
}
