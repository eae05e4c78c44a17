//! normalray ray tracer
//!
//! Casts sampled rays from a pinhole camera through every pixel, resolves the
//! closest sphere hit and shades it by its surface normal. Outputs plain-text
//! PPM, PNG and EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod output;
pub mod random;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vec3;

pub use camera::Camera;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use interval::Interval;
pub use ray::Ray;
pub use scene::SceneDescription;
pub use sphere::Sphere;
pub use vec3::{Color, Point3, Vec3};
