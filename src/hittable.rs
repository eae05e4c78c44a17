//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives, HitRecord for storing
//! intersection data, and HittableList for resolving the closest hit across a
//! whole scene.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Only meaningful after a `hit` call returned true.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point (unit vector, facing the ray)
    pub normal: Vec3,
    /// Ray parameter of the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
}

impl HitRecord {
    /// Set surface normal and determine front/back face.
    ///
    /// `outward_normal` must have unit length. The stored normal always points
    /// against the incident ray.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection strictly inside `ray_t`.
    ///
    /// Returns true if hit, filling every field of `rec`. On a miss `rec` is
    /// left in an unspecified state.
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Members are kept in insertion
/// order.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a new list with a single hittable object
    pub fn with_object(object: Box<dyn Hittable>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    /// Clear all objects from the list
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut temp_rec = HitRecord::default();
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Each hit shrinks the window, so later objects must be strictly nearer
        for object in &self.objects {
            if object.hit(r, Interval::new(ray_t.min, closest_so_far), &mut temp_rec) {
                hit_anything = true;
                closest_so_far = temp_rec.t;
                *rec = temp_rec;
            }
        }

        hit_anything
    }
}
