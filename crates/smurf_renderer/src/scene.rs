//! The world: every shape the integrator can hit.

use smurf_core::{Geometry, SceneDescription, ShapeDescription};
use smurf_math::{Bounds3, Point3, Ray, Vec3};

use crate::shape::{Shape, Surface};
use crate::{Sphere, Triangle};

/// Handle of a shape inside a [Scene].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

/// Nearest intersection found by [Scene::intersect].
#[derive(Clone, Copy)]
pub struct SceneHit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    pub id: ShapeId,
    pub shape: &'a dyn Shape,
}

/// Insertion ordered collection of shapes.
pub struct Scene {
    shapes: Vec<Box<dyn Shape>>,
    bbox: Bounds3,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            bbox: Bounds3::EMPTY,
        }
    }

    /// Build the shapes of a scene description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let mut scene = Self::new();
        for shape in &desc.shapes {
            scene.add(build_shape(shape));
        }
        log::debug!("Built scene with {} shapes", scene.len());
        scene
    }

    /// Add a shape, returning its handle.
    pub fn add(&mut self, shape: Box<dyn Shape>) -> ShapeId {
        self.bbox = self.bbox.union(&shape.bounds());
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&dyn Shape> {
        self.shapes.get(id.0).map(|s| s.as_ref())
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bounds of all shapes, empty for an empty scene.
    pub fn bounds(&self) -> Bounds3 {
        self.bbox
    }

    /// Find the nearest shape hit by `ray`.
    ///
    /// Only hits with `t > 0` count. Equal distances go to the shape added first.
    pub fn intersect(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        let mut closest: Option<SceneHit<'_>> = None;
        let mut closest_t = f32::INFINITY;

        for (i, shape) in self.shapes.iter().enumerate() {
            if let Some(t) = shape.intersect(ray) {
                if t > 0.0 && t < closest_t {
                    closest_t = t;
                    closest = Some(SceneHit {
                        t,
                        id: ShapeId(i),
                        shape: shape.as_ref(),
                    });
                }
            }
        }

        closest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

fn build_shape(desc: &ShapeDescription) -> Box<dyn Shape> {
    let surface = Surface {
        reflectance: Vec3::from(desc.reflectance),
        emittance: Vec3::from(desc.emittance),
        material: desc.material,
    };

    match desc.geometry {
        Geometry::Sphere { center, radius } => {
            Box::new(Sphere::new(Point3::from(center), radius, surface))
        }
        Geometry::Triangle { p1, p2, p3 } => Box::new(Triangle::new(
            Point3::from(p1),
            Point3::from(p2),
            Point3::from(p3),
            surface,
        )),
    }
}
