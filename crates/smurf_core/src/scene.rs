//! Scene description types.
//!
//! A [SceneDescription] is the plain data a renderer is built from: settings, camera
//! and a list of shapes. It is stored on disk as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use smurf_math::Vector3;
use thiserror::Error;

use crate::settings::{CameraSettings, PixelSampling, RenderSettings, MAX_STRATA};

/// Errors that can occur while loading or validating a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid shape #{index}: {reason}")]
    InvalidShape { index: usize, reason: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidRender(String),
}

/// Result type for scene description operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Reflection model of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Ideal Lambertian reflector
    #[default]
    Diffuse,
    /// Ideal specular reflector
    Mirror,
}

/// Geometry of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Sphere { center: [f32; 3], radius: f32 },
    /// Winding of `p1`, `p2`, `p3` picks the facing of the flat normal.
    Triangle { p1: [f32; 3], p2: [f32; 3], p3: [f32; 3] },
}

/// One shape of the scene: geometry plus its surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescription {
    #[serde(flatten)]
    pub geometry: Geometry,

    /// Reflectance color (RGB, 0-1)
    pub reflectance: [f32; 3],

    /// Emitted radiance (RGB), black for non-emitters
    #[serde(default)]
    pub emittance: [f32; 3],

    #[serde(default)]
    pub material: MaterialKind,
}

impl ShapeDescription {
    /// A diffuse sphere.
    pub fn sphere(center: [f32; 3], radius: f32, reflectance: [f32; 3]) -> Self {
        Self {
            geometry: Geometry::Sphere { center, radius },
            reflectance,
            emittance: [0.0; 3],
            material: MaterialKind::Diffuse,
        }
    }

    /// A diffuse triangle.
    pub fn triangle(p1: [f32; 3], p2: [f32; 3], p3: [f32; 3], reflectance: [f32; 3]) -> Self {
        Self {
            geometry: Geometry::Triangle { p1, p2, p3 },
            reflectance,
            emittance: [0.0; 3],
            material: MaterialKind::Diffuse,
        }
    }

    pub fn with_material(mut self, material: MaterialKind) -> Self {
        self.material = material;
        self
    }

    pub fn with_emittance(mut self, emittance: [f32; 3]) -> Self {
        self.emittance = emittance;
        self
    }

    fn validate(&self) -> Result<(), String> {
        if !is_finite(self.reflectance) || self.reflectance.iter().any(|c| *c < 0.0) {
            return Err(format!("bad reflectance {:?}", self.reflectance));
        }
        if !is_finite(self.emittance) || self.emittance.iter().any(|c| *c < 0.0) {
            return Err(format!("bad emittance {:?}", self.emittance));
        }

        match &self.geometry {
            Geometry::Sphere { center, radius } => {
                if !is_finite(*center) {
                    return Err(format!("non-finite center {:?}", center));
                }
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(format!("radius must be positive, got {}", radius));
                }
            }
            Geometry::Triangle { p1, p2, p3 } => {
                if !is_finite(*p1) || !is_finite(*p2) || !is_finite(*p3) {
                    return Err("non-finite vertex".to_string());
                }
                let e1 = Vector3::from(*p2) - Vector3::from(*p1);
                let e2 = Vector3::from(*p3) - Vector3::from(*p1);
                // Relative to the edges so small triangles are kept
                let cross = e2.cross(e1).length_squared();
                let scale = e1.length_squared() * e2.length_squared();
                if !cross.is_finite() || cross <= f32::EPSILON * scale {
                    return Err("degenerate triangle".to_string());
                }
            }
        }
        Ok(())
    }
}

/// Complete input of a render: settings, camera and shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub render: RenderSettings,

    #[serde(default)]
    pub camera: CameraSettings,

    pub shapes: Vec<ShapeDescription>,
}

impl SceneDescription {
    /// Load and validate a scene description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        log::info!(
            "Loaded scene {} ({} shapes, {}x{})",
            path.display(),
            scene.shapes.len(),
            scene.camera.width,
            scene.camera.height
        );
        Ok(scene)
    }

    /// Parse and validate a scene description from a JSON string.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json_pretty(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the description for values no renderer can work with.
    ///
    /// A camera basis that is not orthonormal is only warned about, the projection
    /// will be skewed but still well defined.
    pub fn validate(&self) -> SceneResult<()> {
        self.validate_render()?;
        self.validate_camera()?;

        for (index, shape) in self.shapes.iter().enumerate() {
            shape
                .validate()
                .map_err(|reason| SceneError::InvalidShape { index, reason })?;
        }

        if self.shapes.is_empty() {
            log::warn!("Scene has no shapes, every pixel will show the background");
        }
        Ok(())
    }

    fn validate_render(&self) -> SceneResult<()> {
        let render = &self.render;
        if !is_finite(render.background) {
            return Err(SceneError::InvalidRender(format!(
                "non-finite background {:?}",
                render.background
            )));
        }
        if render.sample_budget == 0 {
            return Err(SceneError::InvalidRender(
                "sample budget must be at least 1".to_string(),
            ));
        }
        if let PixelSampling::Stratified { strata } = render.pixel_sampling {
            if strata == 0 || strata > MAX_STRATA {
                return Err(SceneError::InvalidRender(format!(
                    "strata must be in 1..={}, got {}",
                    MAX_STRATA, strata
                )));
            }
        }
        Ok(())
    }

    fn validate_camera(&self) -> SceneResult<()> {
        let camera = &self.camera;
        if camera.width == 0 || camera.height == 0 {
            return Err(SceneError::InvalidCamera(format!(
                "film size {}x{} is empty",
                camera.width, camera.height
            )));
        }
        for (name, v) in [
            ("position", camera.position),
            ("direction", camera.direction),
            ("up", camera.up),
            ("right", camera.right),
        ] {
            if !is_finite(v) {
                return Err(SceneError::InvalidCamera(format!("non-finite {} {:?}", name, v)));
            }
        }
        for (name, v) in [
            ("direction", camera.direction),
            ("up", camera.up),
            ("right", camera.right),
        ] {
            if Vector3::from(v).length_squared() <= f32::EPSILON {
                return Err(SceneError::InvalidCamera(format!("{} has zero length", name)));
            }
        }
        if let Some(d) = camera.film_distance {
            if !d.is_finite() || d <= 0.0 {
                return Err(SceneError::InvalidCamera(format!(
                    "film distance must be positive, got {}",
                    d
                )));
            }
        }
        if !camera.pixel_step.is_finite() || camera.pixel_step <= 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "pixel step must be positive, got {}",
                camera.pixel_step
            )));
        }
        if !camera.move_step.is_finite() || camera.move_step < 0.0 {
            return Err(SceneError::InvalidCamera(format!(
                "bad move step {}",
                camera.move_step
            )));
        }

        let direction = Vector3::from(camera.direction);
        let up = Vector3::from(camera.up);
        let right = Vector3::from(camera.right);
        let eps = 1e-3;
        let orthonormal = [direction, up, right]
            .iter()
            .all(|v| (v.length() - 1.0).abs() < eps)
            && direction.abs_dot(up) < eps
            && direction.abs_dot(right) < eps
            && up.abs_dot(right) < eps;
        if !orthonormal {
            log::warn!("Camera basis is not orthonormal, the image will be distorted");
        }
        Ok(())
    }

    /// The built-in demo scene: seven diffuse and mirror spheres above a large green
    /// ground triangle, lit by the background.
    pub fn demo() -> Self {
        let diffuse = MaterialKind::Diffuse;
        let mirror = MaterialKind::Mirror;
        let shapes = vec![
            ShapeDescription::sphere([5.0, 1.0, 5.0], 3.0, [1.0, 0.0, 0.0]),
            ShapeDescription::sphere([1.0, 1.0, 4.0], 1.0, [0.0, 0.0, 1.0]),
            ShapeDescription::sphere([5.0, 3.0, -5.0], 1.0, [0.0, 1.0, 1.0]),
            ShapeDescription::sphere([-5.0, 1.0, -5.0], 2.0, [1.0, 1.0, 0.0]),
            ShapeDescription::sphere([-2.5, 3.0, 4.0], 2.0, [1.0, 1.0, 1.0]).with_material(mirror),
            ShapeDescription::sphere([-6.0, 2.5, 3.5], 3.0, [1.0, 1.0, 1.0]).with_material(diffuse),
            ShapeDescription::sphere([1.0, 2.0, -6.0], 2.5, [1.0, 1.0, 1.0]).with_material(mirror),
            // Ground, normal points up
            ShapeDescription::triangle(
                [-300.0, 0.0, 300.0],
                [0.0, 0.0, -100.0],
                [300.0, 0.0, 300.0],
                [0.0, 1.0, 0.0],
            ),
        ];

        Self {
            render: RenderSettings::default(),
            camera: CameraSettings::default(),
            shapes,
        }
    }
}

fn is_finite(v: [f32; 3]) -> bool {
    v.iter().all(|c| c.is_finite())
}
