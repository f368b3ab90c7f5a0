//! Scene definitions: spheres, lights, camera, and validation

use nalgebra::{Point3, Vector3};
use thiserror::Error;

use crate::canvas::Color;

/// Sphere primitive
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    /// Cached radius squared, used on every intersection test.
    pub radius_sq: f32,
    pub color: Color,
    /// Shininess exponent; `None` means the surface has no specular highlight.
    pub specular: Option<f32>,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32, color: Color, specular: Option<f32>) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
            color,
            specular,
        }
    }
}

/// Light source. Intensities are fractional weights; a physically plausible
/// scene keeps their sum at or below 1, but nothing enforces that; over-bright
/// sums are resolved only by the final pixel clamp.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { intensity: f32, position: Point3<f32> },
    Directional { intensity: f32, direction: Vector3<f32> },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => *intensity,
        }
    }
}

/// Scene-validation failures. Degenerate geometry and light configuration are
/// caught here, before rendering; the render core assumes a valid scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },
    #[error("light {index} has negative intensity {intensity}")]
    NegativeIntensity { index: usize, intensity: f32 },
    #[error("directional light {index} has a zero-length direction")]
    ZeroDirection { index: usize },
    #[error("viewport size must be positive, got {0}")]
    InvalidViewportSize(f32),
    #[error("projection plane distance must be positive, got {0}")]
    InvalidProjectionPlane(f32),
}

/// The complete scene: geometry, lights, camera, and projection parameters.
/// Immutable for the duration of a render; the render core only borrows it.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Side length of the square viewport rectangle.
    pub viewport_size: f32,
    /// Camera-to-viewport distance along the viewing axis.
    pub projection_plane: f32,
    pub background: Color,
    /// Origin of every primary ray.
    pub camera: Point3<f32>,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(
        viewport_size: f32,
        projection_plane: f32,
        background: Color,
        spheres: Vec<Sphere>,
        lights: Vec<Light>,
    ) -> Self {
        Self {
            viewport_size,
            projection_plane,
            background,
            camera: Point3::origin(),
            spheres,
            lights,
        }
    }

    /// Check the scene for degenerate geometry and light configuration.
    /// A zero-length directional light would divide by zero during shading,
    /// so it is rejected here rather than guarded per ray.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.viewport_size <= 0.0 {
            return Err(SceneError::InvalidViewportSize(self.viewport_size));
        }
        if self.projection_plane <= 0.0 {
            return Err(SceneError::InvalidProjectionPlane(self.projection_plane));
        }
        for (index, sphere) in self.spheres.iter().enumerate() {
            if sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }
        for (index, light) in self.lights.iter().enumerate() {
            if light.intensity() < 0.0 {
                return Err(SceneError::NegativeIntensity {
                    index,
                    intensity: light.intensity(),
                });
            }
            if let Light::Directional { direction, .. } = light {
                if direction.norm_squared() == 0.0 {
                    return Err(SceneError::ZeroDirection { index });
                }
            }
        }
        Ok(())
    }

    /// The classic demo scene: three shiny unit spheres resting on a huge
    /// yellow ground sphere, lit by ambient, point, and directional lights.
    pub fn four_spheres() -> Self {
        let spheres = vec![
            Sphere::new(Point3::new(0.0, -1.0, 3.0), 1.0, Color::RED, Some(500.0)),
            Sphere::new(Point3::new(2.0, 0.0, 4.0), 1.0, Color::BLUE, Some(500.0)),
            Sphere::new(Point3::new(-2.0, 0.0, 4.0), 1.0, Color::GREEN, Some(10.0)),
            Sphere::new(
                Point3::new(0.0, -5001.0, 0.0),
                5000.0,
                Color::YELLOW,
                Some(1000.0),
            ),
        ];

        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Point3::new(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.2,
                direction: Vector3::new(1.0, 4.0, 4.0),
            },
        ];

        Self::new(1.0, 1.0, Color::WHITE, spheres, lights)
    }
}
