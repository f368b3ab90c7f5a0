//! A minimal CPU ray tracer for sphere scenes
//!
//! Casts a primary ray from a pinhole camera through every pixel of a
//! viewport, finds the nearest sphere hit, and shades it with a local
//! lighting model (ambient, diffuse, specular) plus shadow rays. No
//! acceleration structures, no reflection bounces, no anti-aliasing:
//! a reference tracer, not a production renderer.

pub mod canvas;
pub mod intersect;
pub mod lighting;
pub mod render;
pub mod scene;

pub use canvas::{Canvas, Color};
pub use intersect::Ray;
pub use render::{render_scene, render_scene_par, trace_ray};
pub use scene::{Light, Scene, SceneError, Sphere};

/// Offset applied to shadow-ray t's so a surface cannot occlude itself
/// through floating-point rounding at t near 0.
pub const SHADOW_EPSILON: f32 = 1e-4;

/// UTF-8 character gradient from dark to light, for terminal previews.
pub const ASCII_GRADIENT: &str = " ·∙:;░▒▓█";
