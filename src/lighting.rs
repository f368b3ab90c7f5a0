//! Local lighting model: ambient + diffuse + specular with shadow rays

use nalgebra::{Point3, Vector3};

use crate::intersect::{closest_intersection, Ray};
use crate::scene::{Light, Sphere};
use crate::SHADOW_EPSILON;

/// Sum the intensity contributed by every light at a surface point.
///
/// `normal` must be unit length; `view` points from the surface back toward
/// the ray origin. Point and directional lights are shadow-tested against the
/// sphere list before contributing: a point light is occluded only by
/// geometry strictly between the surface and the light (`t_max = 1` on the
/// unnormalized light vector), while a directional light can be occluded by
/// a sphere arbitrarily far along its direction (`t_max = INFINITY`).
///
/// The returned intensity is unbounded above; clamping happens only at the
/// final color conversion.
pub fn compute_lighting(
    point: Point3<f32>,
    normal: Vector3<f32>,
    view: Vector3<f32>,
    spheres: &[Sphere],
    lights: &[Light],
    specular: Option<f32>,
) -> f32 {
    let mut total = 0.0;
    let normal_len = normal.norm();
    let view_len = view.norm();

    for light in lights {
        let (light_dir, t_max, intensity) = match light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            Light::Point {
                intensity,
                position,
            } => (position - point, 1.0, *intensity),
            Light::Directional {
                intensity,
                direction,
            } => (*direction, f32::INFINITY, *intensity),
        };

        // Shadow test. The epsilon keeps the surface from occluding itself
        // at t = 0; an occluded light contributes nothing, but the other
        // lights are unaffected.
        let shadow_ray = Ray::new(point, light_dir);
        if closest_intersection(&shadow_ray, SHADOW_EPSILON, t_max, spheres).is_some() {
            continue;
        }

        let n_dot_l = normal.dot(&light_dir);
        if n_dot_l > 0.0 {
            total += intensity * n_dot_l / (normal_len * light_dir.norm());
        }

        if let Some(exponent) = specular {
            let reflection = normal * (2.0 * normal.dot(&light_dir)) - light_dir;
            let r_dot_v = reflection.dot(&view);
            if r_dot_v > 0.0 {
                total += intensity * (r_dot_v / (reflection.norm() * view_len)).powf(exponent);
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;
    use crate::scene::Sphere;

    fn up() -> Vector3<f32> {
        Vector3::y()
    }

    #[test]
    fn test_ambient_only() {
        let lights = [Light::Ambient { intensity: 0.2 }];
        let total = compute_lighting(Point3::origin(), up(), up(), &[], &lights, None);
        assert!((total - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_diffuse_head_on_directional() {
        let lights = [Light::Directional {
            intensity: 0.8,
            direction: up(),
        }];
        let total = compute_lighting(Point3::origin(), up(), up(), &[], &lights, None);
        assert!((total - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_diffuse_ignores_light_behind_surface() {
        let lights = [Light::Directional {
            intensity: 0.8,
            direction: -up(),
        }];
        let total = compute_lighting(Point3::origin(), up(), up(), &[], &lights, None);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_diffuse_scales_with_cosine() {
        // Light at 45 degrees to the normal.
        let lights = [Light::Directional {
            intensity: 1.0,
            direction: Vector3::new(1.0, 1.0, 0.0),
        }];
        let total = compute_lighting(Point3::origin(), up(), up(), &[], &lights, None);
        assert!((total - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_specular_head_on_adds_full_intensity() {
        // Normal, light, and view all aligned: reflection == light vector,
        // so the specular term is intensity * 1^exponent.
        let lights = [Light::Directional {
            intensity: 0.5,
            direction: up(),
        }];
        let total = compute_lighting(Point3::origin(), up(), up(), &[], &lights, Some(10.0));
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_specular_skipped_without_exponent() {
        let lights = [Light::Directional {
            intensity: 0.5,
            direction: up(),
        }];
        let with = compute_lighting(Point3::origin(), up(), up(), &[], &lights, Some(10.0));
        let without = compute_lighting(Point3::origin(), up(), up(), &[], &lights, None);
        assert!(with > without);
        assert!((without - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_point_light_shadowed_by_blocker() {
        // Blocker halfway between the surface and the light kills that
        // light's diffuse term; ambient is unaffected.
        let blocker = Sphere::new(Point3::new(0.0, 1.0, 0.0), 0.3, Color::RED, None);
        let lights = [
            Light::Ambient { intensity: 0.3 },
            Light::Point {
                intensity: 0.5,
                position: Point3::new(0.0, 2.0, 0.0),
            },
        ];

        let lit = compute_lighting(Point3::origin(), up(), up(), &[], &lights, None);
        assert!((lit - 0.8).abs() < 1e-5);

        let shadowed = compute_lighting(Point3::origin(), up(), up(), &[blocker], &lights, None);
        assert!((shadowed - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_shadow_skips_only_occluded_light() {
        // One occluded point light, one clear directional light: only the
        // occluded light's contribution disappears.
        let blocker = Sphere::new(Point3::new(0.0, 1.0, 0.0), 0.3, Color::RED, None);
        let lights = [
            Light::Point {
                intensity: 0.5,
                position: Point3::new(0.0, 2.0, 0.0),
            },
            Light::Directional {
                intensity: 0.4,
                direction: Vector3::new(1.0, 0.2, 0.0),
            },
        ];

        let shadowed = compute_lighting(Point3::origin(), up(), up(), &[blocker], &lights, None);
        let directional_only =
            compute_lighting(Point3::origin(), up(), up(), &[], &lights[1..], None);
        assert!((shadowed - directional_only).abs() < 1e-5);
        assert!(shadowed > 0.0);
    }

    #[test]
    fn test_blocker_beyond_point_light_does_not_shadow() {
        // t_max = 1 on the unnormalized light vector: geometry past the
        // light itself cannot occlude it.
        let beyond = Sphere::new(Point3::new(0.0, 4.0, 0.0), 0.5, Color::RED, None);
        let lights = [Light::Point {
            intensity: 0.5,
            position: Point3::new(0.0, 2.0, 0.0),
        }];

        let total = compute_lighting(Point3::origin(), up(), up(), &[beyond], &lights, None);
        assert!((total - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_distant_blocker_shadows_directional_light() {
        // Directional shadows use t_max = INFINITY, so even a far sphere
        // along the light direction occludes.
        let far = Sphere::new(Point3::new(0.0, 100.0, 0.0), 0.5, Color::RED, None);
        let lights = [Light::Directional {
            intensity: 0.5,
            direction: up(),
        }];

        let total = compute_lighting(Point3::origin(), up(), up(), &[far], &lights, None);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        // The shading point sits on a sphere of the scene; the epsilon on
        // t_min keeps that sphere from occluding its own surface.
        let host = Sphere::new(Point3::origin(), 1.0, Color::RED, None);
        let point = Point3::new(0.0, 1.0, 0.0);
        let lights = [Light::Point {
            intensity: 0.6,
            position: Point3::new(0.0, 3.0, 0.0),
        }];

        let total = compute_lighting(point, up(), up(), &[host], &lights, None);
        assert!((total - 0.6).abs() < 1e-5);
    }
}
