//! Ray-sphere intersection
//!
//! Every ray is tested against every sphere; with no acceleration structure
//! the cost is O(rays × spheres), which is fine at this scale.

use nalgebra::{Point3, Vector3};

use crate::scene::Sphere;

/// A ray in 3D space. Ephemeral: built fresh per primary ray or shadow test,
/// never stored. The direction is not required to be unit length.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Nearest surface hit along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub sphere: &'a Sphere,
    pub t: f32,
}

/// Solve the quadratic for a ray against one sphere, returning both roots.
/// No real roots means no intersection and yields `(INFINITY, INFINITY)`.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> (f32, f32) {
    let oc = ray.origin - sphere.center;

    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * oc.dot(&ray.direction);
    let c = oc.dot(&oc) - sphere.radius_sq;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    let sqrt_disc = discriminant.sqrt();

    // Both roots divide by the full 2a quantity.
    let t1 = (-b + sqrt_disc) / (2.0 * a);
    let t2 = (-b - sqrt_disc) / (2.0 * a);
    (t1, t2)
}

/// Scan every sphere and keep the smallest root strictly inside the open
/// interval `(t_min, t_max)`. Scene order breaks ties: the strict `<`
/// comparison means the first sphere reached at a given t wins.
pub fn closest_intersection<'a>(
    ray: &Ray,
    t_min: f32,
    t_max: f32,
    spheres: &'a [Sphere],
) -> Option<Hit<'a>> {
    let mut closest_t = f32::INFINITY;
    let mut closest_sphere = None;

    for sphere in spheres {
        let (t1, t2) = intersect_ray_sphere(ray, sphere);
        if t1 < closest_t && t_min < t1 && t1 < t_max {
            closest_t = t1;
            closest_sphere = Some(sphere);
        }
        if t2 < closest_t && t_min < t2 && t2 < t_max {
            closest_t = t2;
            closest_sphere = Some(sphere);
        }
    }

    closest_sphere.map(|sphere| Hit {
        sphere,
        t: closest_t,
    })
}
