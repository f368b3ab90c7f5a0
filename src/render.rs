//! Viewport mapping and the per-pixel render loop

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::canvas::{Canvas, Color};
use crate::intersect::{closest_intersection, Ray};
use crate::lighting::compute_lighting;
use crate::scene::Scene;

/// Map a canvas coordinate (origin at the image center) to a point on the
/// projection plane. Used as a ray direction from the camera, this gives a
/// pinhole perspective projection; the field of view is fixed by the ratio
/// `viewport_size / projection_plane`.
pub fn canvas_to_viewport(
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    scene: &Scene,
) -> Vector3<f32> {
    Vector3::new(
        x as f32 * scene.viewport_size / width as f32,
        y as f32 * scene.viewport_size / height as f32,
        scene.projection_plane,
    )
}

/// Trace a single ray into the scene and return its working-space color.
///
/// A miss returns the background color. A hit is shaded with the local
/// lighting model; the result is the sphere color scaled by the summed
/// intensity and is intentionally unclamped.
pub fn trace_ray(ray: &Ray, t_min: f32, t_max: f32, scene: &Scene) -> Vector3<f32> {
    let Some(hit) = closest_intersection(ray, t_min, t_max, &scene.spheres) else {
        return scene.background.to_vector();
    };

    let point = ray.at(hit.t);
    let normal = (point - hit.sphere.center).normalize();
    let view = -ray.direction;

    let intensity = compute_lighting(
        point,
        normal,
        view,
        &scene.spheres,
        &scene.lights,
        hit.sphere.specular,
    );

    hit.sphere.color.to_vector() * intensity
}

// Primary rays start at t = 1, just past the camera on the projection plane.
const T_MIN_PRIMARY: f32 = 1.0;

fn primary_ray(x: i32, y: i32, width: usize, height: usize, scene: &Scene) -> Ray {
    let direction = canvas_to_viewport(x, y, width, height, scene);
    Ray::new(scene.camera, direction)
}

/// Render the scene into the canvas, one pixel at a time.
///
/// Iterates every raster pixel, converts to canvas coordinates, traces the
/// primary ray, and writes the clamped color. Pixels are fully independent,
/// so iteration order does not affect the output.
pub fn render_scene(scene: &Scene, canvas: &mut Canvas) {
    let width = canvas.width();
    let height = canvas.height();

    for raster_y in 0..height {
        let y = height as i32 / 2 - raster_y as i32 - 1;
        for raster_x in 0..width {
            let x = raster_x as i32 - width as i32 / 2;
            let ray = primary_ray(x, y, width, height, scene);
            let color = trace_ray(&ray, T_MIN_PRIMARY, f32::INFINITY, scene);
            canvas.put_pixel(x, y, Color::from_unclamped(color));
        }
    }
}

/// Parallel variant of [`render_scene`]: rows are rendered by independent
/// rayon workers, each owning a disjoint row slice of the pixel buffer.
/// Produces a raster identical to the serial loop.
pub fn render_scene_par(scene: &Scene, canvas: &mut Canvas) {
    let width = canvas.width();
    let height = canvas.height();

    canvas
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(raster_y, row)| {
            let y = height as i32 / 2 - raster_y as i32 - 1;
            for (raster_x, pixel) in row.iter_mut().enumerate() {
                let x = raster_x as i32 - width as i32 / 2;
                let ray = primary_ray(x, y, width, height, scene);
                let color = trace_ray(&ray, T_MIN_PRIMARY, f32::INFINITY, scene);
                *pixel = Color::from_unclamped(color);
            }
        });
}
