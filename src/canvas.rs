//! Render target: a flat RGB pixel buffer addressed in canvas coordinates
//!
//! Canvas coordinates put the origin at the image center with y pointing up,
//! which is what the viewport mapping works in. Raster coordinates (origin
//! top-left, y down) only appear at the buffer edge: `put_pixel` converts,
//! and out-of-bounds writes are silently dropped.

use nalgebra::Vector3;

/// An 8-bit RGB color. Only produced by clamping a working-space
/// `Vector3<f32>` at the final step before a pixel write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lift into working space, where channels range over 0.0..=255.0 and
    /// may exceed that after lighting is applied.
    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    /// Clamp each channel of a working-space color to [0, 255] and truncate.
    /// Idempotent on already-representable colors.
    pub fn from_unclamped(v: Vector3<f32>) -> Self {
        Self {
            r: v.x.clamp(0.0, 255.0) as u8,
            g: v.y.clamp(0.0, 255.0) as u8,
            b: v.z.clamp(0.0, 255.0) as u8,
        }
    }
}

/// 2D pixel buffer the render loop writes into.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel data, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Pixel at raster coordinates (origin top-left).
    ///
    /// Panics if the coordinate is outside the raster. A raster_x past the
    /// row end would otherwise alias into the next row in the flat buffer.
    pub fn pixel(&self, raster_x: usize, raster_y: usize) -> Color {
        assert!(
            raster_x < self.width && raster_y < self.height,
            "pixel ({raster_x}, {raster_y}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[raster_y * self.width + raster_x]
    }

    /// Write a pixel addressed in canvas coordinates (origin at the image
    /// center, y up). Coordinates that land outside the raster are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        let raster_x = self.width as i32 / 2 + x;
        let raster_y = self.height as i32 / 2 - y - 1;
        if raster_x >= 0
            && raster_x < self.width as i32
            && raster_y >= 0
            && raster_y < self.height as i32
        {
            self.pixels[raster_y as usize * self.width + raster_x as usize] = color;
        }
    }

    /// Render the buffer as ASCII art, one character per pixel, mapping
    /// luminance onto the gradient. Handy for eyeballing a render in a
    /// terminal without an image viewer.
    pub fn to_ascii(&self) -> String {
        let gradient_chars: Vec<char> = crate::ASCII_GRADIENT.chars().collect();
        let mut result = String::with_capacity(self.width * self.height + self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.pixel(x, y);

                let luminance = (0.299 * color.r as f32
                    + 0.587 * color.g as f32
                    + 0.114 * color.b as f32)
                    / 255.0;

                let index = ((luminance * (gradient_chars.len() - 1) as f32).round() as usize)
                    .min(gradient_chars.len() - 1);

                result.push(gradient_chars[index]);
            }
            result.push('\n');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_components_in_range() {
        let c = Color::from_unclamped(Vector3::new(-12.0, 300.0, 127.9));
        assert_eq!(c, Color::new(0, 255, 127));
    }

    #[test]
    fn test_clamp_idempotent() {
        for c in [Color::BLACK, Color::WHITE, Color::new(13, 200, 77)] {
            assert_eq!(Color::from_unclamped(c.to_vector()), c);
        }
    }

    #[test]
    fn test_put_pixel_center_origin() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(0, 0, Color::RED);
        // (0, 0) maps to raster (2, 1)
        assert_eq!(canvas.pixel(2, 1), Color::RED);
    }

    #[test]
    fn test_put_pixel_covers_corners() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(-2, -2, Color::RED); // raster (0, 3)
        canvas.put_pixel(1, 1, Color::BLUE); // raster (3, 0)
        assert_eq!(canvas.pixel(0, 3), Color::RED);
        assert_eq!(canvas.pixel(3, 0), Color::BLUE);
    }

    #[test]
    fn test_put_pixel_out_of_bounds_dropped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(2, 0, Color::RED);
        canvas.put_pixel(-3, 0, Color::RED);
        canvas.put_pixel(0, 2, Color::RED);
        canvas.put_pixel(0, -3, Color::RED);
        assert!(canvas.pixels().iter().all(|&p| p == Color::BLACK));
    }

    #[test]
    #[should_panic(expected = "outside 4x4 raster")]
    fn test_pixel_rejects_row_overflow() {
        // x past the row end must panic, not read the next row.
        let canvas = Canvas::new(4, 4);
        canvas.pixel(4, 0);
    }

    #[test]
    fn test_to_ascii_dimensions() {
        let canvas = Canvas::new(10, 6);
        let ascii = canvas.to_ascii();
        assert_eq!(ascii.lines().count(), 6);
        assert!(ascii.lines().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn test_to_ascii_luminance_extremes() {
        let mut canvas = Canvas::new(2, 1);
        canvas.pixels_mut()[1] = Color::WHITE;
        let ascii = canvas.to_ascii();
        let chars: Vec<char> = ascii.trim_end().chars().collect();
        let gradient: Vec<char> = crate::ASCII_GRADIENT.chars().collect();
        // black pixel maps to the first gradient char, white to the last
        assert_eq!(chars[0], gradient[0]);
        assert_eq!(chars[1], *gradient.last().unwrap());
    }
}
