//! Pixel grid with bottom-up row addressing.
//!
//! `(0, 0)` is the visual bottom-left corner: [`Frame::plot`] stores row
//! `height - 1 - y` so that increasing y moves up the image while storage
//! keeps row 0 at the visual top.

use std::path::Path;

use image::RgbImage;

use crate::error::Result;

/// Default frame width in pixels.
pub const IMG_WIDTH: u32 = 500;
/// Default frame height in pixels.
pub const IMG_HEIGHT: u32 = 500;

/// An RGB pixel, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A fixed-size grid of [`Pixel`]s.
pub struct Frame {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(IMG_WIDTH, IMG_HEIGHT)
    }
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Pixel::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    /// Write a pixel at `(x, y)` with the y axis pointing up.
    ///
    /// Coordinates at `-1` or below are silently dropped (the rasterizer's
    /// partial lower-bound clip); writes past the upper bounds are ignored.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Pixel) {
        if x > -1 && y > -1 && x < self.width as i32 && y < self.height as i32 {
            let row = self.height as i32 - 1 - y;
            self.pixels[(row as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Read the pixel at `(x, y)` (same addressing as [`Frame::plot`]),
    /// or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        if x > -1 && y > -1 && x < self.width as i32 && y < self.height as i32 {
            let row = self.height as i32 - 1 - y;
            Some(self.pixels[(row as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Write the frame to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut img = RgbImage::new(self.width, self.height);
        for (i, p) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            img.put_pixel(x, y, image::Rgb([p.r, p.g, p.b]));
        }
        img.save(path)?;
        Ok(())
    }
}
