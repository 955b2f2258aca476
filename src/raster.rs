//! CPU framebuffer drawing
//!
//! minifb presents a raw `&[u32]` of 0x00RRGGBB pixels; `Frame` owns that
//! buffer and draws the handful of shapes the sims need. All operations clip
//! at the frame edges.

use glam::Vec2;

use crate::sim::Rect;

pub const WHITE: u32 = 0x00FF_FFFF;
pub const BLACK: u32 = 0x0000_0000;
pub const RED: u32 = 0x00FF_0000;
pub const BLUE: u32 = 0x0000_00FF;
pub const YELLOW: u32 = 0x00FF_FF00;
pub const GRAY: u32 = 0x0060_6060;

/// A software framebuffer
pub struct Frame {
    buf: Vec<u32>,
    width: usize,
    height: usize,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buf: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel buffer in the layout minifb expects
    pub fn buffer(&self) -> &[u32] {
        &self.buf
    }

    pub fn clear(&mut self, color: u32) {
        self.buf.fill(color);
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buf[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: u32) {
        let x0 = ((rect.left().floor().max(0.0)) as usize).min(self.width);
        let y0 = ((rect.top().floor().max(0.0)) as usize).min(self.height);
        let x1 = (rect.right().ceil().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().ceil().max(0.0) as usize).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let row = y * self.width;
            self.buf[row + x0..row + x1].fill(color);
        }
    }

    /// Filled circle via bounding-box scan
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;
        let y0 = (center.y - radius).floor() as i32;
        let y1 = (center.y + radius).ceil() as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Bresenham line
    pub fn line(&mut self, a: Vec2, b: Vec2, color: u32) {
        let (mut x0, mut y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}
