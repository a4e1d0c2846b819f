//! RGBA images with rotate-and-scale, the building block of every entity.

use crate::color::{Rgb, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    w: usize,
    h: usize,
    px: Vec<Rgba>,
}

impl Sprite {
    /// A fully transparent sprite.
    pub fn new(w: usize, h: usize) -> Self {
        Sprite {
            w,
            h,
            px: vec![Rgba::TRANSPARENT; w * h],
        }
    }

    pub fn from_pixels(w: usize, h: usize, px: Vec<Rgba>) -> Self {
        assert_eq!(px.len(), w * h, "pixel count does not match dimensions");
        Sprite { w, h, px }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.px[y * self.w + x]
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgba) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c.opaque());
            }
        }
    }

    /// Rotates counter-clockwise by `angle_deg` (as seen on screen) and scales
    /// by `scale`. The result is sized to the rotated bounding box; uncovered
    /// pixels are transparent.
    pub fn rotozoom(&self, angle_deg: f32, scale: f32) -> Sprite {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let (sw, sh) = (self.w as f32, self.h as f32);
        let ow = snap_ceil((sw * cos.abs() + sh * sin.abs()) * scale);
        let oh = snap_ceil((sw * sin.abs() + sh * cos.abs()) * scale);
        if self.w == 0 || self.h == 0 || scale <= 0.0 {
            return Sprite::new(ow, oh);
        }

        let mut out = Sprite::new(ow, oh);
        let (ocx, ocy) = (ow as f32 / 2.0, oh as f32 / 2.0);
        let (scx, scy) = (sw / 2.0, sh / 2.0);
        for oy in 0..oh {
            for ox in 0..ow {
                let dx = ox as f32 + 0.5 - ocx;
                let dy = oy as f32 + 0.5 - ocy;
                let sx = (dx * cos - dy * sin) / scale + scx;
                let sy = (dx * sin + dy * cos) / scale + scy;
                if sx < 0.0 || sy < 0.0 {
                    continue;
                }
                let (sx, sy) = (sx as usize, sy as usize);
                if sx < self.w && sy < self.h {
                    out.px[oy * ow + ox] = self.get(sx, sy);
                }
            }
        }
        out
    }
}

// Rounds up, treating values within float noise of an integer as that integer.
fn snap_ceil(v: f32) -> usize {
    (v - 1e-3).ceil().max(1.0) as usize
}
