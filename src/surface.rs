//! Opaque RGB pixel buffer that entities draw into.

use crate::color::Rgb;
use crate::sprite::Sprite;

#[derive(Debug, Clone)]
pub struct Surface {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl Surface {
    pub fn new(w: usize, h: usize) -> Self {
        Surface {
            w,
            h,
            px: vec![Rgb::default(); w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px = vec![Rgb::default(); w * h];
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    /// Alpha-blits `sprite` with its top-left corner at `(x, y)`, clipped to the surface.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sprite.width() as i32).min(self.w as i32);
        let y1 = (y + sprite.height() as i32).min(self.h as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                let src = sprite.get((px - x) as usize, (py - y) as usize);
                if src.alpha() == 0 {
                    continue;
                }
                let idx = py as usize * self.w + px as usize;
                self.px[idx] = src.over(self.px[idx]);
            }
        }
    }

    /// Box-averages the `w`×`h` block whose top-left is `(x, y)`.
    pub fn average(&self, x: usize, y: usize, w: usize, h: usize) -> Rgb {
        let x1 = (x + w.max(1)).min(self.w);
        let y1 = (y + h.max(1)).min(self.h);
        let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
        for yy in y..y1 {
            for xx in x..x1 {
                let c = self.get(xx, yy);
                r += c.0 as u32;
                g += c.1 as u32;
                b += c.2 as u32;
                n += 1;
            }
        }
        if n == 0 {
            return Rgb::default();
        }
        Rgb((r / n) as u8, (g / n) as u8, (b / n) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, Rgba, WHITE};

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut s = Surface::new(4, 4);
        s.set(-1, 0, WHITE);
        s.set(4, 4, WHITE);
        assert!((0..4).all(|y| (0..4).all(|x| s.get(x, y) == Rgb::default())));
    }

    #[test]
    fn test_blit_skips_transparent_and_clips() {
        let mut s = Surface::new(4, 4);
        s.fill(WHITE);
        let mut sprite = Sprite::new(2, 2);
        sprite.set(0, 0, BLUE.opaque());
        sprite.set(1, 1, Rgba::TRANSPARENT);
        s.blit(&sprite, 3, 3);
        assert_eq!(s.get(3, 3), BLUE);
        s.blit(&sprite, 0, 0);
        assert_eq!(s.get(0, 0), BLUE);
        assert_eq!(s.get(1, 1), WHITE);
    }

    #[test]
    fn test_average_block() {
        let mut s = Surface::new(2, 1);
        s.set(0, 0, Rgb(0, 0, 0));
        s.set(1, 0, Rgb(200, 100, 50));
        assert_eq!(s.average(0, 0, 2, 1), Rgb(100, 50, 25));
    }
}
