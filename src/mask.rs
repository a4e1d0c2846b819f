//! Per-pixel collision masks.

use crate::sprite::Sprite;

/// Alpha strictly above this counts as solid.
pub const ALPHA_THRESHOLD: u8 = 127;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    w: usize,
    h: usize,
    bits: Vec<bool>,
}

impl Mask {
    pub fn from_sprite(sprite: &Sprite) -> Self {
        let (w, h) = (sprite.width(), sprite.height());
        let mut bits = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                bits.push(sprite.get(x, y).alpha() > ALPHA_THRESHOLD);
            }
        }
        Mask { w, h, bits }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.w + x]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Whether any solid bit of `other`, placed at `offset` relative to this
    /// mask's origin, lands on a solid bit of this mask.
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (ox, oy) = offset;
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (ox + other.w as i32).min(self.w as i32);
        let y1 = (oy + other.h as i32).min(self.h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as usize, y as usize)
                    && other.get((x - ox) as usize, (y - oy) as usize)
                {
                    return true;
                }
            }
        }
        false
    }
}
