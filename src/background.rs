//! Endlessly scrolling backdrop built from two copies of one tile.

use crate::entity::{Entity, Rect};
use crate::sprite::Sprite;
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct Background {
    tile: Sprite,
    speed: f32,
    pos_x: f32,
    rect: Rect,
}

impl Background {
    pub fn new(tile: Sprite, speed: f32) -> Self {
        let rect = Rect::new(0, 0, tile.width() as i32 * 2, tile.height() as i32);
        Background {
            tile,
            speed,
            pos_x: 0.0,
            rect,
        }
    }

    pub fn tile_width(&self) -> f32 {
        self.tile.width() as f32
    }

    /// How far the strip has travelled into the current tile, in `[0, tile_width)`.
    pub fn scroll_offset(&self) -> f32 {
        -self.pos_x
    }
}

impl Entity for Background {
    fn update(&mut self, dt: f32) {
        self.pos_x -= self.speed * dt;
        self.rect.x = self.pos_x.round() as i32;
        // Centre of the double-width strip reaching the left edge means one
        // full tile has gone by.
        if self.rect.center_x() <= 0 {
            self.pos_x = 0.0;
            self.rect.x = 0;
        }
    }

    fn draw(&self, surface: &mut Surface) {
        let w = self.tile.width() as i32;
        surface.blit(&self.tile, self.rect.x, self.rect.y);
        surface.blit(&self.tile, self.rect.x + w, self.rect.y);
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SKY_TOP;

    fn background(tile_w: usize) -> Background {
        let mut tile = Sprite::new(tile_w, 4);
        tile.fill_rect(0, 0, tile_w as i32, 4, SKY_TOP);
        Background::new(tile, 50.0)
    }

    #[test]
    fn test_scrolls_left_at_fixed_rate() {
        let mut bg = background(100);
        bg.update(0.5);
        assert!((bg.scroll_offset() - 25.0).abs() < 1e-4);
        assert_eq!(bg.rect().x, -25);
    }

    #[test]
    fn test_wraps_after_one_tile() {
        let mut bg = background(100);
        // 1.98s at 50px/s = 99px: not yet a full tile.
        for _ in 0..99 {
            bg.update(0.02);
        }
        assert!(bg.scroll_offset() > 98.0);
        bg.update(0.02);
        assert_eq!(bg.scroll_offset(), 0.0);
        assert_eq!(bg.rect().x, 0);
    }

    #[test]
    fn test_offset_stays_within_tile() {
        let mut bg = background(64);
        for i in 0..2000 {
            // Uneven frame times, all bounded well below one tile of travel.
            let dt = 0.005 + (i % 7) as f32 * 0.006;
            bg.update(dt);
            let offset = bg.scroll_offset();
            assert!(offset >= 0.0 && offset < bg.tile_width(), "offset {offset}");
        }
    }

    #[test]
    fn test_draws_two_tiles() {
        let mut bg = background(10);
        let mut surface = Surface::new(10, 4);
        bg.update(0.1); // 5px to the left
        bg.draw(&mut surface);
        assert_eq!(surface.get(9, 0), SKY_TOP);
    }
}
