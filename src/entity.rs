//! The update/draw contract shared by everything on screen.

use crate::mask::Mask;
use crate::surface::Surface;

/// Integer axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Rect::new(cx - w / 2, cy - h / 2, w, h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A collision mask anchored at a world position (the mask's top-left).
#[derive(Debug, Clone, Copy)]
pub struct Hitbox<'a> {
    pub mask: &'a Mask,
    pub origin: (i32, i32),
}

impl Hitbox<'_> {
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.0,
            self.origin.1,
            self.mask.width() as i32,
            self.mask.height() as i32,
        )
    }
}

pub trait Entity {
    /// Advances the entity by `dt` seconds.
    fn update(&mut self, dt: f32);

    fn draw(&self, surface: &mut Surface);

    fn rect(&self) -> Rect;

    /// Entities that take part in collisions expose their current mask.
    fn hitbox(&self) -> Option<Hitbox<'_>> {
        None
    }
}
