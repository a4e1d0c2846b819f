//! The bird: gravity, flapping animation and velocity-dependent tilt.

use crate::entity::{Entity, Hitbox, Rect};
use crate::mask::Mask;
use crate::sprite::Sprite;
use crate::surface::Surface;

/// Animation advance per second. The index runs 0→1 and a frame is picked by
/// rounding, so this gives about three frame flips a second.
pub const ANIMATION_SPEED: f32 = 1.5;

/// Degrees of tilt per px/s of vertical velocity.
pub const TILT_PER_VELOCITY: f32 = 0.03;

#[derive(Debug, Clone)]
pub struct Player {
    frames: [Sprite; 2],
    frame_index: f32,
    /// Rotated copy of the current frame; what is drawn and collided.
    image: Sprite,
    mask: Mask,
    rect: Rect,
    pos_y: f32,
    /// px/s, positive is downward.
    pub velocity: f32,
    pub gravity: f32,
    jump_velocity: f32,
}

impl Player {
    /// Spawns centred on `(center_x, center_y)` at rest.
    pub fn new(
        frames: [Sprite; 2],
        center_x: i32,
        center_y: i32,
        gravity: f32,
        jump_velocity: f32,
    ) -> Self {
        let image = frames[0].clone();
        let mask = Mask::from_sprite(&image);
        let rect = Rect::from_center(
            center_x,
            center_y,
            image.width() as i32,
            image.height() as i32,
        );
        Player {
            frames,
            frame_index: 0.0,
            image,
            mask,
            rect,
            pos_y: rect.y as f32,
            velocity: 0.0,
            gravity,
            jump_velocity,
        }
    }

    /// Sets the launch velocity outright, whatever the bird was doing.
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity;
    }

    pub fn height(&self) -> i32 {
        self.rect.h
    }

    pub fn frame_index(&self) -> f32 {
        self.frame_index
    }

    pub fn current_frame(&self) -> usize {
        self.frame_index.round() as usize
    }

    pub fn tilt(&self) -> f32 {
        -self.velocity * TILT_PER_VELOCITY
    }

    pub fn image(&self) -> &Sprite {
        &self.image
    }

    fn apply_gravity(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.pos_y += self.velocity * dt;
        self.rect.y = self.pos_y.round() as i32;
    }

    fn animate(&mut self, dt: f32) {
        self.frame_index += ANIMATION_SPEED * dt;
        if self.frame_index > 1.0 {
            self.frame_index = 0.0;
        }
    }

    // Always derived from the unrotated frame so tilt never accumulates.
    fn rotate(&mut self) {
        self.image = self.frames[self.current_frame()].rotozoom(self.tilt(), 1.0);
        self.mask = Mask::from_sprite(&self.image);
    }

    /// Top-left of the rotated image, which is centred on the rect.
    fn image_origin(&self) -> (i32, i32) {
        (
            self.rect.center_x() - self.image.width() as i32 / 2,
            self.rect.center_y() - self.image.height() as i32 / 2,
        )
    }
}

impl Entity for Player {
    fn update(&mut self, dt: f32) {
        self.apply_gravity(dt);
        self.animate(dt);
        self.rotate();
    }

    fn draw(&self, surface: &mut Surface) {
        let (x, y) = self.image_origin();
        surface.blit(&self.image, x, y);
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn hitbox(&self) -> Option<Hitbox<'_>> {
        Some(Hitbox {
            mask: &self.mask,
            origin: self.image_origin(),
        })
    }
}
