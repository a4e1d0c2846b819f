//! Pipe obstacles and the spawner that places them in passable pairs.

use crate::assets::{Assets, MaskedSprite};
use crate::entity::{Entity, Hitbox, Rect};
use crate::surface::Surface;
use rand::Rng;
use std::rc::Rc;

/// Obstacles left of this x are removed.
pub const DESPAWN_X: f32 = -100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Hangs from above; the only half of a pair that scores.
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    sprite: Rc<MaskedSprite>,
    orientation: Orientation,
    pos_x: f32,
    rect: Rect,
    speed: f32,
    counted: bool,
}

impl Obstacle {
    pub fn new(
        sprite: Rc<MaskedSprite>,
        orientation: Orientation,
        x: i32,
        y: i32,
        speed: f32,
    ) -> Self {
        let (w, h) = (sprite.image.width() as i32, sprite.image.height() as i32);
        let rect = Rect::new(x, y, w, h);
        Obstacle {
            sprite,
            orientation,
            pos_x: x as f32,
            rect,
            speed,
            counted: false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn counted(&self) -> bool {
        self.counted
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos_x < DESPAWN_X
    }

    /// Reports, exactly once, that a top pipe's right edge has gone past
    /// `player_x`. Bottom pipes never report.
    pub fn mark_passed(&mut self, player_x: i32) -> bool {
        if self.orientation != Orientation::Top || self.counted {
            return false;
        }
        if self.rect.right() < player_x {
            self.counted = true;
            return true;
        }
        false
    }
}

impl Entity for Obstacle {
    fn update(&mut self, dt: f32) {
        self.pos_x -= self.speed * dt;
        self.rect.x = self.pos_x.round() as i32;
    }

    fn draw(&self, surface: &mut Surface) {
        surface.blit(&self.sprite.image, self.rect.x, self.rect.y);
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn hitbox(&self) -> Option<Hitbox<'_>> {
        Some(Hitbox {
            mask: &self.sprite.mask,
            origin: (self.rect.x, self.rect.y),
        })
    }
}

/// Where a pair was placed, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairLayout {
    pub x: i32,
    pub top_y: i32,
    pub interval: i32,
    pub bottom_y: i32,
}

/// Creates top/bottom pipe pairs just past the right edge with a random
/// vertical gap that always clears the player.
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    top: Rc<MaskedSprite>,
    bottom: Rc<MaskedSprite>,
    window_width: i32,
    speed: f32,
}

impl ObstacleSpawner {
    pub const SPAWN_MARGIN: (i32, i32) = (20, 40);
    pub const TOP_Y_RANGE: (i32, i32) = (-400, -10);
    pub const GAP_MARGIN: (i32, i32) = (30, 200);

    pub fn new(assets: &Assets, window_width: i32, speed: f32) -> Self {
        ObstacleSpawner {
            top: Rc::clone(&assets.pipe_top),
            bottom: Rc::clone(&assets.pipe_bottom),
            window_width,
            speed,
        }
    }

    pub fn pipe_height(&self) -> i32 {
        self.top.image.height() as i32
    }

    pub fn layout<R: Rng>(&self, player_height: i32, rng: &mut R) -> PairLayout {
        let x = rng.gen_range(
            self.window_width + Self::SPAWN_MARGIN.0..=self.window_width + Self::SPAWN_MARGIN.1,
        );
        let top_y = rng.gen_range(Self::TOP_Y_RANGE.0..=Self::TOP_Y_RANGE.1);
        let interval = rng.gen_range(
            player_height + Self::GAP_MARGIN.0..=player_height + Self::GAP_MARGIN.1,
        );
        PairLayout {
            x,
            top_y,
            interval,
            bottom_y: top_y + self.pipe_height() + interval,
        }
    }

    pub fn spawn<R: Rng>(&self, player_height: i32, rng: &mut R) -> [Obstacle; 2] {
        let layout = self.layout(player_height, rng);
        log::debug!(
            "spawned obstacle pair at x={} top_y={} gap={}",
            layout.x,
            layout.top_y,
            layout.interval
        );
        [
            Obstacle::new(
                Rc::clone(&self.top),
                Orientation::Top,
                layout.x,
                layout.top_y,
                self.speed,
            ),
            Obstacle::new(
                Rc::clone(&self.bottom),
                Orientation::Bottom,
                layout.x,
                layout.bottom_y,
                self.speed,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spawner() -> ObstacleSpawner {
        let config = Config::default();
        let assets = Assets::procedural(&config);
        ObstacleSpawner::new(&assets, config.window_width as i32, config.obstacle_speed)
    }

    #[test]
    fn test_gap_always_clears_player() {
        let spawner = spawner();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for player_height in [10, 24, 60] {
            for _ in 0..500 {
                let [top, bottom] = spawner.spawn(player_height, &mut rng);
                let gap = bottom.rect().y - top.rect().y - spawner.pipe_height();
                assert!(gap >= player_height + 30, "gap {gap} too small");
                assert!(gap <= player_height + 200, "gap {gap} too large");
            }
        }
    }

    #[test]
    fn test_pair_shares_x_past_right_edge() {
        let spawner = spawner();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let [top, bottom] = spawner.spawn(24, &mut rng);
            assert_eq!(top.rect().x, bottom.rect().x);
            assert!((288 + 20..=288 + 40).contains(&top.rect().x));
            assert!((-400..=-10).contains(&top.rect().y));
            assert_eq!(top.orientation(), Orientation::Top);
            assert_eq!(bottom.orientation(), Orientation::Bottom);
        }
    }

    #[test]
    fn test_scrolls_left_at_fixed_speed() {
        let [mut top, _] = spawner().spawn(24, &mut ChaCha8Rng::seed_from_u64(1));
        let x0 = top.rect().x;
        top.update(0.5);
        assert_eq!(top.rect().x, x0 - 40);
    }

    #[test]
    fn test_top_counts_exactly_once() {
        let [mut top, _] = spawner().spawn(24, &mut ChaCha8Rng::seed_from_u64(3));
        let player_x = 72;
        let mut passes = 0;
        for _ in 0..400 {
            top.update(0.02);
            if top.mark_passed(player_x) {
                passes += 1;
                assert!(top.rect().right() < player_x);
            }
        }
        assert_eq!(passes, 1);
        assert!(top.counted());
    }

    #[test]
    fn test_bottom_never_counts() {
        let [_, mut bottom] = spawner().spawn(24, &mut ChaCha8Rng::seed_from_u64(3));
        for _ in 0..400 {
            bottom.update(0.02);
            assert!(!bottom.mark_passed(72));
        }
        assert!(!bottom.counted());
    }

    #[test]
    fn test_offscreen_past_despawn_line() {
        let [mut top, _] = spawner().spawn(24, &mut ChaCha8Rng::seed_from_u64(5));
        while !top.is_offscreen() {
            assert!(top.rect().x >= -100);
            top.update(0.02);
        }
        assert!(top.rect().x <= -100);
    }
}
