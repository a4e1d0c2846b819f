//! Round state machine tying the entities together, one tick at a time.

use crate::assets::Assets;
use crate::background::Background;
use crate::collision::first_collision;
use crate::color::{BLUE, WHITE};
use crate::config::Config;
use crate::entity::Entity;
use crate::obstacle::{Obstacle, ObstacleSpawner};
use crate::player::Player;
use crate::score::Score;
use crate::surface::Surface;
use crate::text::{Anchor, TextOverlay};
use crate::timer::RepeatingTimer;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    /// Any key; its meaning depends on the state.
    KeyPress,
    /// The obstacle timer elapsed.
    SpawnTimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    SpawnObstacles,
    Restart,
    Quit,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn dispatch(state: GameState, event: GameEvent) -> Action {
    match (state, event) {
        (_, GameEvent::Quit) => Action::Quit,
        (GameState::Playing, GameEvent::KeyPress) => Action::Jump,
        (GameState::Playing, GameEvent::SpawnTimer) => Action::SpawnObstacles,
        (GameState::GameOver, GameEvent::KeyPress) => Action::Restart,
        (GameState::GameOver, GameEvent::SpawnTimer) => Action::Ignore,
    }
}

// Whole microseconds, so a run of equal frames adds up to exact intervals.
fn frame_duration(dt: f32) -> Duration {
    Duration::from_micros((dt.max(0.0) * 1_000_000.0).round() as u64)
}

pub struct Game {
    config: Config,
    assets: Assets,
    spawner: ObstacleSpawner,
    background: Background,
    player: Option<Player>,
    obstacles: Vec<Obstacle>,
    score: Score,
    spawn_timer: RepeatingTimer,
    state: GameState,
}

impl Game {
    /// Builds the world and starts the first round.
    pub fn new(config: Config, assets: Assets) -> Self {
        let spawner =
            ObstacleSpawner::new(&assets, config.window_width as i32, config.obstacle_speed);
        let background = Background::new(assets.background.clone(), config.background_speed);
        let spawn_timer =
            RepeatingTimer::new(Duration::from_millis(config.obstacle_create_time_ms));
        let mut game = Game {
            config,
            assets,
            spawner,
            background,
            player: None,
            obstacles: Vec::new(),
            score: Score::new(),
            spawn_timer,
            state: GameState::Playing,
        };
        game.start_round();
        game
    }

    /// Fresh player at the spawn point, no obstacles, zero score, timer restarted.
    pub fn start_round(&mut self) {
        self.player = Some(self.spawn_player());
        self.obstacles.clear();
        self.score.reset();
        self.spawn_timer.reset();
        self.state = GameState::Playing;
    }

    fn spawn_player(&self) -> Player {
        Player::new(
            self.assets.player_frames.clone(),
            self.config.player_center_x,
            self.config.window_height as i32 / 2,
            self.config.gravity,
            self.config.jump_velocity,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Runs one frame: queued input, then timer events, then movement,
    /// scoring, despawning and, while playing, collision.
    pub fn tick<R: Rng>(
        &mut self,
        dt: f32,
        input: impl IntoIterator<Item = GameEvent>,
        rng: &mut R,
    ) -> Flow {
        log::trace!("tick dt={dt:.4}");
        let mut events: VecDeque<GameEvent> = input.into_iter().collect();
        let fired = self.spawn_timer.advance(frame_duration(dt));
        events.extend((0..fired).map(|_| GameEvent::SpawnTimer));

        while let Some(event) = events.pop_front() {
            match dispatch(self.state, event) {
                Action::Quit => return Flow::Quit,
                Action::Jump => {
                    if let Some(player) = self.player.as_mut() {
                        player.jump();
                    }
                }
                Action::SpawnObstacles => self.spawn_obstacles(rng),
                Action::Restart => {
                    log::info!("restarting after a score of {}", self.score.value());
                    self.start_round();
                    // Timer ticks from the finished round do not carry over.
                    events.retain(|e| *e != GameEvent::SpawnTimer);
                }
                Action::Ignore => {}
            }
        }

        self.update_entities(dt);
        if self.state == GameState::Playing {
            self.check_collision();
        }
        Flow::Continue
    }

    fn spawn_obstacles<R: Rng>(&mut self, rng: &mut R) {
        let player_height = match &self.player {
            Some(player) => player.height(),
            None => return,
        };
        self.obstacles.extend(self.spawner.spawn(player_height, rng));
    }

    fn update_entities(&mut self, dt: f32) {
        self.background.update(dt);
        if let Some(player) = self.player.as_mut() {
            player.update(dt);
        }

        let player_x = self.config.player_center_x;
        for obstacle in &mut self.obstacles {
            obstacle.update(dt);
            if obstacle.mark_passed(player_x) {
                self.score.increment();
            }
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::debug!("despawned {removed} obstacles");
        }
    }

    fn check_collision(&mut self) {
        let Some(player) = &self.player else {
            return;
        };
        if first_collision(player, &self.obstacles).is_some() {
            log::info!("round over, score {}", self.score.value());
            self.player = None;
            self.obstacles.clear();
            self.state = GameState::GameOver;
        }
    }

    pub fn draw(&self, surface: &mut Surface, overlays: &mut Vec<TextOverlay>) {
        surface.fill(BLUE);
        self.background.draw(surface);
        for obstacle in &self.obstacles {
            obstacle.draw(surface);
        }
        if let Some(player) = &self.player {
            player.draw(surface);
        }

        overlays.push(TextOverlay {
            text: self.score.label(),
            x: 0,
            y: 0,
            anchor: Anchor::TopLeft,
            fg: BLUE,
            bg: WHITE,
        });
        if self.state == GameState::GameOver {
            overlays.push(TextOverlay {
                text: format!(
                    "Your score is: {}!\nPress any key to restart",
                    self.score.value()
                ),
                x: self.config.window_width as i32 / 2,
                y: self.config.window_height as i32 / 2,
                anchor: Anchor::Center,
                fg: BLUE,
                bg: WHITE,
            });
        }
    }
}
