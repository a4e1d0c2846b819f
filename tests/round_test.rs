//! Whole rounds driven through `Game::tick`, the way the main loop does.

use flappy_term::color::BIRD_Y;
use flappy_term::entity::Entity;
use flappy_term::obstacle::{Obstacle, Orientation};
use flappy_term::surface::Surface;
use flappy_term::{Assets, Config, Flow, Game, GameEvent, GameState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

const DT: f32 = 0.02;
const NO_INPUT: [GameEvent; 0] = [];

fn new_game() -> Game {
    let config = Config::default();
    let assets = Assets::procedural(&config);
    Game::new(config, assets)
}

#[test]
fn test_falling_bird_scores_each_pair_once() {
    // With nothing pressed the bird drops far below the pipes before the
    // first pair reaches it, so the round runs on and pipes keep scoring.
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut last = 0;
    for _ in 0..(15.0 / DT) as usize {
        assert_eq!(game.tick(DT, NO_INPUT, &mut rng), Flow::Continue);
        assert_eq!(game.state(), GameState::Playing);
        let score = game.score().value();
        assert!(score == last || score == last + 1, "score jumped {last} -> {score}");
        last = score;

        let live_counted = game
            .obstacles()
            .iter()
            .filter(|o| o.orientation() == Orientation::Top && o.counted())
            .count() as u32;
        assert!(live_counted <= score);
        assert!(game.obstacles().iter().all(|o| o.rect().x >= -100));
    }
    // Pairs every 1.4s, each needing about 3.6s to clear the bird.
    assert!(last >= 6, "only scored {last}");
}

#[test]
fn test_crash_then_restart() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..100 {
        game.tick(DT, [GameEvent::KeyPress], &mut rng);
    }
    assert_eq!(game.state(), GameState::Playing);

    // Drop a pipe onto the bird.
    let rect = game.player().unwrap().rect();
    let pipe = Rc::clone(&game.assets().pipe_bottom);
    game.obstacles_mut()
        .push(Obstacle::new(pipe, Orientation::Bottom, rect.x, rect.y, 80.0));
    game.tick(DT, NO_INPUT, &mut rng);
    assert_eq!(game.state(), GameState::GameOver);
    assert!(game.player().is_none());
    assert!(game.obstacles().is_empty());

    // Game over keeps ticking: the timer is ignored and nothing spawns.
    for _ in 0..200 {
        game.tick(DT, NO_INPUT, &mut rng);
    }
    assert!(game.obstacles().is_empty());

    game.tick(0.0, [GameEvent::KeyPress], &mut rng);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.score().value(), 0);
    let rect = game.player().unwrap().rect();
    assert_eq!((rect.center_x(), rect.center_y()), (72, 256));

    // The spawn timer starts over with the new round.
    for _ in 0..69 {
        game.tick(DT, NO_INPUT, &mut rng);
    }
    assert!(game.obstacles().is_empty());
    game.tick(DT, NO_INPUT, &mut rng);
    assert_eq!(game.obstacles().len(), 2);
}

#[test]
fn test_frame_renders_world_and_hud() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    game.tick(DT, [GameEvent::SpawnTimer], &mut rng);

    let (w, h) = game.config().window_size();
    let mut canvas = Surface::new(w, h);
    let mut overlays = Vec::new();
    game.draw(&mut canvas, &mut overlays);

    let player = game.player().unwrap().rect();
    let center = canvas.get(player.center_x() as usize, player.center_y() as usize);
    assert_eq!(center, BIRD_Y);
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0].text, "Score: 0");
}
