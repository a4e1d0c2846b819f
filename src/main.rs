use flappy_term::surface::Surface;
use flappy_term::terminal::Terminal;
use flappy_term::{Assets, Config, Flow, Game, logging};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    let log_path = logging::init()?;
    let config = Config::load()?;
    log::info!("starting with {config:?}, logging to {}", log_path.display());

    let assets = Assets::load(&config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, assets);

    let mut terminal = Terminal::enter()?;
    let result = run(&mut terminal, &mut game, &mut rng);
    terminal.restore()?;
    log::info!("exiting");
    Ok(result?)
}

fn run(terminal: &mut Terminal, game: &mut Game, rng: &mut StdRng) -> io::Result<()> {
    let (w, h) = game.config().window_size();
    let mut canvas = Surface::new(w, h);
    let mut overlays = Vec::new();
    let frame_dur = Duration::from_secs_f64(1.0 / game.config().frame_rate as f64);

    let mut prev = Instant::now();
    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(prev).as_secs_f32();
        prev = frame_start;

        // Input
        let events = terminal.poll_events()?;

        // Update
        if game.tick(dt, events, rng) == Flow::Quit {
            return Ok(());
        }

        // Render
        overlays.clear();
        game.draw(&mut canvas, &mut overlays);
        terminal.present(&canvas, &overlays)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
