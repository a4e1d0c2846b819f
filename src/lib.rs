//! A Flappy Bird clone: a bird falls under gravity, flaps on any key, and
//! scores a point for every pipe pair it clears. The simulation works in
//! world pixels and is presented in the terminal with half-block graphics.

pub mod art;
pub mod assets;
pub mod background;
pub mod collision;
pub mod color;
pub mod config;
pub mod entity;
pub mod game;
pub mod logging;
pub mod mask;
pub mod obstacle;
pub mod player;
pub mod score;
pub mod sprite;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod timer;

pub use assets::Assets;
pub use config::Config;
pub use game::{Flow, Game, GameEvent, GameState};
