//! Tunables, loaded from `config.json` in the platform config directory.

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "flappy-term";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// World width in pixels.
    pub window_width: u32,
    /// World height in pixels.
    pub window_height: u32,
    /// Fixed horizontal centre of the player; obstacles score when they pass it.
    pub player_center_x: i32,
    /// Milliseconds between obstacle pairs.
    pub obstacle_create_time_ms: u64,
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Velocity set by a jump, px/s (negative is up).
    pub jump_velocity: f32,
    /// Leftward obstacle speed, px/s.
    pub obstacle_speed: f32,
    /// Leftward background speed, px/s.
    pub background_speed: f32,
    /// Upper bound on frames per second.
    pub frame_rate: u32,
    /// Directory with `bg.png`, `pipe.png`, `player-1.png` and `player-2.png`.
    /// Procedural art is used when unset.
    pub assets_dir: Option<PathBuf>,
    /// Fixed RNG seed, for reproducible pipe layouts.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_width: 288,
            window_height: 512,
            player_center_x: 72,
            obstacle_create_time_ms: 1400,
            gravity: 450.0,
            jump_velocity: -200.0,
            obstacle_speed: 80.0,
            background_speed: 50.0,
            frame_rate: 50,
            assets_dir: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn project_dirs() -> io::Result<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })
    }

    pub fn default_path() -> io::Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.json"))
    }

    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading config {}", path.display()));
            }
        };
        let config: Config = serde_json::from_str(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window dimensions must be non-zero"
        );
        anyhow::ensure!(self.frame_rate > 0, "frame_rate must be non-zero");
        anyhow::ensure!(
            self.obstacle_create_time_ms > 0,
            "obstacle_create_time_ms must be non-zero"
        );
        Ok(())
    }

    pub fn window_size(&self) -> (usize, usize) {
        (self.window_width as usize, self.window_height as usize)
    }
}
