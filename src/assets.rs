//! Image sources for the game: PNG files on disk or procedural art.

use crate::art;
use crate::color::Rgba;
use crate::config::Config;
use crate::mask::Mask;
use crate::sprite::Sprite;
use anyhow::Context;
use std::path::Path;
use std::rc::Rc;

/// An image together with the collision mask derived from it.
#[derive(Debug, Clone)]
pub struct MaskedSprite {
    pub image: Sprite,
    pub mask: Mask,
}

impl MaskedSprite {
    pub fn new(image: Sprite) -> Self {
        let mask = Mask::from_sprite(&image);
        MaskedSprite { image, mask }
    }
}

#[derive(Debug, Clone)]
pub struct Assets {
    /// One tile of the scrolling background, already scaled to the window height.
    pub background: Sprite,
    /// Upper pipe of a pair, cap facing down.
    pub pipe_top: Rc<MaskedSprite>,
    /// Lower pipe of a pair, cap facing up.
    pub pipe_bottom: Rc<MaskedSprite>,
    pub player_frames: [Sprite; 2],
}

impl Assets {
    /// Loads from `config.assets_dir` when set, otherwise draws everything.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        match &config.assets_dir {
            Some(dir) => {
                log::info!("loading sprites from {}", dir.display());
                Self::from_dir(dir, config)
            }
            None => {
                log::info!("using procedural sprites");
                Ok(Self::procedural(config))
            }
        }
    }

    pub fn procedural(config: &Config) -> Self {
        let (w, h) = config.window_size();
        Self::from_parts(art::background_tile(w, h), art::pipe(), art::bird_frames())
    }

    /// Reads `bg.png`, `pipe.png`, `player-1.png` and `player-2.png`. The
    /// background is scaled to fill the window height; pipes and player are
    /// scaled relative to that same factor.
    pub fn from_dir(dir: &Path, config: &Config) -> anyhow::Result<Self> {
        let bg = load_png(&dir.join("bg.png"))?;
        let scale = config.window_height as f32 / bg.height().max(1) as f32;

        let background = bg.rotozoom(0.0, scale);
        let pipe = load_png(&dir.join("pipe.png"))?.rotozoom(0.0, scale / 13.0);
        let player_frames = [
            load_png(&dir.join("player-1.png"))?.rotozoom(0.0, scale / 25.0),
            load_png(&dir.join("player-2.png"))?.rotozoom(0.0, scale / 25.0),
        ];
        Ok(Self::from_parts(background, pipe, player_frames))
    }

    fn from_parts(background: Sprite, pipe: Sprite, player_frames: [Sprite; 2]) -> Self {
        let pipe_top = Rc::new(MaskedSprite::new(pipe.rotozoom(180.0, 1.0)));
        let pipe_bottom = Rc::new(MaskedSprite::new(pipe));
        Assets {
            background,
            pipe_top,
            pipe_bottom,
            player_frames,
        }
    }

    pub fn pipe_height(&self) -> i32 {
        self.pipe_bottom.image.height() as i32
    }
}

pub fn load_png(path: &Path) -> anyhow::Result<Sprite> {
    let img = image::open(path)
        .with_context(|| format!("loading sprite {}", path.display()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    let px = img
        .pixels()
        .map(|p| Rgba(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();
    Ok(Sprite::from_pixels(w as usize, h as usize, px))
}
