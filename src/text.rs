//! Text drawn over the playfield by the presentation backend.

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// The block of lines is centred on the point.
    Center,
}

/// A block of text positioned in world coordinates. Lines are separated by
/// `\n`; each line sits on a solid `bg` box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverlay {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub anchor: Anchor,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl TextOverlay {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Width in characters of the widest line.
    pub fn columns(&self) -> usize {
        self.lines().map(|l| l.chars().count()).max().unwrap_or(0)
    }
}
