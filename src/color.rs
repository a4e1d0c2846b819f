//! Colours shared by the surface, sprites and procedural art.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    pub const fn opaque(self) -> Rgba {
        Rgba(self.0, self.1, self.2, 255)
    }
}

/// Straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

    pub const fn rgb(self) -> Rgb {
        Rgb(self.0, self.1, self.2)
    }

    pub const fn alpha(self) -> u8 {
        self.3
    }

    /// Composite `self` over `dst`.
    pub fn over(self, dst: Rgb) -> Rgb {
        match self.3 {
            0 => dst,
            255 => self.rgb(),
            a => Rgb::lerp(dst, self.rgb(), a as u16 + 1),
        }
    }
}

pub const SKY_TOP: Rgb = Rgb(70, 180, 200);
pub const SKY_BOT: Rgb = Rgb(190, 232, 245);
pub const CLOUD: Rgb = Rgb(240, 250, 252);
pub const HILL_FAR: Rgb = Rgb(120, 195, 75);
pub const HILL_NEAR: Rgb = Rgb(95, 175, 55);
pub const PIPE_L: Rgb = Rgb(74, 122, 26);
pub const PIPE_M: Rgb = Rgb(100, 170, 40);
pub const PIPE_R: Rgb = Rgb(115, 191, 46);
pub const PIPE_HI: Rgb = Rgb(145, 215, 62);
pub const CAP_DARK: Rgb = Rgb(60, 100, 20);
pub const BIRD_Y: Rgb = Rgb(245, 200, 66);
pub const BIRD_HI: Rgb = Rgb(255, 225, 100);
pub const BIRD_WING: Rgb = Rgb(215, 165, 35);
pub const BIRD_EYE: Rgb = Rgb(255, 255, 255);
pub const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
pub const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
pub const BIRD_BEAK_HI: Rgb = Rgb(240, 110, 50);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const LETTERBOX: Rgb = Rgb(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(Rgb::lerp(SKY_TOP, SKY_BOT, 0), SKY_TOP);
        assert_eq!(Rgb::lerp(SKY_TOP, SKY_BOT, 256), SKY_BOT);
    }

    #[test]
    fn test_over_respects_alpha_extremes() {
        assert_eq!(Rgba::TRANSPARENT.over(WHITE), WHITE);
        assert_eq!(BLUE.opaque().over(WHITE), BLUE);
    }
}
