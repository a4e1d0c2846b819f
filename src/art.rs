//! Procedurally drawn sprites, used when no asset directory is configured.

use crate::color::*;
use crate::sprite::Sprite;
use std::f32::consts::TAU;

pub const PIPE_WIDTH: usize = 52;
pub const PIPE_HEIGHT: usize = 420;
pub const BIRD_WIDTH: usize = 34;
pub const BIRD_HEIGHT: usize = 24;

// ── Background ──────────────────────────────────────────────────────────────

/// One background tile. Every layer repeats a whole number of times across
/// the tile width so two tiles side by side join seamlessly.
pub fn background_tile(w: usize, h: usize) -> Sprite {
    let mut tile = Sprite::new(w, h);
    draw_sky(&mut tile);
    draw_clouds(&mut tile);
    draw_hills(&mut tile);
    tile
}

fn draw_sky(tile: &mut Sprite) {
    let h = tile.height();
    for y in 0..h {
        let t = (y * 256 / h.max(1)) as u16;
        tile.fill_rect(0, y as i32, tile.width() as i32, 1, Rgb::lerp(SKY_TOP, SKY_BOT, t));
    }
}

fn draw_clouds(tile: &mut Sprite) {
    let w = tile.width() as f32;
    let band = tile.height() as f32 * 0.55;
    for x in 0..tile.width() as i32 {
        let fx = x as f32 / w * TAU;
        let puff = (fx * 3.0).sin() * 9.0 + (fx * 7.0).sin() * 4.0;
        if puff <= 2.0 {
            continue;
        }
        let top = (band - puff) as i32;
        let bottom = (band + puff * 0.4) as i32;
        for y in top..bottom {
            tile.set(x, y, CLOUD.opaque());
        }
    }
}

fn draw_hills(tile: &mut Sprite) {
    let w = tile.width() as f32;
    let base = tile.height() as i32;
    let layers = [(HILL_FAR, 2.0, 5.0, 28.0, 60), (HILL_NEAR, 3.0, 7.0, 18.0, 30)];
    for (color, f1, f2, amp, lift) in layers {
        for x in 0..tile.width() as i32 {
            let h = hill_profile(x as f32, w, f1, f2, amp);
            let top = base - h as i32 - lift;
            for y in top..base {
                tile.set(x, y, color.opaque());
            }
        }
    }
}

fn hill_profile(x: f32, w: f32, f1: f32, f2: f32, amp: f32) -> f32 {
    let fx = x / w * TAU;
    (fx * f1).sin() * amp + (fx * f2).sin() * amp * 0.4
}

// ── Pipe ────────────────────────────────────────────────────────────────────

/// Upright pipe with its cap at the top; the upper obstacle of a pair is
/// this image turned half a revolution.
pub fn pipe() -> Sprite {
    let mut s = Sprite::new(PIPE_WIDTH, PIPE_HEIGHT);
    let cap_h = 24;
    let cap_extra = 3;
    let body_w = PIPE_WIDTH as i32 - cap_extra * 2;

    for x in 0..body_w {
        let c = pipe_shade(x, body_w);
        s.fill_rect(cap_extra + x, cap_h, 1, PIPE_HEIGHT as i32 - cap_h, c);
    }
    for x in 0..PIPE_WIDTH as i32 {
        let c = pipe_shade(x, PIPE_WIDTH as i32);
        s.fill_rect(x, 0, 1, cap_h, c);
    }
    s.fill_rect(0, 0, PIPE_WIDTH as i32, 2, CAP_DARK);
    s.fill_rect(0, cap_h - 2, PIPE_WIDTH as i32, 2, CAP_DARK);
    s
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

// ── Bird ────────────────────────────────────────────────────────────────────

/// The two animation frames: wing up, wing down.
pub fn bird_frames() -> [Sprite; 2] {
    [bird(-4), bird(3)]
}

fn bird(wing_y_off: i32) -> Sprite {
    let mut s = Sprite::new(BIRD_WIDTH, BIRD_HEIGHT);
    let (cx, cy) = (15, 12);

    // Body: an ellipse so the corners of the frame stay transparent.
    let (rx, ry) = (12.0f32, 9.0f32);
    for y in 0..BIRD_HEIGHT as i32 {
        for x in 0..BIRD_WIDTH as i32 {
            let nx = (x - cx) as f32 / rx;
            let ny = (y - cy) as f32 / ry;
            let d = nx * nx + ny * ny;
            if d <= 1.0 {
                let c = if ny < -0.45 { BIRD_HI } else { BIRD_Y };
                s.set(x, y, c.opaque());
            }
        }
    }

    // Wing
    s.fill_rect(cx - 10, cy + wing_y_off, 9, 5, BIRD_WING);

    // Eye
    s.fill_rect(cx + 4, cy - 7, 6, 6, BIRD_EYE);
    s.fill_rect(cx + 7, cy - 5, 2, 3, BIRD_PUPIL);

    // Beak
    s.fill_rect(cx + 9, cy - 1, 9, 3, BIRD_BEAK_HI);
    s.fill_rect(cx + 9, cy + 2, 8, 3, BIRD_BEAK);

    // Tail
    s.fill_rect(cx - 14, cy - 2, 3, 4, BIRD_WING);
    s
}
