//! Terminal presentation: half-block pixels, text overlays and key input.

use crate::color::{LETTERBOX, Rgb};
use crate::game::GameEvent;
use crate::surface::Surface;
use crate::text::{Anchor, TextOverlay};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color as CColor},
    terminal,
};
use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

fn ccolor(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Viewport ────────────────────────────────────────────────────────────────

/// Where the world lands inside the terminal's pixel grid (two pixels per
/// character row), keeping its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub off_x: usize,
    pub off_y: usize,
    pub w: usize,
    pub h: usize,
}

impl Viewport {
    pub fn fit(world_w: usize, world_h: usize, display_w: usize, display_h: usize) -> Self {
        let scale = (display_w as f32 / world_w.max(1) as f32)
            .min(display_h as f32 / world_h.max(1) as f32);
        let w = ((world_w as f32 * scale) as usize).min(display_w);
        let h = ((world_h as f32 * scale) as usize).min(display_h);
        Viewport {
            scale,
            off_x: (display_w - w) / 2,
            off_y: (display_h - h) / 2,
            w,
            h,
        }
    }

    /// Terminal cell (column, row) for a world point.
    pub fn cell(&self, x: i32, y: i32) -> (i32, i32) {
        let px = self.off_x as f32 + x as f32 * self.scale;
        let py = self.off_y as f32 + y as f32 * self.scale;
        (px as i32, py as i32 / 2)
    }
}

/// Box-filters `canvas` into the viewport area of `display`; the rest is letterbox.
pub fn downsample(canvas: &Surface, display: &mut Surface, vp: &Viewport) {
    display.fill(LETTERBOX);
    if vp.w == 0 || vp.h == 0 {
        return;
    }
    let inv = 1.0 / vp.scale;
    let block = (inv.ceil() as usize).max(1);
    for dy in 0..vp.h {
        let sy = ((dy as f32 * inv) as usize).min(canvas.height().saturating_sub(1));
        for dx in 0..vp.w {
            let sx = ((dx as f32 * inv) as usize).min(canvas.width().saturating_sub(1));
            let c = canvas.average(sx, sy, block, block);
            display.set((vp.off_x + dx) as i32, (vp.off_y + dy) as i32, c);
        }
    }
}

/// Emits `display` as rows of `▀` glyphs, foreground the upper pixel and
/// background the lower, changing colours only when they differ.
pub fn render_half_blocks(display: &Surface, out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    let rows = display.height() / 2;
    let mut prev_fg = Rgb(0, 0, 0);
    let mut prev_bg = Rgb(0, 0, 0);
    let mut need_fg = true;
    let mut need_bg = true;

    for row in 0..rows {
        for col in 0..display.width() {
            let top = display.get(col, row * 2);
            let bot = display.get(col, row * 2 + 1);

            if top == bot {
                if need_bg || prev_bg != top {
                    queue!(out, style::SetBackgroundColor(ccolor(top)))?;
                    prev_bg = top;
                    need_bg = false;
                }
                queue!(out, style::Print(' '))?;
            } else {
                if need_fg || prev_fg != top {
                    queue!(out, style::SetForegroundColor(ccolor(top)))?;
                    prev_fg = top;
                    need_fg = false;
                }
                if need_bg || prev_bg != bot {
                    queue!(out, style::SetBackgroundColor(ccolor(bot)))?;
                    prev_bg = bot;
                    need_bg = false;
                }
                queue!(out, style::Print('\u{2580}'))?; // ▀
            }
        }
        if row + 1 < rows {
            queue!(out, style::ResetColor, style::Print("\r\n"))?;
            need_fg = true;
            need_bg = true;
        }
    }
    queue!(out, style::ResetColor)
}

/// Terminal placements `(column, row, text)` for each line of an overlay,
/// clipped to a `cols`×`rows` screen.
pub fn overlay_cells(
    overlay: &TextOverlay,
    vp: &Viewport,
    cols: usize,
    rows: usize,
) -> Vec<(u16, u16, String)> {
    let (col, row) = vp.cell(overlay.x, overlay.y);
    let lines: Vec<&str> = overlay.lines().collect();
    let first_row = match overlay.anchor {
        Anchor::TopLeft => row,
        Anchor::Center => row - lines.len() as i32 / 2,
    };

    let mut cells = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let r = first_row + i as i32;
        if r < 0 || r as usize >= rows {
            continue;
        }
        let len = line.chars().count() as i32;
        let start = match overlay.anchor {
            Anchor::TopLeft => col,
            Anchor::Center => col - len / 2,
        }
        .max(0);
        let room = cols.saturating_sub(start as usize);
        let visible: String = line.chars().take(room).collect();
        if !visible.is_empty() {
            cells.push((start as u16, r as u16, visible));
        }
    }
    cells
}

/// Maps a key to a game event. Esc and Ctrl+C quit; every other press is a
/// plain key press. Repeats and releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(GameEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        _ => Some(GameEvent::KeyPress),
    }
}

// ── Terminal ────────────────────────────────────────────────────────────────

/// Owns the terminal while the game runs; restores it on drop.
pub struct Terminal {
    out: Stdout,
    display: Surface,
    active: bool,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        let (cols, rows) = terminal::size()?;
        Ok(Terminal {
            out,
            display: Surface::new(cols as usize, rows as usize * 2),
            active: true,
        })
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("terminal resized to {cols}x{rows}");
        self.display.resize(cols as usize, rows as usize * 2);
        // Full repaint; stale cells outside the new size are cleared.
        let _ = queue!(self.out, terminal::Clear(terminal::ClearType::All));
    }

    /// Drains pending input without blocking.
    pub fn poll_events(&mut self) -> io::Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => events.extend(map_key(key)),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(events)
    }

    pub fn present(&mut self, canvas: &Surface, overlays: &[TextOverlay]) -> io::Result<()> {
        let (cols, rows) = (self.display.width(), self.display.height() / 2);
        let vp = Viewport::fit(canvas.width(), canvas.height(), cols, rows * 2);
        downsample(canvas, &mut self.display, &vp);
        render_half_blocks(&self.display, &mut self.out)?;

        for overlay in overlays {
            for (col, row, text) in overlay_cells(overlay, &vp, cols, rows) {
                queue!(
                    self.out,
                    cursor::MoveTo(col, row),
                    style::SetForegroundColor(ccolor(overlay.fg)),
                    style::SetBackgroundColor(ccolor(overlay.bg)),
                    style::Print(text),
                    style::ResetColor,
                )?;
            }
        }
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, WHITE};

    #[test]
    fn test_viewport_letterboxes_tall_world() {
        let vp = Viewport::fit(288, 512, 80, 48);
        assert_eq!(vp.h, 48);
        assert_eq!(vp.w, 27);
        assert_eq!(vp.off_y, 0);
        assert_eq!(vp.off_x, (80 - 27) / 2);
    }

    #[test]
    fn test_downsample_fills_letterbox() {
        let mut canvas = Surface::new(4, 8);
        canvas.fill(WHITE);
        let mut display = Surface::new(8, 8);
        let vp = Viewport::fit(4, 8, 8, 8);
        downsample(&canvas, &mut display, &vp);
        assert_eq!(display.get(0, 0), LETTERBOX);
        assert_eq!(display.get(vp.off_x, 0), WHITE);
        assert_eq!(display.get(7, 7), LETTERBOX);
    }

    #[test]
    fn test_render_uses_half_blocks() {
        let mut display = Surface::new(2, 2);
        display.set(0, 0, WHITE);
        display.set(0, 1, BLUE);
        display.set(1, 0, BLUE);
        display.set(1, 1, BLUE);
        let mut out = Vec::new();
        render_half_blocks(&display, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\u{2580}').count(), 1);
        assert!(text.ends_with("\u{2580} \x1b[0m"));
    }

    fn overlay(text: &str, anchor: Anchor, x: i32, y: i32) -> TextOverlay {
        TextOverlay {
            text: text.to_string(),
            x,
            y,
            anchor,
            fg: BLUE,
            bg: WHITE,
        }
    }

    #[test]
    fn test_overlay_top_left() {
        let vp = Viewport::fit(100, 100, 100, 100);
        let cells = overlay_cells(&overlay("Score: 3", Anchor::TopLeft, 0, 0), &vp, 100, 50);
        assert_eq!(cells, vec![(0, 0, "Score: 3".to_string())]);
    }

    #[test]
    fn test_overlay_centered_block() {
        let vp = Viewport::fit(100, 100, 100, 100);
        let cells = overlay_cells(&overlay("ab\nabcd", Anchor::Center, 50, 50), &vp, 100, 50);
        assert_eq!(
            cells,
            vec![(49, 24, "ab".to_string()), (48, 25, "abcd".to_string())]
        );
    }

    #[test]
    fn test_overlay_clipped_to_screen() {
        let vp = Viewport::fit(10, 10, 10, 10);
        let cells = overlay_cells(
            &overlay("Press any key to restart", Anchor::Center, 5, 5),
            &vp,
            10,
            5,
        );
        assert_eq!(cells, vec![(0, 2, "Press any ".to_string())]);
    }

    #[test]
    fn test_key_mapping() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(map_key(press(KeyCode::Esc, KeyModifiers::NONE)), Some(GameEvent::Quit));
        assert_eq!(
            map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameEvent::Quit)
        );
        assert_eq!(
            map_key(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(GameEvent::KeyPress)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(GameEvent::KeyPress)
        );
        let mut release = press(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
