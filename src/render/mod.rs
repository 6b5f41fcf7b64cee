//! Terminal renderer
//!
//! Paints the per-tick [`Snapshot`] using half-block pixels: every terminal
//! cell holds two vertically stacked pixels via the upper-half-block glyph,
//! so a cols x rows terminal becomes a cols x (rows * 2) canvas. The fixed
//! 800x240 scene is scaled to whatever size the terminal happens to be.
//!
//! This layer only consumes snapshots; it has no path back into the
//! simulation.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

use crate::consts::*;
use crate::sim::{GamePhase, Rect, Snapshot};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Rgb(u8, u8, u8);

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

const SKY: Rgb = Rgb(135, 206, 235);
const GROUND: Rgb = Rgb(222, 184, 135);
const GROUND_HATCH: Rgb = Rgb(194, 164, 113);
const CLOUD: Rgb = Rgb(245, 248, 250);
const RUNNER: Rgb = Rgb(46, 139, 87);
const RUNNER_EYE: Rgb = Rgb(10, 10, 10);
const CACTUS: Rgb = Rgb(34, 139, 34);
const CACTUS_RIDGE: Rgb = Rgb(0, 100, 0);
const TEXT: Rgb = Rgb(20, 20, 20);

/// Pixel buffer rendered with half-block glyphs
struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![SKY; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SKY);
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    fn flush(&self, out: &mut impl Write) -> io::Result<()> {
        let rows = self.h / 2;
        let mut prev_fg: Option<Rgb> = None;
        let mut prev_bg: Option<Rgb> = None;

        for row in 0..rows {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if prev_bg != Some(top) {
                        queue!(out, style::SetBackgroundColor(top.into()))?;
                        prev_bg = Some(top);
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if prev_fg != Some(top) {
                        queue!(out, style::SetForegroundColor(top.into()))?;
                        prev_fg = Some(top);
                    }
                    if prev_bg != Some(bot) {
                        queue!(out, style::SetBackgroundColor(bot.into()))?;
                        prev_bg = Some(bot);
                    }
                    queue!(out, style::Print('▀'))?;
                }
            }
        }
        Ok(())
    }
}

/// Scale from scene coordinates to buffer pixels
#[derive(Clone, Copy)]
struct Viewport {
    pw: usize,
    ph: usize,
}

impl Viewport {
    fn px(&self, x: f32) -> i32 {
        (x * self.pw as f32 / WORLD_WIDTH) as i32
    }

    fn py(&self, y: f32) -> i32 {
        (y * self.ph as f32 / WORLD_HEIGHT) as i32
    }
}

/// Paints snapshots onto a terminal of a given size
pub struct Renderer {
    buf: PixelBuf,
    cols: u16,
    rows: u16,
}

impl Renderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2),
            cols,
            rows,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.buf.resize(cols as usize, rows as usize * 2);
    }

    /// Draw one frame
    pub fn draw(&mut self, out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
        let vp = Viewport {
            pw: self.buf.w,
            ph: self.buf.h,
        };

        self.draw_background(vp);
        for cloud in &snap.clouds {
            self.draw_cloud(vp, cloud.x, cloud.y, cloud.size);
        }
        for obs in &snap.obstacles {
            self.draw_cactus(vp, obs);
        }
        self.draw_runner(vp, &snap.player);

        self.buf.flush(out)?;
        self.draw_hud(out, snap)?;
        out.flush()
    }

    fn draw_background(&mut self, vp: Viewport) {
        let ground = vp.py(GROUND_Y);
        self.buf.fill_rect(0, 0, vp.pw as i32, ground, SKY);
        self.buf
            .fill_rect(0, ground, vp.pw as i32, vp.ph as i32 - ground, GROUND);
        // Diagonal hatching along the ground strip
        for x in (0..vp.pw as i32).step_by(8) {
            self.buf.set(x, ground, GROUND_HATCH);
            self.buf.set(x + 1, ground + 1, GROUND_HATCH);
        }
    }

    fn draw_cloud(&mut self, vp: Viewport, x: f32, y: f32, size: f32) {
        // Three overlapping puffs, like the canvas original
        let w = vp.px(size);
        let h = (vp.py(size) / 3).max(1);
        let cx = vp.px(x);
        let cy = vp.py(y);
        self.buf.fill_rect(cx, cy, w / 2, h, CLOUD);
        self.buf.fill_rect(cx + w / 3, cy - h / 2, w / 2, h, CLOUD);
        self.buf.fill_rect(cx + (w * 2) / 3, cy, w / 2, h, CLOUD);
    }

    fn draw_cactus(&mut self, vp: Viewport, obs: &Rect) {
        let x = vp.px(obs.left());
        let y = vp.py(obs.top());
        let w = (vp.px(obs.right()) - x).max(1);
        let h = (vp.py(obs.bottom()) - y).max(1);
        self.buf.fill_rect(x, y, w, h, CACTUS);

        // Side arms halfway up
        let arm_w = (w / 2).max(1);
        let arm_y = y + h / 3;
        self.buf.fill_rect(x - arm_w, arm_y, arm_w, (h / 3).max(1), CACTUS);
        self.buf.fill_rect(x + w, arm_y, arm_w, (h / 3).max(1), CACTUS);

        // Ridges
        for ry in ((y + 1)..(y + h)).step_by(3) {
            self.buf.set(x + w / 2, ry, CACTUS_RIDGE);
        }
    }

    fn draw_runner(&mut self, vp: Viewport, player: &Rect) {
        let x = vp.px(player.left());
        let y = vp.py(player.top());
        let w = (vp.px(player.right()) - x).max(1);
        let h = (vp.py(player.bottom()) - y).max(1);
        self.buf.fill_rect(x, y, w, h, RUNNER);
        // Snout
        self.buf
            .fill_rect(x + w, y + h / 4, (w / 3).max(1), (h / 4).max(1), RUNNER);
        // Eye
        self.buf.set(x + (w * 2) / 3, y + h / 5, RUNNER_EYE);
    }

    fn draw_hud(&mut self, out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
        let score_line = format!("SCORE {:>4}  BEST {:>4}", snap.score, snap.best);
        let col = (self.cols as usize).saturating_sub(score_line.len() + 2) as u16;
        queue!(
            out,
            cursor::MoveTo(col, 0),
            style::SetBackgroundColor(SKY.into()),
            style::SetForegroundColor(TEXT.into()),
            style::Print(&score_line),
        )?;

        let banner = match snap.phase {
            GamePhase::Idle => Some("PRESS SPACE TO START"),
            GamePhase::GameOver => Some("GAME OVER - SPACE TO RESTART, Q TO QUIT"),
            GamePhase::Running => None,
        };
        if let Some(text) = banner {
            let col = (self.cols as usize).saturating_sub(text.len()) as u16 / 2;
            let row = self.rows / 3;
            queue!(
                out,
                cursor::MoveTo(col, row),
                style::SetBackgroundColor(SKY.into()),
                style::SetForegroundColor(TEXT.into()),
                style::Print(text),
            )?;
        }
        Ok(())
    }
}
