//! Canvas 2D renderer for the browser build

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette::{self, HUD_TEXT, OVERLAY, SKY};
use super::{RenderInitError, Renderer};
use crate::sim::{Facing, GamePhase, Rect, Snapshot};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas_id: &str) -> Result<Self, RenderInitError> {
        let window = web_sys::window().ok_or(RenderInitError::NoWindow)?;
        let document = window.document().ok_or(RenderInitError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| RenderInitError::CanvasMissing(canvas_id.to_string()))?
            .dyn_into()
            .map_err(|_| RenderInitError::NotACanvas)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(RenderInitError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| RenderInitError::ContextUnavailable)?;

        log::info!("Canvas renderer attached to #{}", canvas_id);
        Ok(Self { canvas, ctx })
    }

    fn fill(&self, color: &str, rect: &Rect) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn text(&self, text: &str, x: f64, y: f64, font: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(HUD_TEXT);
        // fill_text only fails on a detached context
        let _ = self.ctx.fill_text(text, x, y);
    }

    fn draw_player(&self, snapshot: &Snapshot<'_>) {
        let player = snapshot.player;
        let body = player.rect();
        self.fill(palette::player_color(player.pose), &body);

        let eye_x = match player.facing {
            Facing::Right => body.right() - 10.0,
            Facing::Left => body.left() + 4.0,
        };
        let eye = Rect::new(glam::Vec2::new(eye_x, body.top() + 8.0), glam::Vec2::splat(6.0));
        self.fill(HUD_TEXT, &eye);
    }

    fn draw_overlay(&self, snapshot: &Snapshot<'_>) {
        let (title, detail) = match snapshot.phase {
            GamePhase::Playing => return,
            GamePhase::Menu => ("Sweet Rush".to_string(), "Press Enter to start".to_string()),
            GamePhase::GameOver => (
                "Game Over".to_string(),
                format!("Distance {:.0} - press Enter to retry", snapshot.distance),
            ),
            GamePhase::Victory => (
                "You Win!".to_string(),
                format!("{} coins - press Enter to play again", snapshot.coins()),
            ),
        };

        let w = snapshot.world_width as f64;
        let h = snapshot.world_height as f64;
        self.ctx.set_fill_style_str(OVERLAY);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_text_align("center");
        self.text(&title, w / 2.0, h / 2.0 - 20.0, "bold 48px sans-serif");
        self.text(&detail, w / 2.0, h / 2.0 + 24.0, "20px sans-serif");
        self.ctx.set_text_align("start");
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        let (w, h) = (snapshot.world_width as u32, snapshot.world_height as u32);
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }

        self.ctx.set_fill_style_str(SKY);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        for element in snapshot.background {
            self.fill(
                palette::background_color(element.kind),
                &Rect::new(element.pos, element.size),
            );
        }
        for platform in snapshot.platforms.iter().chain(snapshot.obstacles) {
            self.fill(palette::platform_color(platform.kind), &platform.rect());
        }
        for sweet in snapshot.sweets {
            self.fill(palette::sweet_color(sweet.kind), &sweet.rect());
        }
        self.draw_player(snapshot);

        let hud = format!(
            "Coins {}/{}   Distance {:.0}   Best {:.0}",
            snapshot.coins(),
            snapshot.victory_threshold,
            snapshot.distance,
            snapshot.high_score
        );
        self.text(&hud, 12.0, 24.0, "16px monospace");

        self.draw_overlay(snapshot);
    }
}
