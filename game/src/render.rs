//! Four-shade screens for every mode, drawn from a [`GameSnapshot`].

use engine::graphics::{Color, CpuRenderer, Renderer2d};
use engine::surface::{RgbaBufferSurface, Surface, SurfaceSize};
use engine::ui::{Anchor, Rect, Size};

use crate::field::{FIELD_H, FIELD_W};
use crate::mode::Mode;
use crate::piece::Piece;
use crate::snapshot::GameSnapshot;

pub const SCREEN: SurfaceSize = SurfaceSize::new(160, 144);

/// Lightest to darkest.
pub const PALETTE: [Color; 4] = [
    [155, 188, 15, 255],
    [139, 172, 15, 255],
    [48, 98, 48, 255],
    [15, 56, 15, 255],
];

const C0: Color = PALETTE[0];
const C1: Color = PALETTE[1];
const C2: Color = PALETTE[2];
const C3: Color = PALETTE[3];

pub const CELL: u32 = 8;
pub const FIELD_X: u32 = 38;
pub const FIELD_Y: u32 = 0;
const UI_X: u32 = 128;
const BLINK_MS: u64 = 500;

pub fn draw(gfx: &mut dyn Renderer2d, snapshot: &GameSnapshot, clock_ms: u64) {
    gfx.clear(C0);
    match snapshot.mode {
        Mode::Title => draw_title(gfx, clock_ms),
        Mode::Menu => draw_menu(gfx, snapshot),
        Mode::Playing | Mode::Paused | Mode::GameOver => {
            draw_play(gfx, snapshot);
            if snapshot.mode == Mode::Paused {
                draw_pause_banner(gfx);
            }
            if snapshot.mode == Mode::GameOver {
                draw_game_over(gfx, snapshot.score);
            }
        }
    }
}

/// Renders into a fresh in-memory surface.
pub fn render_to_surface(snapshot: &GameSnapshot, clock_ms: u64) -> RgbaBufferSurface {
    let mut surface = RgbaBufferSurface::new(SCREEN);
    {
        let mut gfx = CpuRenderer::new(surface.frame_mut(), SCREEN);
        draw(&mut gfx, snapshot, clock_ms);
    }
    surface
}

/// 8x8 bevelled block. The inner motif depends on the locked cell value.
pub fn draw_block(gfx: &mut dyn Renderer2d, x: u32, y: u32, cell: u8) {
    gfx.fill_rect(Rect::new(x, y, CELL, CELL), C3);
    gfx.fill_rect(Rect::new(x + 1, y + 1, 6, 6), C1);
    gfx.fill_rect(Rect::new(x + 1, y + 1, 6, 1), C0);
    gfx.fill_rect(Rect::new(x + 1, y + 1, 1, 6), C0);
    gfx.fill_rect(Rect::new(x + 1, y + 6, 6, 1), C2);
    gfx.fill_rect(Rect::new(x + 6, y + 1, 1, 6), C2);

    match cell.saturating_sub(1) % 3 {
        0 => gfx.fill_rect(Rect::new(x + 2, y + 2, 4, 4), C2),
        1 => {
            gfx.rect_outline(Rect::new(x + 2, y + 2, 4, 4), C2, 1);
            gfx.fill_rect(Rect::new(x + 3, y + 3, 2, 2), C3);
        }
        _ => {
            gfx.line((x + 2, y + 2), (x + 5, y + 5), C2);
            gfx.line((x + 5, y + 2), (x + 2, y + 5), C2);
        }
    }
}

fn draw_title(gfx: &mut dyn Renderer2d, clock_ms: u64) {
    let cx = SCREEN.width / 2;
    gfx.draw_text_centered(cx, 10, "POCKET", C3, 3);
    gfx.draw_text_centered(cx, 30, "BLOCKS", C3, 3);

    let link = Rect::from_size(SCREEN.width, SCREEN.height).place(Size::new(72, 24), Anchor::Center);
    gfx.fill_rect(link, C1);
    gfx.rect_outline(link, C2, 1);
    gfx.draw_text_centered(cx, link.y + 5, "2-PLAYER", C2, 1);
    gfx.draw_text_centered(cx, link.y + 14, "LINK", C2, 1);

    if (clock_ms / BLINK_MS) % 2 == 0 {
        gfx.draw_text_centered(cx, 104, "PRESS START", C3, 1);
    }
    gfx.draw_text_centered(cx, 134, "ENTER: START  ESC: QUIT", C2, 1);
}

fn draw_menu(gfx: &mut dyn Renderer2d, snapshot: &GameSnapshot) {
    let cx = SCREEN.width / 2;
    gfx.draw_text_centered(cx, 14, "- OPTIONS -", C3, 2);

    let level = format!("LEVEL: < {} >", snapshot.start_level);
    gfx.draw_text_centered(cx, 48, &level, C3, 1);
    let music = format!("MUSIC: < {} >", snapshot.music_choice.label());
    gfx.draw_text_centered(cx, 62, &music, C3, 1);

    gfx.draw_text_centered(cx, 100, "CONTROLS:", C2, 1);
    gfx.draw_text_centered(cx, 110, "ARROWS + ENTER", C2, 1);
}

fn draw_play(gfx: &mut dyn Renderer2d, snapshot: &GameSnapshot) {
    let field_w = FIELD_W as u32 * CELL;
    let field_h = FIELD_H as u32 * CELL;

    for wall_x in [FIELD_X - CELL, FIELD_X + field_w] {
        gfx.fill_rect(Rect::new(wall_x, FIELD_Y, CELL, field_h), C2);
        for row in 0..FIELD_H as u32 {
            gfx.fill_rect(Rect::new(wall_x, FIELD_Y + row * CELL, CELL, 1), C3);
        }
    }

    for (y, row) in snapshot.grid.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell != 0 {
                draw_block(
                    gfx,
                    FIELD_X + x as u32 * CELL,
                    FIELD_Y + y as u32 * CELL,
                    cell,
                );
            }
        }
    }

    if let Some(piece) = &snapshot.active {
        for (x, y) in piece.cells() {
            if y >= 0 && x >= 0 {
                draw_block(
                    gfx,
                    FIELD_X + x as u32 * CELL,
                    FIELD_Y + y as u32 * CELL,
                    piece.shape.cell_value(),
                );
            }
        }
    }

    let stats = [
        ("SCORE", snapshot.score),
        ("LEVEL", snapshot.level),
        ("LINES", snapshot.lines),
    ];
    for (i, (label, value)) in stats.into_iter().enumerate() {
        let y = 6 + i as u32 * 24;
        gfx.draw_text(UI_X, y, label, C3);
        gfx.draw_text(UI_X, y + 8, &value.to_string(), C3);
    }

    gfx.draw_text(UI_X, 82, "NEXT", C3);
    if let Some(next) = &snapshot.next {
        draw_preview(gfx, next, UI_X, 92);
    }
}

fn draw_preview(gfx: &mut dyn Renderer2d, piece: &Piece, x: u32, y: u32) {
    for (cx, cy) in piece.matrix.occupied() {
        draw_block(
            gfx,
            x + cx as u32 * CELL,
            y + cy as u32 * CELL,
            piece.shape.cell_value(),
        );
    }
}

fn draw_pause_banner(gfx: &mut dyn Renderer2d) {
    let banner = Rect::new(FIELD_X, 64, FIELD_W as u32 * CELL, 16);
    gfx.fill_rect(banner, C0);
    gfx.rect_outline(banner, C3, 1);
    gfx.draw_text_centered(banner.x + banner.w / 2, banner.y + 6, "PAUSE", C3, 1);
}

fn draw_game_over(gfx: &mut dyn Renderer2d, score: u32) {
    let field = Rect::new(FIELD_X, FIELD_Y, FIELD_W as u32 * CELL, FIELD_H as u32 * CELL);
    let panel = field.place(Size::new(72, 36), Anchor::Center);
    gfx.fill_rect(panel, C0);
    gfx.rect_outline(panel, C3, 2);
    let cx = panel.x + panel.w / 2;
    gfx.draw_text_centered(cx, panel.y + 8, "GAME OVER", C3, 1);
    gfx.draw_text_centered(cx, panel.y + 22, &format!("SCORE: {score}"), C3, 1);
}
