use macroquad::prelude::*;

use crate::grid::{Cell, Grid};
use crate::run::RunTotals;
use crate::session::{LevelSession, SessionState};
use crate::skin::Skin;

pub(crate) const TILE_SIZE: f32 = 32.0;

const BG_COLOR: Color = Color::new(0.08, 0.08, 0.11, 1.0);
const FLOOR_COLOR: Color = Color::new(0.14, 0.15, 0.22, 1.0);
const WALL_COLOR: Color = Color::new(0.31, 0.35, 1.0, 1.0);
const EXIT_COLOR: Color = Color::new(0.0, 1.0, 0.55, 1.0);
const TEXT_COLOR: Color = Color::new(0.94, 0.94, 1.0, 1.0);
const FLASH_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.47);

const HUD_FONT_SIZE: f32 = 22.0;
const BANNER_FONT_SIZE: f32 = 26.0;
const TITLE_FONT_SIZE: f32 = 32.0;

/// Length of one on/off half of the win flash, in seconds.
const FLASH_PULSE: f64 = 0.08;
const FLASH_PULSES: u32 = 3;

/// Window size, in pixels, that fits `grid` exactly.
pub(crate) fn window_size(grid: &Grid) -> (f32, f32) {
    (
        grid.width() as f32 * TILE_SIZE,
        grid.height() as f32 * TILE_SIZE,
    )
}

/// Whether the white flash overlay is lit `since_win` seconds after reaching the exit.
pub(crate) fn flash_visible(since_win: f64) -> bool {
    if since_win < 0.0 {
        return false;
    }
    let phase = (since_win / FLASH_PULSE).floor() as u32;
    phase < FLASH_PULSES * 2 && phase % 2 == 0
}

fn draw_text_centered(text: &str, center_x: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, size, color);
}

fn draw_ghost(px: f32, py: f32, size: f32, skin: Skin) {
    let body = skin.body();
    let r = size * 0.38;
    let cx = px + size / 2.0;
    let cy = py + size * 0.45;
    draw_circle(cx, cy, r, body);
    draw_rectangle(cx - r, cy, r * 2.0, size * 0.4, body);
    for eye_x in [cx - r * 0.4, cx + r * 0.4] {
        draw_circle(eye_x, cy - r * 0.1, r * 0.22, WHITE);
        draw_circle(eye_x, cy - r * 0.1, r * 0.1, BLACK);
    }
}

fn draw_cell(cell: Cell, px: f32, py: f32, size: f32) {
    match cell {
        Cell::Wall => {
            draw_rectangle(px, py, size, size, WALL_COLOR);
            draw_rectangle_lines(px, py, size, size, 3.0, BLACK);
        }
        Cell::Floor | Cell::Start => draw_rectangle(px, py, size, size, FLOOR_COLOR),
        Cell::Exit => {
            draw_rectangle(px, py, size, size, FLOOR_COLOR);
            draw_rectangle(px + 3.0, py + 3.0, size - 6.0, size - 6.0, EXIT_COLOR);
        }
    }
}

pub(crate) fn render_skin_choice() {
    clear_background(BG_COLOR);
    draw_text("Choose your ghost!", 40.0, 70.0, TITLE_FONT_SIZE, TEXT_COLOR);
    draw_text(
        "Press 1 for PINK, 2 for BLUE",
        40.0,
        105.0,
        HUD_FONT_SIZE,
        TEXT_COLOR,
    );

    for (i, skin) in Skin::all().into_iter().enumerate() {
        let cx = 200.0 + i as f32 * 220.0;
        draw_ghost(cx - TILE_SIZE, 200.0, TILE_SIZE * 2.0, skin);
        draw_text_centered(
            &format!("{} - {}", i + 1, skin.label()),
            cx,
            290.0,
            HUD_FONT_SIZE,
            TEXT_COLOR,
        );
    }
}

pub(crate) fn render_session(session: &LevelSession, skin: Skin, now: f64) {
    let level = session.level();
    clear_background(BG_COLOR);

    for (pos, cell) in level.grid.entries() {
        draw_cell(
            cell,
            pos.x as f32 * TILE_SIZE,
            pos.y as f32 * TILE_SIZE,
            TILE_SIZE,
        );
    }

    let player = session.position();
    draw_ghost(
        player.x as f32 * TILE_SIZE,
        player.y as f32 * TILE_SIZE,
        TILE_SIZE,
        skin,
    );

    // HUD
    let best = session
        .previous_best()
        .map_or_else(|| "--".to_string(), |secs| format!("{secs}s"));
    for (i, line) in [
        format!("Time: {}s", session.elapsed()),
        format!("Level: {}", level.number()),
        format!("Best: {best}"),
    ]
    .iter()
    .enumerate()
    {
        draw_text(line, 10.0, 22.0 + i as f32 * 25.0, HUD_FONT_SIZE, TEXT_COLOR);
    }

    if session.new_record() {
        draw_text_centered(
            "New Best Time!",
            screen_width() / 2.0,
            30.0,
            BANNER_FONT_SIZE,
            EXIT_COLOR,
        );
    }

    if let SessionState::Won { at, .. } = session.state()
        && flash_visible(now - at)
    {
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), FLASH_COLOR);
    }
}

pub(crate) fn render_finished(totals: RunTotals) {
    clear_background(BG_COLOR);
    draw_text("All levels finished!", 50.0, 70.0, TITLE_FONT_SIZE, TEXT_COLOR);
    draw_text(
        &format!(
            "{} level(s) in {}s",
            totals.levels_completed, totals.total_seconds
        ),
        50.0,
        110.0,
        HUD_FONT_SIZE,
        TEXT_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_pulses_three_times_then_stops() {
        let lit: Vec<bool> = (0..8)
            .map(|i| flash_visible(f64::from(i) * FLASH_PULSE + FLASH_PULSE / 2.0))
            .collect();
        assert_eq!(
            lit,
            vec![true, false, true, false, true, false, false, false]
        );
        assert!(!flash_visible(-0.01));
    }
}
