use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, BoardSession, Screen};
use crate::config::{CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_PLAYER, THEME_CLASSIC, Theme};
use crate::render_sink::Viewport;
use crate::snake::Position;
use crate::ui::intake::render_intake;

/// Renders the full frame for whichever screen is active.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = &THEME_CLASSIC;

    match app.screen() {
        Screen::Intake(form) => render_intake(frame, area, form, theme),
        Screen::Board(session) => render_board(frame, area, session, theme),
    }
}

fn render_board(frame: &mut Frame<'_>, area: Rect, session: &BoardSession, theme: &Theme) {
    let [board_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let size = session.view.size();
    let block = Block::bordered()
        .title(format!(" snake {}x{} ", size.width(), size.height()))
        .border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let cols = inner.width / CELL_WIDTH;
    let rows = inner.height;
    let viewport = Viewport::centered_on(session.camera_focus, size, cols, rows);

    let buffer = frame.buffer_mut();
    for row in 0..rows.min(size.height().saturating_sub(viewport.origin_y)) {
        for col in 0..cols.min(size.width().saturating_sub(viewport.origin_x)) {
            let position = Position::new(
                i32::from(viewport.origin_x + col),
                i32::from(viewport.origin_y + row),
            );
            let markers = session.view.markers(position);
            let (glyph, style) = if markers.player {
                (GLYPH_PLAYER, Style::new().fg(theme.player).bg(theme.board_bg))
            } else if markers.food {
                (GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.board_bg))
            } else {
                (GLYPH_EMPTY, Style::new().bg(theme.board_bg))
            };

            buffer.set_string(inner.x + col * CELL_WIDTH, inner.y + row, glyph, style);
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from("[WASD]/[Arrows] Move  [Q]/[Esc] Quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.footer)),
        footer_area,
    );
}
