use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::intake::{Field, IntakeForm};

/// Draws the board-size form as a centered popup.
pub fn render_intake(frame: &mut Frame<'_>, area: Rect, form: &IntakeForm, theme: &Theme) {
    let popup = centered_popup(area, 60, 70);
    frame.render_widget(Clear, popup);

    let [title_row, width_row, height_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(1),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE: board size"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.player).add_modifier(Modifier::BOLD)),
        title_row,
    );

    render_field(frame, width_row, form, Field::Width, theme);
    render_field(frame, height_row, form, Field::Height, theme);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("[Tab] Switch field  [Enter] Start"),
            Line::from("[Esc] Quit"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.footer)),
        footer_row,
    );
}

fn render_field(frame: &mut Frame<'_>, area: Rect, form: &IntakeForm, field: Field, theme: &Theme) {
    let error = form.error(field);
    let border_color = match (error, form.focus() == field) {
        (Some(_), _) => theme.field_error,
        (None, true) => theme.field_focus,
        (None, false) => theme.border_fg,
    };

    let cursor = if form.focus() == field { "_" } else { "" };
    let mut lines = vec![Line::from(format!("{}{cursor}", form.value(field)))];
    if let Some(error) = error {
        lines.push(Line::styled(
            error.to_string(),
            Style::default().fg(theme.field_error),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(format!(" {} ", field.label()))
                .border_style(Style::default().fg(border_color)),
        ),
        area,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
