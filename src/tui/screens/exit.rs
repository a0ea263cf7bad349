//! 退出确认渲染

use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染退出确认
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![Line::from(t!("exit_confirm")).style(theme().warning())];
    if let Some(path) = &state.log_path {
        lines.push(Line::from(""));
        lines.push(
            Line::from(t!("log_saved_to", path = path.display().to_string())).style(theme().hint()),
        );
    }

    let confirm_text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(confirm_text, center);
}
