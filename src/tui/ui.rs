//! UI渲染模块
//!
//! 按当前屏幕分发到 `screens` 下的各渲染函数。

use crate::tui::screens::{cart, checkout, confirmation, exit, home, menu, profile};
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::theme;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

/// 设置全局背景（使用Style）
fn set_background(area: Rect, buf: &mut Buffer) {
    let style = Style::new().bg(theme().bg);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut(Position { x, y }) {
                cell.set_style(style);
            }
        }
    }
}

/// 渲染整个应用
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, frame.area(), state))?;
    Ok(())
}

/// 主渲染函数
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    set_background(area, frame.buffer_mut());

    match state.current_screen {
        Screen::Home => home::draw(frame, area, state),
        Screen::Menu => menu::draw(frame, area, state),
        Screen::Cart => cart::draw(frame, area, state),
        Screen::Checkout => checkout::draw(frame, area, state),
        Screen::OrderConfirmation => confirmation::draw(frame, area, state),
        Screen::Profile => profile::draw(frame, area, state),
        Screen::Exit => exit::draw(frame, area, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tui::event::TuiEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_screen_draws() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = AppState::new(AppConfig::default());

        for key in ['m', 'c', 'p', 'h'] {
            state.handle_event(TuiEvent::Char(key));
            terminal
                .draw(|frame| draw(frame, frame.area(), &mut state))
                .unwrap();
        }
        state.handle_event(TuiEvent::CtrlC);
        terminal
            .draw(|frame| draw(frame, frame.area(), &mut state))
            .unwrap();
        assert_eq!(state.current_screen, Screen::Exit);
    }

    #[test]
    fn test_home_shows_restaurant_name() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = AppState::new(AppConfig::default());
        terminal
            .draw(|frame| draw(frame, frame.area(), &mut state))
            .unwrap();
        assert!(buffer_text(&terminal).contains(&state.restaurant.name));
    }
}
