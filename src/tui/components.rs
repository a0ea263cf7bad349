//! Common UI components module
//!
//! Header with the cart badge, footer with hints and notices, and text
//! helpers shared by every screen.

use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use rust_i18n::t;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::{AppState, Notice};
use super::theme::{config::PRICE_WIDTH, theme};
use crate::cart::CartStore;

/// Three-panel layout: header, body, footer
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Header: restaurant name and screen title on the left, cart badge on the right
pub fn render_header(title: &str, state: &AppState, frame: &mut Frame, area: Rect) {
    let snapshot = state.cart_snapshot();
    let badge = if snapshot.is_empty() {
        t!("header_cart_empty").to_string()
    } else {
        t!(
            "header_cart",
            count = snapshot.item_count,
            subtotal = snapshot.display_subtotal()
        )
        .to_string()
    };

    let block = Block::bordered()
        .title(
            Line::from(format!(" {} ", state.restaurant.name))
                .left_aligned()
                .style(theme().title()),
        )
        .title(Line::from(format!(" {} ", badge)).right_aligned().style(theme().price()))
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().normal());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(title).style(theme().title()).alignment(Alignment::Center),
        inner,
    );
}

/// Footer: notice or key hint, then the copyright line
pub fn render_footer(hint: &str, state: &AppState, frame: &mut Frame, area: Rect) {
    let [hint_area, copyright_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    match &state.notice {
        Some(notice) => render_notice(notice, frame, hint_area),
        None => render_hint(hint, frame, hint_area),
    }

    let copyright = t!(
        "footer_copyright",
        year = Local::now().year(),
        name = state.restaurant.name
    );
    frame.render_widget(
        Paragraph::new(copyright.as_ref())
            .style(theme().hint())
            .alignment(Alignment::Center),
        copyright_area,
    );
}

fn render_notice(notice: &Notice, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(notice.message.clone(), theme().notice(notice.level))];
    if notice.undoable {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(t!("notice_undo_hint"), theme().hint()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// Name padded to the available width with a right-aligned price
pub fn price_line(name: &str, price: &str, width: usize) -> Line<'static> {
    let name_width = width.saturating_sub(PRICE_WIDTH + 1);
    let name = truncate_value(name, name_width);
    let padding = name_width.saturating_sub(name.width()) + 1;
    Line::from(vec![
        Span::raw(name),
        Span::raw(" ".repeat(padding)),
        Span::styled(format!("{:>width$}", price, width = PRICE_WIDTH), theme().price()),
    ])
}

/// 按显示宽度截断文本，避免 UTF-8 边界问题
pub fn truncate_value(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    let mut current_width = 0;
    let mut output = String::new();

    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        output.push(ch);
        current_width += ch_width;
    }

    output.push_str("...");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("Cosmic Carbonara", 40), "Cosmic Carbonara");
        assert_eq!(truncate_value("Meteorite Margherita Pizza", 12), "Meteorite...");
        assert_eq!(truncate_value("黑洞巧克力蛋糕", 9), "黑洞巧...");
    }

    #[test]
    fn test_price_line_width() {
        let line = price_line("Orion Old Fashioned", "$15.00", 40);
        assert_eq!(line.width(), 40);
        let narrow = price_line("Meteorite Margherita Pizza", "$19.00", 20);
        assert_eq!(narrow.width(), 20);
    }
}
