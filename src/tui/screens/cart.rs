//! 购物车渲染

use crate::catalog::format_price;
use crate::tui::components::{price_line, render_footer, render_header, three_panel_layout};
use crate::tui::labels::screen_title;
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::{
    config::{HIGHLIGHT_SYMBOL, HIGHLIGHT_WIDTH},
    theme,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, List, ListItem, Paragraph},
};
use rust_i18n::t;

/// 渲染购物车
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    render_header(&screen_title(Screen::Cart), state, frame, header);

    if state.cart.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(t!("cart_empty")).style(theme().hint()),
            Line::from(""),
            Line::from(format!("[ {} ]", t!("cart_start_order"))).style(theme().selected()),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
        frame.render_widget(empty, body);
        render_footer(&t!("cart_empty_hint"), state, frame, footer);
        return;
    }

    let [list_area, total_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(body);

    let width = list_area.width.saturating_sub(4 + HIGHLIGHT_WIDTH) as usize;
    let items: Vec<ListItem> = state
        .cart
        .lines()
        .iter()
        .map(|line| {
            let label = format!("{} × {}", line.name, line.quantity);
            ListItem::new(price_line(&label, &format_price(line.line_total_cents()), width))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(t!("cart_title"))
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, list_area, &mut state.cart_list.list_state);

    let total_width = total_area.width.saturating_sub(2) as usize;
    let subtotal = Paragraph::new(price_line(
        &t!("cart_subtotal"),
        &format_price(state.cart.subtotal_cents()),
        total_width,
    ))
    .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(subtotal, total_area);

    render_footer(&t!("cart_hint"), state, frame, footer);
}
