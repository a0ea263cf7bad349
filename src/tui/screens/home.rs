//! 首页渲染

use crate::tui::components::{price_line, render_footer, render_header, three_panel_layout};
use crate::tui::labels::screen_title;
use crate::tui::state::{AppState, HOME_ITEMS, Screen};
use crate::tui::theme::{config::HIGHLIGHT_SYMBOL, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, List, ListItem, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染首页
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    render_header(&screen_title(Screen::Home), state, frame, header);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);
    let [hero_area, nav_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(3)]).areas(left);

    let hero = Paragraph::new(vec![
        Line::from(state.restaurant.headline.as_str()).style(theme().title()),
        Line::from(""),
        Line::from(state.restaurant.tagline.as_str()).style(theme().hint()),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(hero, hero_area);

    let items: Vec<ListItem> = HOME_ITEMS
        .iter()
        .map(|item| ListItem::new(item.label()).style(theme().normal()))
        .collect();
    let nav = List::new(items)
        .block(
            Block::bordered()
                .title(t!("select_option"))
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(nav, nav_area, &mut state.home.list_state);

    let width = right.width.saturating_sub(4) as usize;
    let featured: Vec<ListItem> = state
        .catalog
        .featured
        .iter()
        .map(|item| ListItem::new(price_line(&item.name, &item.display_price(), width)))
        .collect();
    let featured_list = List::new(featured).block(
        Block::bordered()
            .title(t!("home_featured"))
            .border_type(BorderType::Rounded)
            .border_style(theme().border()),
    );
    frame.render_widget(featured_list, right);

    render_footer(&t!("home_hint"), state, frame, footer);
}
