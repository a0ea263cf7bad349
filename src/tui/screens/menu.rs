//! 菜单渲染

use crate::catalog::Category;
use crate::tui::components::{
    price_line, render_footer, render_header, three_panel_layout, truncate_value,
};
use crate::tui::labels::screen_title;
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::{
    config::{HIGHLIGHT_SYMBOL, HIGHLIGHT_WIDTH},
    theme,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, List, ListItem, Paragraph, Tabs},
};
use rust_i18n::t;

/// 渲染菜单
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    render_header(&screen_title(Screen::Menu), state, frame, header);

    let [tabs_area, list_area, detail_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(body);

    let tabs = Tabs::new(Category::ALL.iter().map(|c| c.label()))
        .select(state.browse.category.index())
        .style(theme().normal())
        .highlight_style(theme().selected())
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(tabs, tabs_area);

    let width = list_area.width.saturating_sub(4 + HIGHLIGHT_WIDTH) as usize;
    let items: Vec<ListItem> = state
        .catalog
        .items_in(state.browse.category)
        .iter()
        .map(|item| ListItem::new(price_line(&item.name, &item.display_price(), width)))
        .collect();

    let empty = items.is_empty();
    let list = List::new(items)
        .block(
            Block::bordered()
                .title(state.browse.category.label())
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, list_area, &mut state.browse.items.list_state);

    // 选中菜品的图片链接
    let detail = if empty {
        Line::from(t!("menu_category_empty")).style(theme().hint())
    } else {
        state
            .browse
            .selected_item(&state.catalog)
            .map(|item| {
                let width = detail_area.width.saturating_sub(2) as usize;
                Line::from(truncate_value(item.image_or_placeholder(), width)).style(theme().hint())
            })
            .unwrap_or_default()
    };
    frame.render_widget(
        Paragraph::new(detail).block(
            Block::bordered()
                .title(t!("menu_image"))
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        ),
        detail_area,
    );

    render_footer(&t!("menu_hint"), state, frame, footer);
}
