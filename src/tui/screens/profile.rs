//! 个人资料渲染

use crate::profile::ProfileField;
use crate::tui::components::{render_footer, render_header, three_panel_layout};
use crate::tui::labels::screen_title;
use crate::tui::state::{AppState, ProfileTab, Screen};
use crate::tui::theme::{config::HIGHLIGHT_SYMBOL, theme};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Row, Table, TableState, Tabs},
};
use rust_i18n::t;

/// 渲染个人资料
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    render_header(&screen_title(Screen::Profile), state, frame, header);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(body);
    draw_sidebar(frame, left, state);

    let [tabs_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(right);
    let tabs = Tabs::new(ProfileTab::ALL.iter().map(|tab| tab.label()))
        .select(state.profile_view.tab as usize)
        .style(theme().normal())
        .highlight_style(theme().selected())
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(tabs, tabs_area);

    let hint = match state.profile_view.tab {
        ProfileTab::OrderHistory => {
            draw_history(frame, content_area, state);
            t!("profile_history_hint")
        }
        ProfileTab::AccountDetails => {
            draw_account(frame, content_area, state);
            t!("profile_account_hint")
        }
    };

    render_footer(&hint, state, frame, footer);
}

/// 姓名、邮箱与常用地址
fn draw_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let details = &state.profile.details;
    let mut lines = vec![
        Line::from(details.name.as_str()).style(theme().title()),
        Line::from(details.email.as_str()).style(theme().hint()),
        Line::from(""),
        Line::from(t!("profile_saved_addresses")).style(theme().title()),
    ];
    for address in &state.profile.addresses {
        lines.push(Line::from(Span::styled(address.label.clone(), theme().price())));
        lines.push(Line::from(address.address.clone()));
    }

    let para = Paragraph::new(lines)
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(para, area);
}

fn draw_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows: Vec<Row> = state
        .profile
        .order_history
        .iter()
        .map(|order| {
            Row::new(vec![
                Line::from(order.id.clone()),
                Line::from(order.date.format("%Y-%m-%d").to_string()),
                Line::from(order.display_total()).style(theme().price()),
                Line::from(Span::styled(
                    format!(" {} ", order.status.label()),
                    theme().badge(order.status.badge()),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(12),
        ],
    )
    .header(
        Row::new(vec![
            t!("history_order_id"),
            t!("history_date"),
            t!("history_total"),
            t!("history_status"),
        ])
        .style(theme().hint()),
    )
    .row_highlight_style(theme().selected())
    .highlight_symbol(HIGHLIGHT_SYMBOL)
    .block(
        Block::bordered()
            .title(t!("profile_tab_history"))
            .border_type(BorderType::Rounded)
            .border_style(theme().border()),
    );

    let mut table_state = TableState::default().with_selected(state.profile_view.history.selected());
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_account(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.profile_view;
    let [name_area, email_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    for (field, row, input) in [
        (ProfileField::Name, name_area, &view.name),
        (ProfileField::Email, email_area, &view.email),
    ] {
        let focused = view.focused_field() == field;
        let mut block = Block::bordered()
            .title(field.label())
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                theme().focused_border()
            } else {
                theme().border()
            });
        if let Some(error) = view.error_for(field) {
            block = block
                .title_bottom(Line::from(error).style(theme().error()))
                .border_style(theme().error());
        }
        frame.render_widget(Paragraph::new(input.value()).block(block), row);

        if focused {
            let x = row.x + 1 + input.visual_cursor_position(false) as u16;
            if x < row.x + row.width.saturating_sub(1) {
                frame.set_cursor_position(Position { x, y: row.y + 1 });
            }
        }
    }

    if view.saved {
        frame.render_widget(
            Paragraph::new(t!("profile_saved")).style(theme().success()),
            status_area,
        );
    }
}
