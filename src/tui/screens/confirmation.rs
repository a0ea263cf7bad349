//! 下单成功渲染

use crate::tui::components::{render_footer, render_header, three_panel_layout};
use crate::tui::labels::screen_title;
use crate::tui::state::{AppState, Screen};
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use rust_i18n::t;

/// 渲染订单确认
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    render_header(&screen_title(Screen::OrderConfirmation), state, frame, header);

    let mut lines = vec![
        Line::from(""),
        Line::from(format!("✓ {}", t!("confirmation_heading"))).style(theme().success()),
        Line::from(""),
    ];

    match &state.last_receipt {
        Some(receipt) => {
            lines.push(Line::from(vec![
                Span::styled(t!("confirmation_order_number"), theme().hint()),
                Span::raw(" "),
                Span::styled(receipt.order_number.to_string(), theme().title()),
            ]));
            lines.push(Line::from(vec![
                Span::styled(t!("confirmation_estimated_delivery"), theme().hint()),
                Span::raw(" "),
                Span::raw(receipt.estimated_delivery.clone()),
            ]));
        }
        None => lines.push(Line::from(t!("confirmation_no_order")).style(theme().hint())),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("[ {} ]", t!("button_track_order")), theme().disabled()),
        Span::raw("   "),
        Span::styled(format!("[ {} ]", t!("button_back_to_menu")), theme().selected()),
    ]));

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(para, body);

    render_footer(&t!("confirmation_hint"), state, frame, footer);
}
