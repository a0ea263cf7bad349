//! 结账向导渲染

use crate::catalog::format_price;
use crate::checkout::CheckoutStep;
use crate::tui::components::{render_footer, render_header, three_panel_layout, truncate_value};
use crate::tui::labels::{checkout_hint, screen_title, step_indicator};
use crate::tui::state::input::mask_all_but_last_four;
use crate::tui::state::{AppState, CheckoutState, Screen};
use crate::tui::theme::{config::INPUT_WIDTH, theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Wrap},
};
use rust_i18n::t;
use std::borrow::Cow;

/// 渲染结账向导
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);
    render_header(&screen_title(Screen::Checkout), state, frame, header);

    let step = state.checkout.wizard.current_step();
    let [progress_area, banner_area, content_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(body);

    let ratio = (step.index() + 1) as f64 / CheckoutStep::COUNT as f64;
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(step_indicator(step))
        .gauge_style(theme().title());
    frame.render_widget(gauge, progress_area);

    if let Some(banner) = &state.checkout.banner {
        frame.render_widget(
            Paragraph::new(banner.as_str())
                .style(theme().error())
                .alignment(Alignment::Center),
            banner_area,
        );
    }

    let [content] = Layout::horizontal([Constraint::Max(INPUT_WIDTH + 16)])
        .flex(ratatui::layout::Flex::Center)
        .areas(content_area);

    if step.is_terminal() {
        draw_summary(frame, content, state);
    } else {
        draw_fields(frame, content, &state.checkout);
    }

    render_footer(&checkout_hint(step), state, frame, footer);
}

fn draw_fields(frame: &mut Frame, area: Rect, checkout: &CheckoutState) {
    let fields = checkout.fields();
    let rows = Layout::vertical(fields.iter().map(|_| Constraint::Length(3))).split(area);

    for (i, (field, row)) in fields.iter().zip(rows.iter()).enumerate() {
        let focused = i == checkout.focus;
        let form = checkout.wizard.form();

        let text = if focused {
            checkout.input.display(field.is_sensitive())
        } else if form.value(*field).is_empty() {
            String::new()
        } else if field.is_sensitive() {
            mask_all_but_last_four(form.value(*field))
        } else {
            form.value(*field).to_string()
        };

        let content = if text.is_empty() && !focused {
            Line::from(field.placeholder()).style(theme().hint())
        } else {
            Line::from(text).style(theme().normal())
        };

        let mut block = Block::bordered()
            .title(field.label())
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                theme().focused_border()
            } else {
                theme().border()
            });
        if let Some(error) = form.error(*field) {
            let width = row.width.saturating_sub(4) as usize;
            block = block
                .title_bottom(Line::from(truncate_value(error, width)).style(theme().error()))
                .border_style(theme().error());
        }

        frame.render_widget(Paragraph::new(content).block(block), *row);

        if focused {
            let x = row.x + 1 + checkout.input.visual_cursor_position(field.is_sensitive()) as u16;
            if x < row.x + row.width.saturating_sub(1) {
                frame.set_cursor_position(Position { x, y: row.y + 1 });
            }
        }
    }
}

fn draw_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let summary = state.checkout.wizard.summary();
    let label = |key: Cow<'static, str>| Span::styled(format!("{:<12}", key), theme().hint());

    let lines = vec![
        Line::from(t!("summary_heading")).style(theme().title()),
        Line::from(""),
        Line::from(vec![label(t!("summary_name")), Span::raw(summary.name)]),
        Line::from(vec![
            label(t!("summary_deliver_to")),
            Span::raw(summary.delivery_address),
        ]),
        Line::from(vec![
            label(t!("summary_payment")),
            Span::raw(t!("summary_card_ending", last4 = summary.card_last_four)),
        ]),
        Line::from(vec![
            label(t!("summary_total")),
            Span::styled(format_price(state.cart.subtotal_cents()), theme().price()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("[ {} ]", t!("button_go_back")), theme().hint()),
            Span::raw("   "),
            Span::styled(format!("[ {} ]", t!("button_confirm_pay")), theme().selected()),
        ])
        .centered(),
    ];

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(theme().border()));
    frame.render_widget(para, area);
}
