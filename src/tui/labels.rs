//! 本地化标签映射
//!
//! 将屏幕与结账步骤映射为稳定的翻译键，避免依赖 Debug 输出。

use crate::checkout::CheckoutStep;
use crate::tui::state::Screen;
use rust_i18n::t;
use std::borrow::Cow;

/// 屏幕标题
pub fn screen_title(screen: Screen) -> Cow<'static, str> {
    match screen {
        Screen::Home => t!("title_home"),
        Screen::Menu => t!("title_menu"),
        Screen::Cart => t!("title_cart"),
        Screen::Checkout => t!("title_checkout"),
        Screen::OrderConfirmation => t!("title_confirmation"),
        Screen::Profile => t!("title_profile"),
        Screen::Exit => t!("title_exit"),
    }
}

/// 步骤进度，如 “Step 2 of 3: Payment”
pub fn step_indicator(step: CheckoutStep) -> String {
    t!(
        "step_indicator",
        current = step.index() + 1,
        total = CheckoutStep::COUNT,
        title = step.title()
    )
    .to_string()
}

/// 结账页底部提示
pub fn checkout_hint(step: CheckoutStep) -> Cow<'static, str> {
    if step.is_terminal() {
        t!("checkout_confirm_hint")
    } else if step.index() == 0 {
        t!("checkout_first_step_hint")
    } else {
        t!("checkout_step_hint")
    }
}
