//! 应用状态与按键处理
//!
//! 所有状态变更都在这里按按键事件发生，不依赖终端，便于测试。

use crate::cart::{Cart, CartStore};
use crate::catalog::Catalog;
use crate::checkout::{AdvanceOutcome, LocalOrderSubmitter, SubmitOutcome};
use crate::config::{AppConfig, RestaurantConfig};
use crate::navigation::{Navigator, Route};
use crate::order::OrderReceipt;
use crate::profile::{OrderRecord, OrderStatus, Profile};
use crate::tui::event::TuiEvent;
use crate::tui::state::{
    BrowseState, CheckoutState, HOME_ITEMS, HomeItem, ProfileState, ProfileTab, Screen,
    Selectable, SelectionState,
};
use rust_i18n::t;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// TUI 运行结果
#[derive(Debug, Default)]
pub struct TuiResult {
    /// 本次会话下的订单
    pub orders: Vec<OrderReceipt>,
}

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// 底部提示（toast）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    /// 是否可按 u 撤销
    pub undoable: bool,
}

impl Notice {
    fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
            undoable: false,
        }
    }
}

/// 路由器：结账提交成功后由向导调用
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    /// 当前路由
    pub fn current(&self) -> Route {
        self.current
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "Navigate");
        self.current = route;
    }
}

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 当前屏幕
    pub current_screen: Screen,
    /// 取消退出后返回的屏幕
    return_screen: Screen,
    /// 餐厅信息
    pub restaurant: RestaurantConfig,
    /// 菜单
    pub catalog: Catalog,
    /// 购物车
    pub cart: Cart,
    /// 个人资料
    pub profile: Profile,
    /// 下单后端
    pub submitter: LocalOrderSubmitter,
    /// 路由
    pub router: Router,
    /// 首页菜单选择
    pub home: SelectionState,
    /// 菜单浏览
    pub browse: BrowseState,
    /// 购物车列表选择
    pub cart_list: SelectionState,
    /// 结账
    pub checkout: CheckoutState,
    /// 个人资料界面
    pub profile_view: ProfileState,
    /// 底部提示
    pub notice: Option<Notice>,
    /// 最近一次下单回执
    pub last_receipt: Option<OrderReceipt>,
    /// 日志路径
    pub log_path: Option<PathBuf>,
    /// 本次会话的全部订单
    placed_orders: Vec<OrderReceipt>,
}

impl AppState {
    /// 由配置创建
    pub fn new(config: AppConfig) -> Self {
        let cart = Cart::from_lines(config.cart.lines);
        let submitter = LocalOrderSubmitter::new(config.restaurant.estimated_delivery.clone());
        Self {
            current_screen: Screen::Home,
            return_screen: Screen::Home,
            browse: BrowseState::new(&config.catalog),
            cart_list: SelectionState::with_count(cart.item_count()),
            profile_view: ProfileState::new(&config.profile),
            restaurant: config.restaurant,
            catalog: config.catalog,
            cart,
            profile: config.profile,
            submitter,
            router: Router::default(),
            home: SelectionState::with_count(HOME_ITEMS.len()),
            checkout: CheckoutState::new(),
            notice: None,
            last_receipt: None,
            log_path: None,
            placed_orders: Vec::new(),
        }
    }

    /// 结束会话，交出订单列表
    pub fn into_result(self) -> TuiResult {
        TuiResult {
            orders: self.placed_orders,
        }
    }

    /// 当前屏幕是否在接收文本输入
    pub fn accepts_text(&self) -> bool {
        match self.current_screen {
            Screen::Checkout => self.checkout.focused_field().is_some(),
            Screen::Profile => self.profile_view.tab == ProfileTab::AccountDetails,
            _ => false,
        }
    }

    /// 处理一个事件，返回 true 表示退出
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::None | TuiEvent::Resize(_, _) => return false,
            TuiEvent::CtrlC => {
                self.open(Screen::Exit);
                return false;
            }
            _ => {}
        }

        let undo_available = self.notice.as_ref().is_some_and(|n| n.undoable);
        self.notice = None;

        if let TuiEvent::Char(c) = event
            && !self.accepts_text()
            && self.current_screen != Screen::Exit
            && let Some(target) = hotkey(c)
        {
            self.open(target);
            return false;
        }

        match self.current_screen {
            Screen::Home => self.handle_home(event),
            Screen::Menu => self.handle_menu(event, undo_available),
            Screen::Cart => self.handle_cart(event),
            Screen::Checkout => self.handle_checkout(event),
            Screen::OrderConfirmation => self.handle_confirmation(event),
            Screen::Profile => self.handle_profile(event),
            Screen::Exit => return self.handle_exit(event),
        }
        false
    }

    /// 切换屏幕
    pub fn open(&mut self, screen: Screen) {
        match screen {
            Screen::Exit => {
                if self.current_screen != Screen::Exit {
                    self.return_screen = self.current_screen;
                }
            }
            Screen::Checkout => {
                if self.cart.is_empty() {
                    self.notice = Some(Notice::new(t!("checkout_empty_cart"), NoticeLevel::Error));
                    return;
                }
                if self.checkout.wizard.is_submitted() {
                    self.checkout = CheckoutState::new();
                }
                self.checkout.banner = None;
            }
            Screen::Cart => self.cart_list.set_count(self.cart.item_count()),
            Screen::Profile => {
                let tab = self.profile_view.tab;
                self.profile_view = ProfileState::new(&self.profile);
                self.profile_view.tab = tab;
            }
            _ => {}
        }

        if let Some(route) = screen.route() {
            self.router.navigate_to(route);
        }
        debug!(screen = ?screen, "Screen entered");
        self.current_screen = screen;
    }

    fn handle_home(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Up => self.home.prev(),
            TuiEvent::Down | TuiEvent::Tab => self.home.next(),
            TuiEvent::Enter => match HomeItem::from_index(self.home.selected_or_default()) {
                Some(HomeItem::ViewMenu) => self.open(Screen::Menu),
                Some(HomeItem::ViewCart) => self.open(Screen::Cart),
                Some(HomeItem::Checkout) => self.open(Screen::Checkout),
                Some(HomeItem::Profile) => self.open(Screen::Profile),
                Some(HomeItem::Exit) => self.open(Screen::Exit),
                None => {}
            },
            TuiEvent::Escape => self.open(Screen::Exit),
            _ => {}
        }
    }

    fn handle_menu(&mut self, event: TuiEvent, undo_available: bool) {
        match event {
            TuiEvent::Left | TuiEvent::BackTab => self.browse.prev_tab(&self.catalog),
            TuiEvent::Right | TuiEvent::Tab => self.browse.next_tab(&self.catalog),
            TuiEvent::Up => self.browse.items.prev(),
            TuiEvent::Down => self.browse.items.next(),
            TuiEvent::Enter => {
                if let Some(item) = self.browse.selected_item(&self.catalog) {
                    let notice = self.cart.add(item);
                    self.notice = Some(Notice {
                        message: notice.message,
                        level: NoticeLevel::Success,
                        undoable: true,
                    });
                }
            }
            TuiEvent::Char('u') | TuiEvent::Char('U') => {
                let reverted = if undo_available {
                    self.cart.undo_last_add()
                } else {
                    None
                };
                if let Some(id) = reverted {
                    let name = self
                        .catalog
                        .find(&id)
                        .map(|item| item.name.clone())
                        .unwrap_or(id);
                    self.notice = Some(Notice::new(t!("cart_undone", name = name), NoticeLevel::Info));
                }
            }
            TuiEvent::Escape => self.open(Screen::Home),
            _ => {}
        }
    }

    fn handle_cart(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Up => self.cart_list.prev(),
            TuiEvent::Down => self.cart_list.next(),
            TuiEvent::Delete | TuiEvent::Char('d') | TuiEvent::Char('D') => {
                let selected = self
                    .cart_list
                    .selected()
                    .and_then(|i| self.cart.lines().get(i))
                    .map(|line| (line.item_id.clone(), line.name.clone()));
                if let Some((id, name)) = selected {
                    self.cart.remove(&id);
                    self.cart_list.set_count(self.cart.item_count());
                    self.notice = Some(Notice::new(t!("cart_removed", name = name), NoticeLevel::Info));
                }
            }
            TuiEvent::Enter => {
                if self.cart.is_empty() {
                    self.open(Screen::Menu);
                } else {
                    self.open(Screen::Checkout);
                }
            }
            TuiEvent::Escape => self.open(Screen::Home),
            _ => {}
        }
    }

    fn handle_checkout(&mut self, event: TuiEvent) {
        let checkout = &mut self.checkout;
        match event {
            TuiEvent::Enter => {
                if checkout.wizard.current_step().is_terminal() {
                    self.submit_order();
                } else if let AdvanceOutcome::Blocked { errors, .. } = checkout.advance() {
                    debug!(invalid = errors.len(), "Checkout step blocked");
                }
            }
            TuiEvent::Escape => {
                if !checkout.retreat() {
                    self.open(Screen::Cart);
                }
            }
            TuiEvent::Up | TuiEvent::BackTab => checkout.focus_prev(),
            TuiEvent::Down | TuiEvent::Tab => checkout.focus_next(),
            TuiEvent::Left => checkout.input.move_cursor_left(),
            TuiEvent::Right => checkout.input.move_cursor_right(),
            TuiEvent::Home => checkout.input.move_cursor_to_start(),
            TuiEvent::End => checkout.input.move_cursor_to_end(),
            TuiEvent::Char(c) => {
                checkout.input.insert_char(c);
                checkout.commit_input();
            }
            TuiEvent::Paste(text) => {
                checkout.input.insert_str(&text);
                checkout.commit_input();
            }
            TuiEvent::Backspace => {
                checkout.input.delete_before_cursor();
                checkout.commit_input();
            }
            TuiEvent::Delete => {
                checkout.input.delete_after_cursor();
                checkout.commit_input();
            }
            _ => {}
        }
    }

    /// 从确认步骤提交订单
    fn submit_order(&mut self) {
        let subtotal = self.cart.subtotal_cents();
        match self
            .checkout
            .wizard
            .submit(&mut self.submitter, &mut self.router)
        {
            Ok(SubmitOutcome::Submitted(receipt)) => {
                self.record_order(receipt, subtotal);
                self.notice = Some(Notice::new(t!("order_placed"), NoticeLevel::Success));
                self.current_screen = Screen::from(self.router.current());
            }
            Ok(SubmitOutcome::AlreadySubmitted(_)) => {
                self.current_screen = Screen::OrderConfirmation;
            }
            Err(e) => {
                warn!(error = %e, "Checkout submission failed");
                self.checkout.banner = Some(t!("submit_failed", reason = e.to_string()).to_string());
            }
        }
    }

    /// 下单成功：清空购物车并记入订单历史
    fn record_order(&mut self, receipt: OrderReceipt, total_cents: u32) {
        info!(
            order_number = %receipt.order_number,
            total_cents,
            lines = self.cart.item_count(),
            "Order recorded"
        );
        self.cart.clear();
        self.cart_list.set_count(0);
        self.profile.order_history.insert(
            0,
            OrderRecord {
                id: receipt.order_number.to_string(),
                date: receipt.placed_at.date_naive(),
                total_cents,
                status: OrderStatus::Processing,
            },
        );
        self.placed_orders.push(receipt.clone());
        self.last_receipt = Some(receipt);
    }

    fn handle_confirmation(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Enter => self.open(Screen::Menu),
            TuiEvent::Escape => self.open(Screen::Home),
            _ => {}
        }
    }

    fn handle_profile(&mut self, event: TuiEvent) {
        let view = &mut self.profile_view;
        match (view.tab, event) {
            (_, TuiEvent::Tab | TuiEvent::BackTab) => view.tab = view.tab.toggle(),
            (_, TuiEvent::Escape) => self.open(Screen::Home),
            (ProfileTab::OrderHistory, TuiEvent::Left | TuiEvent::Right) => {
                view.tab = view.tab.toggle()
            }
            (ProfileTab::OrderHistory, TuiEvent::Up) => view.history.prev(),
            (ProfileTab::OrderHistory, TuiEvent::Down) => view.history.next(),
            (ProfileTab::AccountDetails, TuiEvent::Up | TuiEvent::Down) => view.focus_next(),
            (ProfileTab::AccountDetails, TuiEvent::Enter) => {
                if view.save(&mut self.profile) {
                    self.notice = Some(Notice::new(t!("profile_saved"), NoticeLevel::Success));
                }
            }
            (ProfileTab::AccountDetails, TuiEvent::Char(c)) => view.focused_input().insert_char(c),
            (ProfileTab::AccountDetails, TuiEvent::Paste(text)) => {
                view.focused_input().insert_str(&text)
            }
            (ProfileTab::AccountDetails, TuiEvent::Backspace) => {
                view.focused_input().delete_before_cursor()
            }
            (ProfileTab::AccountDetails, TuiEvent::Delete) => {
                view.focused_input().delete_after_cursor()
            }
            (ProfileTab::AccountDetails, TuiEvent::Left) => view.focused_input().move_cursor_left(),
            (ProfileTab::AccountDetails, TuiEvent::Right) => {
                view.focused_input().move_cursor_right()
            }
            (ProfileTab::AccountDetails, TuiEvent::Home) => {
                view.focused_input().move_cursor_to_start()
            }
            (ProfileTab::AccountDetails, TuiEvent::End) => view.focused_input().move_cursor_to_end(),
            _ => {}
        }
    }

    /// 退出确认
    fn handle_exit(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Char('y') | TuiEvent::Char('Y') | TuiEvent::Enter => return true,
            TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
                self.current_screen = self.return_screen;
            }
            _ => {}
        }
        false
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl CartStore for AppState {
    fn cart_snapshot(&self) -> crate::cart::CartSnapshot {
        self.cart.cart_snapshot()
    }
}

/// 全局快捷键
fn hotkey(c: char) -> Option<Screen> {
    match c.to_ascii_lowercase() {
        'h' => Some(Screen::Home),
        'm' => Some(Screen::Menu),
        'c' => Some(Screen::Cart),
        'p' => Some(Screen::Profile),
        'q' => Some(Screen::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{CheckoutField, CheckoutStep};

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.handle_event(TuiEvent::Char(c));
        }
    }

    fn fill_step(state: &mut AppState, values: &[&str]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                state.handle_event(TuiEvent::Tab);
            }
            type_text(state, value);
        }
        state.handle_event(TuiEvent::Enter);
    }

    #[test]
    fn test_hotkeys_and_exit_confirm() {
        let mut state = AppState::default();
        state.handle_event(TuiEvent::Char('m'));
        assert_eq!(state.current_screen, Screen::Menu);
        assert_eq!(state.router.current(), Route::Menu);

        state.handle_event(TuiEvent::CtrlC);
        assert_eq!(state.current_screen, Screen::Exit);
        assert!(!state.handle_event(TuiEvent::Char('n')));
        assert_eq!(state.current_screen, Screen::Menu);

        state.handle_event(TuiEvent::CtrlC);
        assert!(state.handle_event(TuiEvent::Char('y')));
    }

    #[test]
    fn test_menu_add_and_undo() {
        let mut state = AppState::default();
        state.open(Screen::Menu);
        let before = state.cart.subtotal_cents();

        state.handle_event(TuiEvent::Enter);
        assert_eq!(state.cart.subtotal_cents(), before + 2250);
        assert!(state.notice.as_ref().unwrap().undoable);

        state.handle_event(TuiEvent::Char('u'));
        assert_eq!(state.cart.subtotal_cents(), before);
        state.handle_event(TuiEvent::Char('u'));
        assert_eq!(state.cart.subtotal_cents(), before);
    }

    #[test]
    fn test_empty_cart_refuses_checkout() {
        let mut state = AppState::default();
        state.cart.clear();
        state.open(Screen::Checkout);
        assert_eq!(state.current_screen, Screen::Home);
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_keys_drive_checkout() {
        let mut state = AppState::default();
        state.open(Screen::Cart);
        state.handle_event(TuiEvent::Enter);
        assert_eq!(state.current_screen, Screen::Checkout);

        // "m" is typed into the field, not treated as a hotkey
        fill_step(&mut state, &["Jane Doe", "1 Orbit Way", "Luna", "9876"]);
        assert_eq!(state.checkout.wizard.current_step(), CheckoutStep::Delivery);
        assert_eq!(state.checkout.focused_field(), Some(CheckoutField::ZipCode));

        type_text(&mut state, "5");
        state.handle_event(TuiEvent::Enter);
        assert_eq!(state.checkout.wizard.current_step(), CheckoutStep::Payment);

        fill_step(&mut state, &["4111111111111111", "12/29", "123"]);
        assert_eq!(state.checkout.wizard.current_step(), CheckoutStep::Confirm);
        assert_eq!(state.checkout.wizard.summary().card_last_four, "1111");

        state.handle_event(TuiEvent::Enter);
        assert_eq!(state.current_screen, Screen::OrderConfirmation);
        assert_eq!(state.router.current(), Route::OrderConfirmation);
        assert!(state.cart.is_empty());
        assert_eq!(state.submitter.placed(), 1);
        assert_eq!(state.profile.order_history[0].status, OrderStatus::Processing);
        assert_eq!(state.profile.order_history[0].total_cents, 5249);

        let result = state.into_result();
        assert_eq!(result.orders.len(), 1);
    }

    #[test]
    fn test_escape_on_first_step_leaves_checkout() {
        let mut state = AppState::default();
        state.open(Screen::Checkout);
        type_text(&mut state, "Jane");
        state.handle_event(TuiEvent::Escape);
        assert_eq!(state.current_screen, Screen::Cart);

        state.open(Screen::Checkout);
        assert_eq!(state.checkout.wizard.form().value(CheckoutField::Name), "Jane");
    }

    #[test]
    fn test_profile_tabs_and_save() {
        let mut state = AppState::default();
        state.open(Screen::Profile);
        assert_eq!(state.profile_view.tab, ProfileTab::OrderHistory);

        state.handle_event(TuiEvent::Tab);
        assert!(state.accepts_text());
        state.handle_event(TuiEvent::End);
        type_text(&mut state, "ny");
        state.handle_event(TuiEvent::Enter);
        assert_eq!(state.profile.details.name, "John Doeny");

        state.handle_event(TuiEvent::Down);
        for _ in 0..30 {
            state.handle_event(TuiEvent::Backspace);
        }
        state.handle_event(TuiEvent::Enter);
        assert_eq!(state.profile.details.email, "john.doe@example.com");
        assert!(!state.profile_view.errors.is_empty());
    }
}
