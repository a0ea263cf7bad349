//! 屏幕与首页菜单

use crate::navigation::Route;
use rust_i18n::t;
use std::borrow::Cow;

/// 屏幕枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 首页
    #[default]
    Home,
    /// 菜单浏览
    Menu,
    /// 购物车
    Cart,
    /// 结账向导
    Checkout,
    /// 下单成功
    OrderConfirmation,
    /// 个人资料
    Profile,
    /// 退出确认
    Exit,
}

impl Screen {
    /// 屏幕对应的路由；购物车与退出确认没有独立路由
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Home => Some(Route::Home),
            Screen::Menu => Some(Route::Menu),
            Screen::Checkout => Some(Route::Checkout),
            Screen::OrderConfirmation => Some(Route::OrderConfirmation),
            Screen::Profile => Some(Route::Profile),
            Screen::Cart | Screen::Exit => None,
        }
    }

    /// 是否接收文本输入（此时不响应全局快捷键）
    pub fn takes_text(&self) -> bool {
        matches!(self, Screen::Checkout)
    }
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::Menu => Screen::Menu,
            Route::Checkout => Screen::Checkout,
            Route::OrderConfirmation => Screen::OrderConfirmation,
            Route::Profile => Screen::Profile,
        }
    }
}

/// 首页菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    /// 查看完整菜单
    ViewMenu,
    /// 购物车
    ViewCart,
    /// 去结账
    Checkout,
    /// 个人资料
    Profile,
    /// 退出
    Exit,
}

pub const HOME_ITEMS: [HomeItem; 5] = [
    HomeItem::ViewMenu,
    HomeItem::ViewCart,
    HomeItem::Checkout,
    HomeItem::Profile,
    HomeItem::Exit,
];

impl HomeItem {
    /// 显示文本
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            HomeItem::ViewMenu => t!("home_view_menu"),
            HomeItem::ViewCart => t!("home_view_cart"),
            HomeItem::Checkout => t!("home_checkout"),
            HomeItem::Profile => t!("home_profile"),
            HomeItem::Exit => t!("home_exit"),
        }
    }

    /// 按索引取菜单项
    pub fn from_index(index: usize) -> Option<Self> {
        HOME_ITEMS.get(index).copied()
    }
}
