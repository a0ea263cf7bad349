//! Ratatui 终端 UI 模块
//!
//! 提供基于 ratatui 的点餐界面：首页、菜单、购物车、结账向导、订单确认与个人资料。

pub mod app;
pub mod components;
pub mod display;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use display::should_run_interactive;
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, Notice, NoticeLevel, Router, Screen, TuiResult};
pub use theme::{Theme, theme};
pub use ui::render;
