//! TUI 状态模块

pub mod app;
pub mod browse;
pub mod checkout;
pub mod input;
pub mod menu;
pub mod profile;
pub mod selection;

pub use app::{AppState, Notice, NoticeLevel, Router, TuiResult};
pub use browse::BrowseState;
pub use checkout::CheckoutState;
pub use input::InputState;
pub use menu::{HOME_ITEMS, HomeItem, Screen};
pub use profile::{ProfileState, ProfileTab};
pub use selection::{Selectable, SelectionState};
