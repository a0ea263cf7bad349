//! 各屏幕渲染

pub mod cart;
pub mod checkout;
pub mod confirmation;
pub mod exit;
pub mod home;
pub mod menu;
pub mod profile;
