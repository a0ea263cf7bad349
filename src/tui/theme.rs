//! 主题模块
//!
//! 深色背景配金色强调色，与餐厅品牌一致。

use crate::profile::BadgeVariant;
use crate::tui::state::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

/// 界面常量
pub mod config {
    /// 列表高亮符号
    pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
    /// 高亮符号显示宽度
    pub const HIGHLIGHT_WIDTH: u16 = 2;
    /// 输入框最大显示宽度
    pub const INPUT_WIDTH: u16 = 48;
    /// 价格列宽度
    pub const PRICE_WIDTH: usize = 9;
}

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 强调色（金色）
    pub accent: Color,
    /// 选中项背景色
    pub selected_bg: Color,
    /// 选中项前景色
    pub selected_fg: Color,
    /// 成功色
    pub success: Color,
    /// 警告色
    pub warning: Color,
    /// 错误色
    pub error: Color,
    /// 次要文字
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 价格颜色
    pub price: Color,
}

impl Theme {
    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 聚焦输入框边框
    pub fn focused_border(&self) -> Style {
        Style::new().fg(self.accent).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    pub fn success(&self) -> Style {
        Style::new().fg(self.success).bg(self.bg)
    }

    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.bg)
    }

    /// 价格样式
    pub fn price(&self) -> Style {
        Style::new().fg(self.price).bg(self.bg)
    }

    /// 不可用按钮
    pub fn disabled(&self) -> Style {
        Style::new()
            .fg(self.hint)
            .bg(self.bg)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    }

    /// 订单状态徽章
    pub fn badge(&self, variant: BadgeVariant) -> Style {
        let style = Style::new().add_modifier(Modifier::BOLD);
        match variant {
            BadgeVariant::Default => style.fg(self.bg).bg(self.accent),
            BadgeVariant::Secondary => style.fg(self.fg).bg(Color::DarkGray),
            BadgeVariant::Destructive => style.fg(self.fg).bg(self.error),
        }
    }

    /// 提示条样式
    pub fn notice(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Info => self.normal(),
            NoticeLevel::Success => self.success().add_modifier(Modifier::BOLD),
            NoticeLevel::Error => self.error().add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

/// 全局主题实例
pub static THEME: Theme = Theme {
    bg: Color::Black,
    fg: Color::White,
    accent: Color::Rgb(212, 175, 55),
    selected_bg: Color::Rgb(212, 175, 55),
    selected_fg: Color::Black,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    hint: Color::Gray,
    border: Color::DarkGray,
    price: Color::Rgb(212, 175, 55),
};

/// 获取全局主题引用
pub fn theme() -> &'static Theme {
    &THEME
}
