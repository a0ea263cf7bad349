//! 个人资料界面状态

use crate::profile::{Profile, ProfileDetails, ProfileError, ProfileField};
use crate::tui::state::input::InputState;
use crate::tui::state::selection::SelectionState;
use rust_i18n::t;
use std::borrow::Cow;

/// 个人资料标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    /// 订单历史（默认）
    #[default]
    OrderHistory,
    /// 账户信息
    AccountDetails,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::OrderHistory, ProfileTab::AccountDetails];

    /// 标签文本
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            ProfileTab::OrderHistory => t!("profile_tab_history"),
            ProfileTab::AccountDetails => t!("profile_tab_account"),
        }
    }

    /// 切换到另一个标签
    pub fn toggle(&self) -> Self {
        match self {
            ProfileTab::OrderHistory => ProfileTab::AccountDetails,
            ProfileTab::AccountDetails => ProfileTab::OrderHistory,
        }
    }
}

/// 个人资料界面状态
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// 当前标签
    pub tab: ProfileTab,
    /// 订单历史列表选择
    pub history: SelectionState,
    /// 聚焦的账户字段
    pub focus: usize,
    /// 姓名草稿
    pub name: InputState,
    /// 邮箱草稿
    pub email: InputState,
    /// 上次保存的校验错误
    pub errors: Vec<ProfileError>,
    /// 上次保存是否成功
    pub saved: bool,
}

impl ProfileState {
    /// 从资料创建草稿
    pub fn new(profile: &Profile) -> Self {
        Self {
            history: SelectionState::with_count(profile.order_history.len()),
            name: InputState::with_value(&profile.details.name),
            email: InputState::with_value(&profile.details.email),
            ..Self::default()
        }
    }

    /// 聚焦字段
    pub fn focused_field(&self) -> ProfileField {
        ProfileField::ALL[self.focus % ProfileField::ALL.len()]
    }

    /// 切换聚焦字段
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ProfileField::ALL.len();
    }

    /// 聚焦字段的输入框
    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focused_field() {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
        }
    }

    /// 某字段的错误信息
    pub fn error_for(&self, field: ProfileField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// 草稿内容
    pub fn draft(&self) -> ProfileDetails {
        ProfileDetails {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
        }
    }

    /// 校验并保存草稿
    pub fn save(&mut self, profile: &mut Profile) -> bool {
        match profile.update_details(self.draft()) {
            Ok(()) => {
                self.errors.clear();
                self.saved = true;
            }
            Err(errors) => {
                self.errors = errors;
                self.saved = false;
            }
        }
        self.saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_reports_errors() {
        let mut profile = Profile::default();
        let mut state = ProfileState::new(&profile);
        assert_eq!(state.tab, ProfileTab::OrderHistory);

        state.name = InputState::with_value("J");
        assert!(!state.save(&mut profile));
        assert!(state.error_for(ProfileField::Name).is_some());
        assert!(state.error_for(ProfileField::Email).is_none());

        state.focused_input().insert_char('o');
        assert!(state.save(&mut profile));
        assert_eq!(profile.details.name, "Jo");
        assert!(state.errors.is_empty());
    }
}
